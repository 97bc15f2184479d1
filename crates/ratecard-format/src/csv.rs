//! CSV output format.

use ratecard_estimate::Estimate;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter};

const HEADER: [&str; 11] = [
    "category",
    "sub_service",
    "complexity",
    "duration_months",
    "team_size",
    "currency",
    "monthly_rate",
    "total_cost",
    "maintenance_cost",
    "infrastructure_cost",
    "features",
];

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a newline.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains(self.delimiter) || field.contains(['"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_estimates<W: Write>(
        &self,
        estimates: &[Estimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter.to_string();

        if self.include_header {
            writeln!(writer, "{}", HEADER.join(d.as_str()))?;
        }

        for e in estimates {
            let features = e.features.join("; ");
            let row = [
                Cow::Borrowed(e.category.as_str()),
                Cow::Borrowed(e.sub_service.as_str()),
                Cow::Borrowed(e.complexity.as_str()),
                Cow::Owned(e.duration.to_string()),
                Cow::Owned(e.team_size.to_string()),
                Cow::Borrowed(e.currency.code()),
                Cow::Owned(e.monthly_rate.to_string()),
                Cow::Owned(e.total_cost.to_string()),
                Cow::Owned(format!("{:.2}", e.breakdown.maintenance_cost)),
                Cow::Owned(format!("{:.2}", e.breakdown.infrastructure_cost)),
                Cow::Owned(features),
            ];
            let fields: Vec<_> = row.iter().map(|f| self.escape(f)).collect();
            writeln!(writer, "{}", fields.join(d.as_str()))?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratecard_estimate::Estimator;

    fn estimate() -> Estimate {
        Estimator::global()
            .estimate_raw("development", "web-development", "medium", 3, 3, "inr")
            .unwrap()
    }

    #[test]
    fn test_csv_output() {
        let output = CsvFormatter::new().render(&[estimate()]).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("category,sub_service,complexity"));
        assert!(lines[1].starts_with(
            "development,web-development,medium,3,3,INR,100000,375000,45000.00,30000.00,"
        ));
    }

    #[test]
    fn test_csv_without_header() {
        let output = CsvFormatter::new()
            .with_header(false)
            .render(&[estimate(), estimate()])
            .unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_escape() {
        let csv = CsvFormatter::new();
        assert_eq!(csv.escape("plain"), "plain");
        assert_eq!(csv.escape("a,b"), "\"a,b\"");
        assert_eq!(csv.escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_tsv() {
        let tsv = CsvFormatter::tsv();
        let output = tsv.render(&[estimate()]).unwrap();
        assert!(output.lines().next().unwrap().contains("category\tsub_service"));
        assert_eq!(tsv.extension(), "tsv");
    }
}
