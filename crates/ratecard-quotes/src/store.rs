//! Persistent quote storage.

use crate::{Quote, QuoteId};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during quote storage operations.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse quote file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize quote: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// No quote matches the identifier.
    #[error("Quote not found: {0}")]
    NotFound(String),

    /// More than one quote matches the identifier prefix.
    #[error("Quote id '{prefix}' is ambiguous ({count} matches)")]
    Ambiguous {
        /// The prefix that was looked up.
        prefix: String,
        /// Number of matching quotes.
        count: usize,
    },
}

/// Result type for quote storage operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Manages saved quotes on disk.
///
/// Each quote is stored as `<id>.json` in the quotes directory.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    /// Directory for quote JSON files.
    quotes_path: PathBuf,
}

impl QuoteStore {
    /// Creates a quote store in the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(quotes_path: PathBuf) -> Result<Self> {
        if !quotes_path.exists() {
            fs::create_dir_all(&quotes_path).map_err(|e| QuoteError::CreateDir {
                path: quotes_path.clone(),
                source: e,
            })?;
        }
        Ok(Self { quotes_path })
    }

    /// Returns the default quotes directory.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/ratecard/quotes/`
    /// - macOS: `~/Library/Application Support/ratecard/quotes/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\ratecard\data\quotes\`
    ///
    /// Falls back to `~/.ratecard/quotes/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "ratecard")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join("quotes")
    }

    /// Creates a quote store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the quotes directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.quotes_path
    }

    /// Returns the path to a quote's file.
    #[must_use]
    pub fn quote_path(&self, id: QuoteId) -> PathBuf {
        self.quotes_path.join(format!("{id}.json"))
    }

    /// Saves a quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote cannot be serialized or written to disk.
    pub fn save(&self, quote: &Quote) -> Result<PathBuf> {
        let path = self.quote_path(quote.id);
        let json = serde_json::to_string_pretty(quote)?;

        fs::write(&path, json).map_err(|e| QuoteError::WriteFile {
            path: path.clone(),
            source: e,
        })?;
        debug!(id = %quote.id, path = %path.display(), "quote saved");
        Ok(path)
    }

    /// Loads a quote by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote file does not exist or cannot be parsed.
    pub fn load(&self, id: QuoteId) -> Result<Quote> {
        let path = self.quote_path(id);

        if !path.exists() {
            return Err(QuoteError::NotFound(id.to_string()));
        }

        let content = fs::read_to_string(&path).map_err(|e| QuoteError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| QuoteError::ParseJson { path, source: e })
    }

    /// Finds a quote by full identifier or unambiguous prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if no quote or more than one quote matches.
    pub fn find(&self, id_or_prefix: &str) -> Result<Quote> {
        if let Ok(id) = id_or_prefix.parse::<QuoteId>() {
            return self.load(id);
        }

        let prefix = id_or_prefix.to_lowercase().replace('-', "");
        if prefix.is_empty() {
            return Err(QuoteError::NotFound(id_or_prefix.to_string()));
        }

        let mut matches: Vec<Quote> = self
            .list()?
            .into_iter()
            .filter(|q| q.id.simple().to_string().starts_with(&prefix))
            .collect();

        match matches.len() {
            0 => Err(QuoteError::NotFound(id_or_prefix.to_string())),
            1 => Ok(matches.remove(0)),
            count => Err(QuoteError::Ambiguous {
                prefix: id_or_prefix.to_string(),
                count,
            }),
        }
    }

    /// Lists all saved quotes.
    ///
    /// Returns quotes sorted by creation time (newest first). Files that
    /// fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the quotes directory cannot be read.
    pub fn list(&self) -> Result<Vec<Quote>> {
        let entries = fs::read_dir(&self.quotes_path).map_err(|e| QuoteError::ReadDir {
            path: self.quotes_path.clone(),
            source: e,
        })?;

        let mut quotes = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| QuoteError::ReadDir {
                path: self.quotes_path.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path).map_err(|e| QuoteError::ReadFile {
                    path: path.clone(),
                    source: e,
                })?;

                match serde_json::from_str::<Quote>(&content) {
                    Ok(quote) => quotes.push(quote),
                    Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable quote file"),
                }
            }
        }

        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(quotes)
    }

    /// Deletes a quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote does not exist or cannot be deleted.
    pub fn delete(&self, id: QuoteId) -> Result<()> {
        let path = self.quote_path(id);

        if !path.exists() {
            return Err(QuoteError::NotFound(id.to_string()));
        }

        fs::remove_file(&path).map_err(|e| QuoteError::DeleteFile { path, source: e })?;
        debug!(%id, "quote deleted");
        Ok(())
    }

    /// Deletes every saved quote, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the quotes cannot be listed or deleted.
    pub fn clear(&self) -> Result<usize> {
        let quotes = self.list()?;
        for quote in &quotes {
            self.delete(quote.id)?;
        }
        Ok(quotes.len())
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".ratecard")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use ratecard_estimate::{Estimate, Estimator};
    use tempfile::TempDir;

    fn estimate(duration: u32) -> Estimate {
        Estimator::global()
            .estimate_raw("development", "web-development", "medium", duration, 3, "inr")
            .unwrap()
    }

    fn store() -> (TempDir, QuoteStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = QuoteStore::new(temp_dir.path().join("quotes")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_store_creation() {
        let (temp_dir, store) = store();
        assert!(store.path().exists());
        assert_eq!(store.path(), temp_dir.path().join("quotes"));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = store();
        let quote = Quote::new(estimate(3), Some("Acme".to_string()));

        let path = store.save(&quote).unwrap();
        assert!(path.exists());

        let loaded = store.load(quote.id).unwrap();
        assert_eq!(loaded, quote);
        assert_eq!(loaded.estimate.total_cost, 375_000);
    }

    #[test]
    fn test_list_newest_first() {
        let (_temp_dir, store) = store();

        let mut older = Quote::new(estimate(3), None);
        older.created_at -= Duration::hours(1);
        let newer = Quote::new(estimate(6), None);

        store.save(&older).unwrap();
        store.save(&newer).unwrap();

        let quotes = store.list().unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].id, newer.id);
        assert_eq!(quotes[1].id, older.id);
    }

    #[test]
    fn test_list_skips_corrupt_files() {
        let (_temp_dir, store) = store();
        store.save(&Quote::new(estimate(3), None)).unwrap();
        fs::write(store.path().join("broken.json"), "{not json").unwrap();
        fs::write(store.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, store) = store();
        let quote = Quote::new(estimate(3), None);
        store.save(&quote).unwrap();

        assert_eq!(store.find(&quote.short_id()).unwrap().id, quote.id);
        assert_eq!(store.find(&quote.id.to_string()).unwrap().id, quote.id);
        assert!(matches!(store.find("zzzz"), Err(QuoteError::NotFound(_))));
        assert!(matches!(store.find(""), Err(QuoteError::NotFound(_))));
    }

    #[test]
    fn test_find_ambiguous_prefix() {
        let (_temp_dir, store) = store();
        for id in [
            "aaaa0000-0000-4000-8000-000000000001",
            "aaaa1111-0000-4000-8000-000000000002",
        ] {
            let mut quote = Quote::new(estimate(3), None);
            quote.id = id.parse().unwrap();
            store.save(&quote).unwrap();
        }

        assert!(matches!(
            store.find("aaaa"),
            Err(QuoteError::Ambiguous { count: 2, .. })
        ));
        assert_eq!(
            store.find("AAAA1").unwrap().id.to_string(),
            "aaaa1111-0000-4000-8000-000000000002"
        );
        // A prefix of only dashes is empty once normalized.
        assert!(matches!(store.find("--"), Err(QuoteError::NotFound(_))));
    }

    #[test]
    fn test_delete_and_clear() {
        let (_temp_dir, store) = store();
        let quote = Quote::new(estimate(3), None);
        store.save(&quote).unwrap();

        store.delete(quote.id).unwrap();
        assert!(matches!(store.load(quote.id), Err(QuoteError::NotFound(_))));
        assert!(matches!(store.delete(quote.id), Err(QuoteError::NotFound(_))));

        store.save(&Quote::new(estimate(3), None)).unwrap();
        store.save(&Quote::new(estimate(5), None)).unwrap();
        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.list().unwrap().is_empty());
    }
}
