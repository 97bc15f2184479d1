//! Currency amount formatting.

use ratecard_types::Currency;

/// Formats a whole amount with symbol and grouping (e.g. "₹3,75,000", "$4,500").
#[must_use]
pub fn format_amount(amount: u64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), group_digits(amount, currency))
}

/// Groups the digits of an amount the way the currency's locale does.
///
/// INR uses lakh/crore grouping (last three digits, then pairs); every other
/// currency uses thousands.
#[must_use]
pub fn group_digits(amount: u64, currency: Currency) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group = match currency {
        Currency::Inr => 2,
        Currency::Usd | Currency::Eur | Currency::Gbp => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > group {
        groups.push(&head[end - group..end]);
        end -= group;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
