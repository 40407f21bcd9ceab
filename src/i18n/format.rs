// Dates and times are rendered in UTC; the server has no viewer time zone.

use crate::domain::price::Price;
use crate::i18n::Locale;
use chrono::{DateTime, Utc};

pub fn format_date(at: &DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::De => at.format("%d.%m.%Y").to_string(),
        Locale::En => at.format("%m/%d/%Y").to_string(),
    }
}

pub fn format_time(at: &DateTime<Utc>, locale: Locale) -> String {
    match locale {
        Locale::De => at.format("%H:%M").to_string(),
        Locale::En => at.format("%I:%M %p").to_string(),
    }
}

/// `1234567` EUR → `12.345,67 €` (de) / `€12,345.67` (en).
pub fn format_price(price: &Price, locale: Locale) -> String {
    let (decimal, group) = match locale {
        Locale::De => (',', '.'),
        Locale::En => ('.', ','),
    };

    let sign = if price.amount < 0 { "-" } else { "" };
    let minor = price.amount.unsigned_abs();
    let number = format!(
        "{}{decimal}{:02}",
        group_thousands(minor / 100, group),
        minor % 100
    );
    let symbol = price.currency.symbol();

    match locale {
        Locale::De => format!("{sign}{number} {symbol}"),
        Locale::En => format!("{sign}{symbol}{number}"),
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
