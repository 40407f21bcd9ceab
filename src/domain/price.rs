// src/domain/price.rs

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    Gbp,
    Usd,
    Aud,
    Cad,
    Nzd,
}

impl Currency {
    /// Case-insensitive; unsupported or missing currencies fall back to EUR.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_uppercase()).as_deref() {
            Some("GBP") => Currency::Gbp,
            Some("USD") => Currency::Usd,
            Some("AUD") => Currency::Aud,
            Some("CAD") => Currency::Cad,
            Some("NZD") => Currency::Nzd,
            _ => Currency::Eur,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Nzd => "NZD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Usd => "$",
            Currency::Aud => "A$",
            Currency::Cad => "CA$",
            Currency::Nzd => "NZ$",
        }
    }
}

/// An amount in minor units (cents) plus its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub amount: i64,
    pub currency: Currency,
}

impl Price {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Lenient decode of `{ amount, currency }`. A missing or non-integer
    /// amount reads as 0 and a missing currency as EUR; this never fails.
    pub fn from_value(value: &Value) -> Self {
        let amount = value.get("amount").and_then(Value::as_i64).unwrap_or(0);
        let currency = Currency::parse(value.get("currency").and_then(Value::as_str));
        Self { amount, currency }
    }

    /// Like `from_value`, but a JSON `null` (or absent field) means "no price".
    pub fn from_optional(value: Option<&Value>) -> Option<Self> {
        match value {
            None | Some(Value::Null) => None,
            Some(v) => Some(Self::from_value(v)),
        }
    }
}

/// Wire shape of a price on typed endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceData {
    pub amount: i64,
    pub currency: Option<String>,
}

impl From<PriceData> for Price {
    fn from(data: PriceData) -> Self {
        Price::new(data.amount, Currency::parse(data.currency.as_deref()))
    }
}
