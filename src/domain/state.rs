// src/domain/state.rs

/// Availability of a listing at a shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductState {
    Listed,
    Available,
    Reserved,
    Sold,
    Removed,
    Unknown,
}

impl ProductState {
    /// Case-insensitive. Anything unrecognised, or no value at all, is `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ProductState::Unknown;
        };

        match raw.trim().to_ascii_uppercase().as_str() {
            "LISTED" => ProductState::Listed,
            "AVAILABLE" => ProductState::Available,
            "RESERVED" => ProductState::Reserved,
            "SOLD" => ProductState::Sold,
            "REMOVED" => ProductState::Removed,
            _ => ProductState::Unknown,
        }
    }

    /// Reads a state out of a JSON value; non-strings are `Unknown`.
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        Self::parse(value.and_then(|v| v.as_str()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductState::Listed => "LISTED",
            ProductState::Available => "AVAILABLE",
            ProductState::Reserved => "RESERVED",
            ProductState::Sold => "SOLD",
            ProductState::Removed => "REMOVED",
            ProductState::Unknown => "UNKNOWN",
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProductState::Listed => "productState.listed",
            ProductState::Available => "productState.available",
            ProductState::Reserved => "productState.reserved",
            ProductState::Sold => "productState.sold",
            ProductState::Removed => "productState.removed",
            ProductState::Unknown => "productState.unknown",
        }
    }
}
