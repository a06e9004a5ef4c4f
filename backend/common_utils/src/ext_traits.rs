//! Extension traits for configuration values and loosely typed payment data.

use std::str::FromStr;

use error_stack::ResultExt;
use rust_decimal::Decimal;

use crate::errors::{CustomResult, ParsingError};

/// Helpers for raw values read from the scoped configuration store.
pub trait ConfigValueExt {
    /// Splits a comma separated list, trimming entries and dropping empty ones.
    fn split_list(&self) -> Vec<String>;

    /// `""`, `"0"`, `"false"`, `"no"` and `"off"` are false, anything else is true.
    fn is_truthy_flag(&self) -> bool;

    fn parse_decimal(&self) -> CustomResult<Decimal, ParsingError>;
}

impl ConfigValueExt for str {
    fn split_list(&self) -> Vec<String> {
        self.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    fn is_truthy_flag(&self) -> bool {
        let value = self.trim();
        !(value.is_empty()
            || value == "0"
            || value.eq_ignore_ascii_case("false")
            || value.eq_ignore_ascii_case("no")
            || value.eq_ignore_ascii_case("off"))
    }

    fn parse_decimal(&self) -> CustomResult<Decimal, ParsingError> {
        Decimal::from_str(self.trim())
            .change_context(ParsingError::DecimalParsingError)
            .attach_printable_lazy(|| format!("Unable to parse {self:?} as a decimal"))
    }
}

pub trait ValueExt {
    /// Loose truthiness used for flags submitted by the storefront.
    fn is_truthy(&self) -> bool;

    /// String form of scalar values, `None` for everything else.
    fn as_plain_string(&self) -> Option<String>;
}

impl ValueExt for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
            Self::String(value) => value.as_str().is_truthy_flag(),
            Self::Array(values) => !values.is_empty(),
            Self::Object(map) => !map.is_empty(),
        }
    }

    fn as_plain_string(&self) -> Option<String> {
        match self {
            Self::String(value) => Some(value.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Null | Self::Bool(_) | Self::Array(_) | Self::Object(_) => None,
        }
    }
}
