use chrono::{DateTime, Local};

use crate::categorize::Categorizer;
use crate::classify::Captures;
use crate::models::{Period, PeriodUnit, Transaction};

/// Why captured fields could not be turned into a domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExtractError {
    MissingField(&'static str),
    InvalidAmount(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing field: {field}"),
            Self::InvalidAmount(raw) => write!(f, "not a positive whole number: {raw:?}"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Parse a strictly positive integer made of ASCII digits only.
pub(crate) fn parse_amount(raw: &str) -> Result<i64, ExtractError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractError::InvalidAmount(raw.to_string()));
    }
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ExtractError::InvalidAmount(raw.to_string())),
    }
}

pub(crate) struct FieldExtractor {
    categorizer: Categorizer,
}

impl FieldExtractor {
    pub(crate) fn new(categorizer: Categorizer) -> Self {
        Self { categorizer }
    }

    /// Build a transaction from `amount` + `desc` captures, stamped `now`.
    pub(crate) fn transaction(
        &self,
        captures: &Captures,
        now: DateTime<Local>,
    ) -> Result<Transaction, ExtractError> {
        if captures.len() < 2 {
            return Err(match captures.field("amount", 0) {
                Some(_) => ExtractError::MissingField("desc"),
                None => ExtractError::MissingField("amount"),
            });
        }

        let amount = captures
            .field("amount", 0)
            .ok_or(ExtractError::MissingField("amount"))
            .and_then(parse_amount)?;
        let description = captures
            .field("desc", 1)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(ExtractError::MissingField("desc"))?;

        let category = self.categorizer.categorize(description);
        Ok(Transaction::new(amount, description.to_string(), category, now))
    }

    /// Build a lookback period from `amount` + `unit` captures. An unknown
    /// unit token becomes days.
    pub(crate) fn period(&self, captures: &Captures) -> Result<Period, ExtractError> {
        let raw_amount = captures
            .field("amount", 0)
            .ok_or(ExtractError::MissingField("amount"))?;
        let unit_token = captures
            .field("unit", 1)
            .ok_or(ExtractError::MissingField("unit"))?;

        let amount = parse_amount(raw_amount)?;
        let amount =
            u32::try_from(amount).map_err(|_| ExtractError::InvalidAmount(raw_amount.to_string()))?;

        let (unit, recognized) = PeriodUnit::parse(unit_token);
        if !recognized {
            tracing::debug!(unit = unit_token, "unrecognized period unit, using days");
        }
        Ok(Period::new(amount, unit))
    }
}
