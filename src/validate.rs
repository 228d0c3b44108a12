/// Longest chat message accepted, in characters.
pub(crate) const MAX_MESSAGE_CHARS: usize = 500;
/// Largest amount a single transaction may carry.
pub(crate) const MAX_AMOUNT: i64 = 10_000_000;
pub(crate) const MAX_DESCRIPTION_CHARS: usize = 100;

/// Input rejected before it reaches storage. `Display` is the text shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationError {
    EmptyMessage,
    MessageTooLong,
    NonPositiveAmount,
    AmountTooLarge,
    EmptyDescription,
    DescriptionTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::EmptyMessage => "Pesan tidak valid",
            Self::MessageTooLong => "Pesan terlalu panjang",
            Self::NonPositiveAmount => "Nominal harus lebih dari 0",
            Self::AmountTooLarge => "Nominal terlalu besar (max 10 juta)",
            Self::EmptyDescription => "Deskripsi tidak boleh kosong",
            Self::DescriptionTooLong => "Deskripsi terlalu panjang (max 100 karakter)",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// Reject blank or oversized messages; returns the trimmed text.
pub(crate) fn validate_message(message: &str) -> Result<&str, ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooLong);
    }
    Ok(message.trim())
}

pub(crate) fn validate_amount(amount: i64) -> Result<i64, ValidationError> {
    if amount <= 0 {
        Err(ValidationError::NonPositiveAmount)
    } else if amount > MAX_AMOUNT {
        Err(ValidationError::AmountTooLarge)
    } else {
        Ok(amount)
    }
}

/// Returns the description trimmed and with `<` / `>` removed.
pub(crate) fn validate_description(description: &str) -> Result<String, ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.trim().replace(['<', '>'], ""))
}

/// Trim, drop angle brackets and collapse runs of whitespace to one space.
pub(crate) fn sanitize_input(input: &str) -> String {
    input
        .replace(['<', '>'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
