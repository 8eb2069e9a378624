//! Primitive checks on raw user input.

use crate::domain::ValidationError;

fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|value| *value > 0)
}

/// Parses an order amount.
///
/// # Errors
/// Returns [`ValidationError::InvalidAmount`] unless the input is a positive integer.
pub fn parse_order_amount(raw: &str) -> Result<u64, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidAmount)
}

/// Parses a new pack size.
///
/// # Errors
/// Returns [`ValidationError::InvalidPackSize`] unless the input is a positive integer.
pub fn parse_pack_size(raw: &str) -> Result<u64, ValidationError> {
    parse_positive(raw).ok_or(ValidationError::InvalidPackSize)
}

/// Checks the id carried by a delete trigger.
///
/// # Errors
/// Returns [`ValidationError::InvalidPackId`] for a zero id.
pub const fn validate_pack_id(id: u64) -> Result<u64, ValidationError> {
    if id == 0 {
        Err(ValidationError::InvalidPackId)
    } else {
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("251", Some(251) ; "plain")]
    #[test_case("  42 ", Some(42) ; "surrounding_whitespace")]
    #[test_case("+7", Some(7) ; "explicit_plus")]
    #[test_case("0", None ; "zero")]
    #[test_case("-5", None ; "negative")]
    #[test_case("2.5", None ; "fraction")]
    #[test_case("", None ; "empty")]
    #[test_case("abc", None ; "letters")]
    #[test_case("99999999999999999999999", None ; "overflow")]
    fn test_parse_order_amount(raw: &str, expected: Option<u64>) {
        assert_eq!(parse_order_amount(raw).ok(), expected);
    }

    #[test]
    fn test_parse_pack_size_error_kind() {
        assert_eq!(parse_pack_size("x"), Err(ValidationError::InvalidPackSize));
        assert_eq!(parse_pack_size("500"), Ok(500));
    }

    #[test]
    fn test_validate_pack_id() {
        assert_eq!(validate_pack_id(0), Err(ValidationError::InvalidPackId));
        assert_eq!(validate_pack_id(3), Ok(3));
    }
}
