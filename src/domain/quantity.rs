//! Human-readable quantities.

/// Formats a whole number with `,` thousands separators.
#[must_use]
pub fn format_quantity(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0" ; "zero")]
    #[test_case(250, "250" ; "hundreds")]
    #[test_case(1000, "1,000" ; "thousand")]
    #[test_case(12250, "12,250" ; "ten_thousands")]
    #[test_case(1_000_000, "1,000,000" ; "million")]
    fn test_format_quantity(value: u64, expected: &str) {
        assert_eq!(format_quantity(value), expected);
    }
}
