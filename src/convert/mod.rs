//! Input validation and radix conversion.
//!
//! Everything here is pure and stateless: the same input always produces the
//! same output, and nothing is retained between calls. The UI layer feeds
//! form state into [`convert_request`] and renders whatever comes back.

mod base;
mod error;

pub use base::Base;
pub use error::ConvertError;

use std::fmt;

/// A completed conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub from: Base,
    pub to: Base,
    /// The trimmed input exactly as the user typed it (case preserved).
    pub input: String,
    /// The re-rendered value, uppercase for digits above 9.
    pub output: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {} → ({}) {}",
            self.from.radix(),
            self.input,
            self.to.radix(),
            self.output
        )
    }
}

/// Check every character of `text` against the digit alphabet of `base`.
///
/// The empty string is invalid: a number needs at least one digit.
pub fn validate(text: &str, base: Base) -> bool {
    !text.is_empty() && text.chars().all(|c| base.contains_digit(c))
}

/// Interpret `text` as a non-negative integer in `from` and re-render it
/// in `to`.
///
/// Validation runs first so a bad digit is reported with the offending base.
/// The parse afterwards can still fail on its own: digits that are all valid
/// may overflow `u64`. Both checks are kept rather than trusting validation
/// alone.
pub fn convert(text: &str, from: Base, to: Base) -> Result<String, ConvertError> {
    if !validate(text, from) {
        return Err(ConvertError::InvalidDigits { base: from });
    }
    let value = u64::from_str_radix(text, from.radix()).map_err(|_| ConvertError::ParseFailed)?;
    Ok(render(value, to))
}

/// Run one full conversion attempt over raw form input.
///
/// Checks are applied in the order the user sees them reported: empty input,
/// missing selection(s), identical bases, digit alphabet, parse. The input
/// is trimmed before any check.
pub fn convert_request(
    input: &str,
    from: Option<Base>,
    to: Option<Base>,
) -> Result<Conversion, ConvertError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let (Some(from), Some(to)) = (from, to) else {
        return Err(ConvertError::MissingSelection);
    };
    if from == to {
        return Err(ConvertError::SameBase);
    }
    let output = convert(input, from, to)?;
    Ok(Conversion {
        from,
        to,
        input: input.to_string(),
        output,
    })
}

fn render(value: u64, base: Base) -> String {
    match base {
        Base::Binary => format!("{value:b}"),
        Base::Octal => format!("{value:o}"),
        Base::Decimal => value.to_string(),
        Base::Hex => format!("{value:X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_each_alphabet() {
        assert!(validate("1010", Base::Binary));
        assert!(validate("01234567", Base::Octal));
        assert!(validate("0123456789", Base::Decimal));
        assert!(validate("0123456789abcdefABCDEF", Base::Hex));
    }

    #[test]
    fn validate_rejects_digits_outside_alphabet() {
        assert!(!validate("102", Base::Binary));
        assert!(!validate("9", Base::Octal));
        assert!(!validate("12a", Base::Decimal));
        assert!(!validate("FG", Base::Hex));
    }

    #[test]
    fn validate_rejects_empty_input() {
        for base in Base::ALL {
            assert!(!validate("", base));
        }
    }

    #[test]
    fn validate_rejects_signs_and_whitespace() {
        assert!(!validate("-101", Base::Binary));
        assert!(!validate("1 0", Base::Binary));
        assert!(!validate("+12", Base::Decimal));
    }

    #[test]
    fn convert_binary_to_decimal() {
        assert_eq!(convert("1010", Base::Binary, Base::Decimal).unwrap(), "10");
    }

    #[test]
    fn convert_hex_accepts_either_case() {
        assert_eq!(convert("FF", Base::Hex, Base::Decimal).unwrap(), "255");
        assert_eq!(convert("ff", Base::Hex, Base::Decimal).unwrap(), "255");
    }

    #[test]
    fn convert_renders_uppercase_hex() {
        assert_eq!(convert("255", Base::Decimal, Base::Hex).unwrap(), "FF");
        assert_eq!(convert("11011110", Base::Binary, Base::Hex).unwrap(), "DE");
    }

    #[test]
    fn convert_reports_invalid_digits_with_source_base() {
        assert_eq!(
            convert("9", Base::Octal, Base::Decimal),
            Err(ConvertError::InvalidDigits { base: Base::Octal })
        );
    }

    #[test]
    fn convert_zero_stays_zero_everywhere() {
        for to in [Base::Binary, Base::Octal, Base::Hex] {
            assert_eq!(convert("0", Base::Decimal, to).unwrap(), "0");
        }
    }

    #[test]
    fn convert_round_trips_digit_sequences() {
        // Leading zeros are not preserved and hex comes back uppercase, so
        // round-trip from a rendered (canonical) form.
        for value in [1u64, 7, 8, 255, 4096, 123_456_789] {
            let hex = render(value, Base::Hex);
            let binary = convert(&hex, Base::Hex, Base::Binary).unwrap();
            assert_eq!(convert(&binary, Base::Binary, Base::Hex).unwrap(), hex);
        }
    }

    #[test]
    fn convert_overflow_is_a_parse_failure() {
        // 17 F digits exceed u64::MAX, which is 16 F digits.
        let too_big = "F".repeat(17);
        assert_eq!(
            convert(&too_big, Base::Hex, Base::Decimal),
            Err(ConvertError::ParseFailed)
        );
    }

    #[test]
    fn u64_max_is_still_convertible() {
        let max_hex = "FFFFFFFFFFFFFFFF";
        assert_eq!(
            convert(max_hex, Base::Hex, Base::Decimal).unwrap(),
            u64::MAX.to_string()
        );
    }
}
