//! Lexical validators for tokens pulled out of the tree.
//!
//! All functions are total: any string (or displayable number) is accepted
//! and none of them panic.

use std::fmt::Display;

/// Vendor prefixes recognized by [`strip_prefix`].
pub const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-", "-khtml-"];

/// Returns true if `value` is a finite decimal number.
///
/// Accepts strings and numbers alike (`10`, `"10"`, `"-0.5"`, `"1e3"`);
/// surrounding whitespace is ignored. Hex-looking input such as `"ff00ff"`
/// is rejected.
#[must_use]
pub fn is_number(value: impl Display) -> bool {
    value
        .to_string()
        .trim()
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
}

/// Returns true if `s` has letters and all of them are uppercase.
#[must_use]
pub fn is_upper_case(s: &str) -> bool {
    s == s.to_uppercase() && s != s.to_lowercase()
}

/// Returns true if `s` has letters and all of them are lowercase.
#[must_use]
pub fn is_lower_case(s: &str) -> bool {
    s == s.to_lowercase() && s != s.to_uppercase()
}

/// Returns true if `s` is a 3 or 6 digit hex color body (without `#`).
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 6) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Returns true if `s` contains a line terminator (`\n` or `\r\n`).
#[must_use]
pub fn has_eol(s: &str) -> bool {
    s.contains('\n')
}

/// Returns true if nothing but line terminators remain in `s`.
///
/// `"\r\n\r\n"` is an empty line; `"\r\n \r\n"` is not.
#[must_use]
pub fn is_empty_line(s: &str) -> bool {
    s.replace("\r\n", "").replace('\n', "").is_empty()
}

/// Removes a leading vendor prefix, returning the canonical property name.
///
/// Names without a recognized prefix pass through unchanged.
#[must_use]
pub fn strip_prefix(property: &str) -> &str {
    VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| property.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert!(is_number(10));
        assert!(is_number("10"));
        assert!(is_number("0.5"));
        assert!(is_number("-3"));
        assert!(is_number(" 7 "));
        assert!(!is_number("ten"));
        assert!(!is_number("ff00ff"));
        assert!(!is_number("10px"));
        assert!(!is_number(""));
        assert!(!is_number(f64::NAN));
        assert!(!is_number("inf"));
    }

    #[test]
    fn upper_case() {
        assert!(is_upper_case("TEST"));
        assert!(is_upper_case("ABC123"));
        assert!(!is_upper_case("test"));
        assert!(!is_upper_case("abcDEF"));
        assert!(!is_upper_case("123"));
        assert!(!is_upper_case(""));
    }

    #[test]
    fn lower_case() {
        assert!(is_lower_case("test"));
        assert!(is_lower_case("abc123"));
        assert!(!is_lower_case("TEST"));
        assert!(!is_lower_case("abcDEF"));
        assert!(!is_lower_case("123"));
    }

    #[test]
    fn cases_are_exclusive() {
        for s in ["", "a", "A", "aA", "1", "a1", "A1", "#fff", "Ff", "ß", "-_-"] {
            assert!(!(is_upper_case(s) && is_lower_case(s)), "both true for {s:?}");
        }
    }

    #[test]
    fn valid_hex() {
        for s in ["abcdef", "ABCDEF", "123456", "ABC123", "abc123", "fff", "123"] {
            assert!(is_valid_hex(s), "{s} should be valid");
        }
        for s in ["efghij", "thj", "ab", "12", "1234567", "abc1234", "", "f", "ffff", "fffff"] {
            assert!(!is_valid_hex(s), "{s} should be invalid");
        }
    }

    #[test]
    fn valid_hex_matches_definition_for_all_short_strings() {
        let alphabet = ['0', 'a', 'F', 'g', ' '];
        let mut words = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..7 {
            frontier = frontier
                .iter()
                .flat_map(|w| alphabet.iter().map(move |c| format!("{w}{c}")))
                .collect();
            words.extend(frontier.iter().cloned());
        }

        for w in &words {
            let expected =
                (w.len() == 3 || w.len() == 6) && w.chars().all(|c| c.is_ascii_hexdigit());
            assert_eq!(is_valid_hex(w), expected, "mismatch for {w:?}");
        }
    }

    #[test]
    fn eol() {
        assert!(has_eol("\n"));
        assert!(has_eol("\r\n"));
        assert!(has_eol("  \n  "));
        assert!(!has_eol("  "));
        assert!(!has_eol(""));
    }

    #[test]
    fn empty_lines() {
        assert!(is_empty_line("\n\n"));
        assert!(is_empty_line("\r\n\r\n"));
        assert!(!is_empty_line("\n \n"));
        assert!(!is_empty_line("\r\n \r\n"));
        assert!(!is_empty_line("\r\nabc\r\n"));
    }

    #[test]
    fn strips_vendor_prefixes() {
        assert_eq!(strip_prefix("-webkit-transition"), "transition");
        assert_eq!(strip_prefix("-moz-transition"), "transition");
        assert_eq!(strip_prefix("-webkit-border-color"), "border-color");
        assert_eq!(strip_prefix("-ms-flex"), "flex");
        assert_eq!(strip_prefix("-o-transform"), "transform");
        assert_eq!(strip_prefix("color"), "color");
        assert_eq!(strip_prefix("--custom"), "--custom");
        assert_eq!(strip_prefix("-webkit-"), "-webkit-");
    }
}
