use super::patterns::*;
use regex::Regex;

/// Returns true if the string is empty (zero bytes).
pub fn is_null(value: &str) -> bool {
    value.is_empty()
}

/// Returns true if the string contains at least one byte.
pub fn is_not_null(value: &str) -> bool {
    !value.is_empty()
}

/// ASCII letters only. The empty string is accepted.
pub fn is_alpha(value: &str) -> bool {
    is_null(value) || ALPHA_REGEX.is_match(value)
}

/// ASCII letters and digits only. The empty string is accepted.
pub fn is_alphanumeric(value: &str) -> bool {
    is_null(value) || ALPHANUMERIC_REGEX.is_match(value)
}

/// ASCII digits only, no sign. The empty string is accepted.
pub fn is_numeric(value: &str) -> bool {
    is_null(value) || NUMERIC_REGEX.is_match(value)
}

/// Every code point is a Unicode letter (category L).
pub fn is_utf_letter(value: &str) -> bool {
    is_null(value) || UTF_LETTER_REGEX.is_match(value)
}

/// Every code point is a Unicode letter or number (categories L and N).
pub fn is_utf_letter_numeric(value: &str) -> bool {
    is_null(value) || UTF_LETTER_NUMBER_REGEX.is_match(value)
}

/// Every code point is a Unicode number (category N), with an optional
/// leading sign.
pub fn is_utf_numeric(value: &str) -> bool {
    is_null(value) || matches_signed(value, &UTF_NUMBER_REGEX)
}

/// Every code point is a Unicode decimal digit (category Nd), with an
/// optional leading sign.
pub fn is_utf_digit(value: &str) -> bool {
    is_null(value) || matches_signed(value, &UTF_DIGIT_REGEX)
}

/// Applies `pattern` after removing at most one leading `+` or `-`.
///
/// A sign anywhere past the first code point rejects the whole string.
fn matches_signed(value: &str, pattern: &Regex) -> bool {
    let misplaced_sign = value
        .char_indices()
        .skip(1)
        .any(|(_, c)| c == '+' || c == '-');
    if misplaced_sign {
        return false;
    }

    let unsigned = if value.len() > 1 {
        value
            .strip_prefix('-')
            .or_else(|| value.strip_prefix('+'))
            .unwrap_or(value)
    } else {
        value
    };
    pattern.is_match(unsigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shared inputs exercising ASCII, Hangul, Arabic-Indic digits, Roman
    // numerals (Nl), vulgar fractions (No) and Hangzhou numerals.
    fn check(predicate: fn(&str) -> bool, name: &str, cases: &[(&str, bool)]) {
        for (input, expected) in cases {
            assert_eq!(
                predicate(input),
                *expected,
                "{}({:?}) should be {}",
                name,
                input,
                expected
            );
        }
    }

    #[test]
    fn test_is_alpha() {
        check(is_alpha, "is_alpha", &[
            ("Ⅸ", false), ("0", false), (" ", false), (".", false),
            ("-", false), ("+", false), ("\n", false), ("\r", false),
            ("소", false), ("-0", false), ("++", false), ("+1", false),
            ("--", false), ("1¾", false), ("123", false), ("-1¾", false),
            ("1++", false), ("1+1", false), ("1--", false), ("1-1", false),
            ("〥〩", false), ("모자", false), ("0123", false), ("abc1", false),
            ("소주", false), ("۳۵۶۰", false), ("abc〩", false), ("소aBC", false),
            ("\u{0026}", false), ("\u{0030}", false), ("-00123", false),
            ("\u{fff0}", false), ("abc!!!", false), ("〩Hours", false),
            ("123.123", false), ("달기&Co.", false), ("   fooo   ", false),
            ("", true), ("ix", true), ("abc", true), ("ABC", true),
            ("FoObAr", true), ("\u{0070}", true),
        ]);
    }

    #[test]
    fn test_is_alphanumeric() {
        check(is_alphanumeric, "is_alphanumeric", &[
            ("Ⅸ", false), (" ", false), (".", false), ("-", false),
            ("+", false), ("\n", false), ("\r", false), ("--", false),
            ("++", false), ("+1", false), ("1¾", false), ("소", false),
            ("-0", false), ("1++", false), ("1+1", false), ("1--", false),
            ("1-1", false), ("-1¾", false), ("〥〩", false), ("모자", false),
            ("소aBC", false), ("۳۵۶۰", false), ("abc〩", false), ("abc!!!", false),
            ("-00123", false), ("\u{fff0}", false), ("\u{0026}", false),
            ("123.123", false), ("〩Hours", false), ("달기&Co.", false),
            ("   fooo   ", false), ("소주", false),
            ("", true), ("0", true), ("ix", true), ("abc", true), ("123", true),
            ("ABC", true), ("0123", true), ("abc1", true), ("FoObAr", true),
            ("abc123", true), ("ABC111", true), ("\u{0070}", true), ("\u{0030}", true),
        ]);
    }

    #[test]
    fn test_is_numeric() {
        check(is_numeric, "is_numeric", &[
            (" ", false), ("Ⅸ", false), (".", false), ("-", false),
            ("+", false), ("\n", false), ("\r", false), ("소", false),
            ("1¾", false), ("--", false), ("++", false), ("+1", false),
            ("ix", false), ("-0", false), ("ABC", false), ("1--", false),
            ("1-1", false), ("1++", false), ("-1¾", false), ("1+1", false),
            ("abc", false), ("abc1", false), ("소주", false), ("〥〩", false),
            ("모자", false), ("12𐅪3", false), ("۳۵۶۰", false), ("소aBC", false),
            ("abc〩", false), ("abc!!!", false), ("FoObAr", false), ("\u{fff0}", false),
            ("-00123", false), ("+00123", false), ("\u{0070}", false), ("\u{0026}", false),
            ("123.123", false), ("〩Hours", false), ("달기&Co.", false),
            ("   fooo   ", false),
            ("", true), ("0", true), ("123", true), ("0123", true), ("\u{0030}", true),
        ]);
    }

    #[test]
    fn test_is_null_and_not_null() {
        assert!(is_null(""));
        assert!(!is_null("abacaba"));
        assert!(is_not_null("abacaba"));
        assert!(!is_not_null(""));
    }

    #[test]
    fn test_is_utf_digit() {
        check(is_utf_digit, "is_utf_digit", &[
            ("+", false), (" ", false), (".", false), ("Ⅸ", false),
            ("\n", false), ("\r", false), ("++", false), ("1¾", false),
            ("ix", false), ("소", false), ("--0", false), ("-0-", false),
            ("1++", false), ("1+1", false), ("-1¾", false), ("ABC", false),
            ("abc", false), ("abc1", false), ("소주", false), ("〥〩", false),
            ("모자", false), ("12𐅪3", false), ("abc〩", false), ("소aBC", false),
            ("abc!!!", false), ("FoObAr", false), ("\u{fff0}", false),
            ("\u{0070}", false), ("\u{0026}", false), ("123.123", false),
            ("〩Hours", false), ("달기&Co.", false), ("   fooo   ", false),
            ("", true), ("0", true), ("-0", true), ("+1", true), ("-29", true),
            ("123", true), ("0123", true), ("۳۵۶۰", true), ("-00123", true),
            ("\u{0030}", true), ("1483920", true),
        ]);
    }

    #[test]
    fn test_is_utf_letter() {
        check(is_utf_letter, "is_utf_letter", &[
            ("Ⅸ", false), ("0", false), (" ", false), (".", false),
            ("-", false), ("+", false), ("\n", false), ("\r", false),
            ("-0", false), ("1¾", false), ("--", false), ("++", false),
            ("+1", false), ("-1¾", false), ("1--", false), ("1-1", false),
            ("1++", false), ("1+1", false), ("123", false), ("〥〩", false),
            ("0123", false), ("abc1", false), ("abc〩", false), ("۳۵۶۰", false),
            ("abc!!!", false), ("\u{fff0}", false), ("-00123", false),
            ("\u{0026}", false), ("\u{0030}", false), ("〩Hours", false),
            ("123.123", false), ("달기&Co.", false), ("   fooo   ", false),
            ("", true), ("소", true), ("ix", true), ("abc", true), ("ABC", true),
            ("모자", true), ("소주", true), ("소aBC", true), ("FoObAr", true),
            ("\u{0070}", true),
        ]);
    }

    #[test]
    fn test_is_utf_letter_numeric() {
        check(is_utf_letter_numeric, "is_utf_letter_numeric", &[
            (" ", false), (".", false), ("-", false), ("+", false),
            ("\n", false), ("\r", false), ("-0", false), ("--", false),
            ("++", false), ("+1", false), ("-1¾", false), ("1--", false),
            ("1-1", false), ("1++", false), ("1+1", false), ("abc!!!", false),
            ("\u{fff0}", false), ("-00123", false), ("\u{0026}", false),
            ("123.123", false), ("달기&Co.", false), ("   fooo   ", false),
            ("", true), ("Ⅸ", true), ("0", true), ("1¾", true), ("소", true),
            ("ix", true), ("123", true), ("abc", true), ("ABC", true),
            ("〥〩", true), ("모자", true), ("소주", true), ("0123", true),
            ("abc1", true), ("۳۵۶۰", true), ("abc〩", true), ("소aBC", true),
            ("FoObAr", true), ("\u{0070}", true), ("\u{0030}", true), ("〩Hours", true),
        ]);
    }

    #[test]
    fn test_is_utf_numeric() {
        check(is_utf_numeric, "is_utf_numeric", &[
            ("+", false), (" ", false), (".", false), ("소", false),
            ("ix", false), ("++", false), ("\n", false), ("\r", false),
            ("1++", false), ("1+1", false), ("--0", false), ("-0-", false),
            ("abc", false), ("ABC", false), ("모자", false), ("abc1", false),
            ("소주", false), ("abc〩", false), ("소aBC", false), ("abc!!!", false),
            ("FoObAr", false), ("\u{fff0}", false), ("\u{0070}", false),
            ("\u{0026}", false), ("123.123", false), ("〩Hours", false),
            ("달기&Co.", false), ("   fooo   ", false),
            ("", true), ("Ⅸ", true), ("0", true), ("-0", true), ("+1", true),
            ("1¾", true), ("-1¾", true), ("123", true), ("0123", true),
            ("〥〩", true), ("12𐅪3", true), ("۳۵۶۰", true), ("-00123", true),
            ("\u{0030}", true),
        ]);
    }

    #[test]
    fn test_sign_is_stripped_once() {
        assert!(!is_utf_digit("-+1"));
        assert!(!is_utf_numeric("+-1"));
        assert!(is_utf_digit("+٣"));
    }
}
