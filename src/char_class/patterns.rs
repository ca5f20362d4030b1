use once_cell::sync::Lazy;
use regex::Regex;

pub static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]+$").unwrap()
});

pub static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").unwrap()
});

pub static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$").unwrap()
});

// Unicode general categories, not the broader `Alphabetic`/`Numeric`
// properties: Roman numerals (Nl) are numbers but neither letters nor digits.
pub static UTF_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{L}+$").unwrap()
});

pub static UTF_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{N}+$").unwrap()
});

pub static UTF_LETTER_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}]+$").unwrap()
});

pub static UTF_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Nd}+$").unwrap()
});
