//! Whole-string character class predicates.
//!
//! Every predicate here treats the empty string as valid except
//! [`is_not_null`]. ASCII predicates are regex matches over `[a-zA-Z0-9]`;
//! the `utf` family tests Unicode general categories per code point.

pub mod patterns;
pub mod classifier;

pub use classifier::{
    is_alpha, is_alphanumeric, is_not_null, is_null, is_numeric, is_utf_digit,
    is_utf_letter, is_utf_letter_numeric, is_utf_numeric,
};
