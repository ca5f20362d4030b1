//! String validation predicates: character classes, email addresses and URLs.
//!
//! Every predicate takes a `&str` and returns a plain `bool`; internal parse
//! and lookup errors are logged through `tracing` and folded into `false`.
//! [`Predicate`] names each check so it can be chosen at runtime.

pub mod char_class;
pub mod config;
pub mod email;
pub mod predicate;
pub mod url_parser;
pub mod utils;

pub use char_class::{
    is_alpha, is_alphanumeric, is_not_null, is_null, is_numeric, is_utf_digit,
    is_utf_letter, is_utf_letter_numeric, is_utf_numeric,
};
pub use config::{DnsSettings, ValidatorConfig};
pub use email::{
    is_email, is_existing_email, is_existing_email_async, is_existing_email_with, DomainResolver,
    MxHost, Nameservers, SystemResolver,
};
pub use predicate::Predicate;
pub use url_parser::{is_request_uri, is_request_url, is_url};
