use std::fmt;
use std::str;

use clap::ValueEnum;
use serde::Serialize;
use tracing::trace;

use crate::char_class;
use crate::email::{self, DomainResolver, SystemResolver};
use crate::url_parser;

/// Every validator exposed by the crate, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Predicate {
    Alpha,
    Alphanumeric,
    Numeric,
    UtfLetter,
    UtfLetterNumeric,
    UtfNumeric,
    UtfDigit,
    Null,
    NotNull,
    Email,
    /// Syntax plus an MX or address lookup.
    ExistingEmail,
    Url,
    RequestUrl,
    RequestUri,
}

impl Predicate {
    /// Kebab-case name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Alpha => "alpha",
            Predicate::Alphanumeric => "alphanumeric",
            Predicate::Numeric => "numeric",
            Predicate::UtfLetter => "utf-letter",
            Predicate::UtfLetterNumeric => "utf-letter-numeric",
            Predicate::UtfNumeric => "utf-numeric",
            Predicate::UtfDigit => "utf-digit",
            Predicate::Null => "null",
            Predicate::NotNull => "not-null",
            Predicate::Email => "email",
            Predicate::ExistingEmail => "existing-email",
            Predicate::Url => "url",
            Predicate::RequestUrl => "request-url",
            Predicate::RequestUri => "request-uri",
        }
    }

    /// True for predicates that perform network I/O.
    pub fn needs_network(&self) -> bool {
        matches!(self, Predicate::ExistingEmail)
    }

    /// Evaluates the predicate, using the platform resolver for DNS.
    pub fn evaluate(&self, value: &str) -> bool {
        self.evaluate_with_resolver(value, &SystemResolver::default())
    }

    pub fn evaluate_with_resolver<R: DomainResolver + ?Sized>(&self, value: &str, resolver: &R) -> bool {
        match self {
            Predicate::Alpha => char_class::is_alpha(value),
            Predicate::Alphanumeric => char_class::is_alphanumeric(value),
            Predicate::Numeric => char_class::is_numeric(value),
            Predicate::UtfLetter => char_class::is_utf_letter(value),
            Predicate::UtfLetterNumeric => char_class::is_utf_letter_numeric(value),
            Predicate::UtfNumeric => char_class::is_utf_numeric(value),
            Predicate::UtfDigit => char_class::is_utf_digit(value),
            Predicate::Null => char_class::is_null(value),
            Predicate::NotNull => char_class::is_not_null(value),
            Predicate::Email => email::is_email(value),
            Predicate::ExistingEmail => email::is_existing_email_with(value, resolver),
            Predicate::Url => url_parser::is_url(value),
            Predicate::RequestUrl => url_parser::is_request_url(value),
            Predicate::RequestUri => url_parser::is_request_uri(value),
        }
    }

    /// Evaluates raw bytes. Malformed UTF-8 is never valid.
    pub fn evaluate_bytes(&self, value: &[u8]) -> bool {
        self.evaluate_bytes_with_resolver(value, &SystemResolver::default())
    }

    pub fn evaluate_bytes_with_resolver<R: DomainResolver + ?Sized>(
        &self,
        value: &[u8],
        resolver: &R,
    ) -> bool {
        match str::from_utf8(value) {
            Ok(value) => self.evaluate_with_resolver(value, resolver),
            Err(e) => {
                trace!("Rejecting malformed UTF-8 for {}: {}", self, e);
                false
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MxHost;
    use anyhow::{bail, Result};
    use std::net::IpAddr;

    struct NoDns;

    impl DomainResolver for NoDns {
        fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>> {
            bail!("no DNS in tests ({})", domain)
        }

        fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>> {
            bail!("no DNS in tests ({})", domain)
        }
    }

    #[test]
    fn test_names_match_clap_values() {
        for predicate in Predicate::value_variants() {
            let parsed = Predicate::from_str(predicate.name(), false).unwrap();
            assert_eq!(parsed, *predicate);
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Predicate::UtfLetterNumeric).unwrap();
        assert_eq!(json, "\"utf-letter-numeric\"");
    }

    #[test]
    fn test_dispatch() {
        assert!(Predicate::Alpha.evaluate("abc"));
        assert!(!Predicate::Numeric.evaluate("12a"));
        assert!(Predicate::UtfDigit.evaluate("-١٢٣"));
        assert!(Predicate::Null.evaluate(""));
        assert!(!Predicate::NotNull.evaluate(""));
        assert!(Predicate::Email.evaluate("foo@bar.com"));
        assert!(Predicate::Url.evaluate("http://foobar.com"));
        assert!(!Predicate::RequestUrl.evaluate("/abs/test/dir"));
        assert!(Predicate::RequestUri.evaluate("/abs/test/dir"));
    }

    #[test]
    fn test_existing_email_uses_given_resolver() {
        assert!(Predicate::ExistingEmail.evaluate_with_resolver("someone@example.com", &NoDns));
        assert!(!Predicate::ExistingEmail.evaluate_with_resolver("someone@bar.com", &NoDns));
    }

    #[test]
    fn test_malformed_utf8_is_invalid() {
        let bad = b"abc\xff";
        for predicate in Predicate::value_variants() {
            assert!(
                !predicate.evaluate_bytes_with_resolver(bad, &NoDns),
                "{} accepted malformed UTF-8",
                predicate
            );
        }
        assert!(Predicate::Alpha.evaluate_bytes(b"abc"));
        assert!(Predicate::Null.evaluate_bytes(b""));
    }
}
