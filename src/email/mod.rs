//! Email address validation.
//!
//! [`is_email`] is a pure syntax check. [`is_existing_email`] adds a stricter
//! local-part and domain check followed by an MX (then A/AAAA) lookup through
//! a [`DomainResolver`].

pub mod existence;
pub mod resolver;
pub mod syntax;

pub use existence::{is_existing_email, is_existing_email_async, is_existing_email_with};
pub use resolver::{probe_domain, DomainResolver, LookupResult, MxHost, Nameservers, SystemResolver};
pub use syntax::{is_email, EmailParts};
