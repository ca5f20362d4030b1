//! URL and request-URI classification.
//!
//! [`is_url`] runs a structural pass through [`reference::parse_reference`]
//! and then matches the untouched input against the grammar in [`grammar`].
//! The request-URI predicates only need the structural pass.

pub mod grammar;
pub mod reference;
pub mod request_uri;
pub mod url_validator;


pub use grammar::{match_url, HostKind, UrlShape};
pub use reference::UrlStructure;
pub use request_uri::{is_request_uri, is_request_url};
pub use url_validator::is_url;
