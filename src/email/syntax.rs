use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted by the existence check, in bytes.
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Shortest address accepted by the existence check, in bytes.
pub const MIN_EMAIL_LENGTH: usize = 6;
/// RFC 5321 limit on the local-part, in bytes.
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

// Non-ASCII code points admitted in addresses (RFC 6531 style).
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

// Hyphen is escaped so it stays literal when UCS ranges are appended.
const ATEXT: &str = r"a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-";

fn local_part_pattern() -> String {
    let atom = format!("[{ATEXT}{UCS}]+");
    let quoted = format!(r#""(?:[\t \x21\x23-\x5b\x5d-\x7e{UCS}]|\\[\x01-\x7f])*""#);
    format!(r"(?:{atom}(?:\.{atom})*|{quoted})")
}

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alnum = format!("[a-zA-Z0-9{UCS}]");
    let alpha = format!("[a-zA-Z{UCS}]");
    let label = format!(r"(?:{alnum}(?:[-_~a-zA-Z0-9{UCS}]*{alnum})?)");
    let top = format!(r"(?:{alpha}(?:[-_~a-zA-Z0-9{UCS}]*{alpha})?)");
    let pattern = format!(r"^{}@(?:{label}\.)+{top}\.?$", local_part_pattern());
    Regex::new(&pattern).unwrap()
});

pub static LOCAL_PART_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}$", local_part_pattern())).unwrap()
});

// Dot-separated labels of letters and digits with internal hyphens; the top
// label must contain at least one letter.
pub static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    let label = r"[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?";
    let top = r"(?:\p{N}[\p{N}-]*)?\p{L}(?:[\p{L}\p{N}-]*[\p{L}\p{N}])?";
    Regex::new(&format!(r"^(?:{label}\.)+{top}$")).unwrap()
});

/// Local-part and domain-part of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    pub local: &'a str,
    pub domain: &'a str,
}

impl<'a> EmailParts<'a> {
    /// Splits on the rightmost `@`.
    ///
    /// Returns `None` when there is no `@`, when it is the first byte, or when
    /// fewer than two bytes follow it.
    pub fn split(email: &'a str) -> Option<Self> {
        let at = email.rfind('@')?;
        if at == 0 || at + 3 > email.len() {
            return None;
        }
        Some(EmailParts {
            local: &email[..at],
            domain: &email[at + 1..],
        })
    }
}

/// Returns true if the string is syntactically an email address.
///
/// No DNS is consulted; see [`super::is_existing_email`] for that.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Leading, trailing and consecutive dots are invalid in a local-part.
pub fn has_misplaced_dot(local: &str) -> bool {
    local.starts_with('.') || local.ends_with('.') || local.contains("..")
}

pub fn is_valid_local_part(local: &str) -> bool {
    !has_misplaced_dot(local) && LOCAL_PART_REGEX.is_match(local)
}

pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_REGEX.is_match(domain)
}
