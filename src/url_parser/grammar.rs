use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// Each piece below is one production of the accepted URL grammar. Digits and
// whitespace are spelled out as ASCII classes on purpose: `\d` and `\s` are
// Unicode-aware in `regex` and would widen the language.

const SCHEME: &str = r"(?P<scheme>(?:ftp|tcp|udp|wss?|https?)://)";

const USERINFO: &str = r"(?P<userinfo>[^\t\n\f\r ]+(?::[^\t\n\f\r ]*)?@)";

const IPV4: &str = concat!(
    r"(?:[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3]|24[0-9]|25[0-5])",
    r"(?:\.(?:[0-9]{1,2}|1[0-9][0-9]|2[0-4][0-9]|25[0-5])){2}",
    r"\.(?:[0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-5])",
);

const IPV6: &str = concat!(
    r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,7}:",
    r"|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}",
    r"|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)",
    r"|fe80:(?::[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]+",
    r"|::(?:ffff(?::0{1,4})?:)?(?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])",
    r"|(?:[0-9a-fA-F]{1,4}:){1,4}:(?:(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])\.){3}(?:25[0-5]|(?:2[0-4]|1?[0-9])?[0-9])",
);

// Alphanumeric run with internal `-`/`_`, then `-`/`.` separated runs.
const NAME_PREFIX: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9_-]+)?[a-zA-Z0-9](?:[-.][a-zA-Z0-9]+)*";

const SUBDOMAIN: &str = r"www\.|[a-zA-Z0-9]+(?:[-_.]?[a-zA-Z0-9])*[a-zA-Z0-9]\.[a-zA-Z0-9]+";

// U+00A1..U+FFFF admits internationalized labels and top-level domains.
const LABEL: &str = r"(?:[a-zA-Z\x{00a1}-\x{ffff}0-9]+-?-?)*[a-zA-Z\x{00a1}-\x{ffff}0-9]+";

const TOP_LABEL: &str = r"\.[a-zA-Z\x{00a1}-\x{ffff}]+";

const PORT: &str = r"(?::(?P<port>[0-9]{1,5}))";

const REST: &str = r"(?P<rest>[/?#][^\t\n\f\r ]*)";

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let host = format!(
        r"(?:(?P<ipv4>{IPV4})|\[(?P<ipv6>{IPV6})\]|(?P<name>(?:{NAME_PREFIX}|(?:{SUBDOMAIN}))?{LABEL}(?:{TOP_LABEL})?))"
    );
    let pattern = format!(r"^{SCHEME}?{USERINFO}?{host}\.?{PORT}?{REST}?$");
    Regex::new(&pattern).unwrap()
});

/// Host component as recognised by the URL grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind<'a> {
    Ipv4(&'a str),
    /// Literal without the surrounding brackets.
    Ipv6(&'a str),
    /// Dotted name, possibly internationalized, without a trailing dot.
    Name(&'a str),
}

impl<'a> HostKind<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            HostKind::Ipv4(host) | HostKind::Ipv6(host) | HostKind::Name(host) => host,
        }
    }
}

/// Structured result of a successful grammar match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlShape<'a> {
    /// Scheme including the `://` separator.
    pub scheme: Option<&'a str>,
    /// Userinfo including the trailing `@`.
    pub userinfo: Option<&'a str>,
    pub host: HostKind<'a>,
    pub port: Option<u32>,
    /// Path, query and fragment, starting with `/`, `?` or `#`.
    pub rest: Option<&'a str>,
}

/// Matches the whole input against the URL grammar.
///
/// Returns `None` when the input is not in the accepted language.
pub fn match_url(input: &str) -> Option<UrlShape<'_>> {
    let caps = match URL_REGEX.captures(input) {
        Some(caps) => caps,
        None => {
            trace!("Input does not match the URL grammar");
            return None;
        }
    };

    let host = if let Some(m) = caps.name("ipv4") {
        HostKind::Ipv4(m.as_str())
    } else if let Some(m) = caps.name("ipv6") {
        HostKind::Ipv6(m.as_str())
    } else {
        HostKind::Name(caps.name("name")?.as_str())
    };

    let shape = UrlShape {
        scheme: caps.name("scheme").map(|m| m.as_str()),
        userinfo: caps.name("userinfo").map(|m| m.as_str()),
        host,
        // At most five ASCII digits, so this never overflows a u32.
        port: caps.name("port").and_then(|m| m.as_str().parse().ok()),
        rest: caps.name("rest").map(|m| m.as_str()),
    };
    trace!("URL grammar matched: {:?}", shape);
    Some(shape)
}

/// Returns true if the whole input is in the accepted URL language.
pub fn matches_url(input: &str) -> bool {
    URL_REGEX.is_match(input)
}
