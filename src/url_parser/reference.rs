use anyhow::{anyhow, bail, Context, Result};
use tracing::trace;
use url::Url;

/// Components of a parsed URI reference.
///
/// Absolute references are parsed by the `url` crate; relative references are
/// split according to RFC 3986 section 4.2. Nothing here is normalized beyond
/// what the `url` crate does to absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlStructure {
    pub scheme: Option<String>,
    pub userinfo: Option<String>,
    /// Host as serialized by the parser, empty when absent.
    pub host: String,
    /// Hierarchical path; empty for opaque (`scheme:rest`) references.
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlStructure {
    fn from_url(url: &Url) -> Self {
        let userinfo = if url.username().is_empty() && url.password().is_none() {
            None
        } else {
            Some(match url.password() {
                Some(password) => format!("{}:{}", url.username(), password),
                None => url.username().to_owned(),
            })
        };

        UrlStructure {
            scheme: Some(url.scheme().to_owned()),
            userinfo,
            host: url.host_str().unwrap_or("").to_owned(),
            path: if url.cannot_be_a_base() {
                String::new()
            } else {
                url.path().to_owned()
            },
            query: url.query().map(str::to_owned),
            fragment: url.fragment().map(str::to_owned),
        }
    }
}

/// Parses a URI reference (absolute URL or relative reference).
pub fn parse_reference(input: &str) -> Result<UrlStructure> {
    reject_control_bytes(input)?;
    validate_escapes(&strip_query(input))?;

    if let Some((_, rest)) = split_scheme(input)? {
        validate_userinfo(rest, &['/', '?', '#'])?;
        let url = Url::parse(input).context("Failed to parse absolute URL")?;
        return Ok(UrlStructure::from_url(&url));
    }

    let (without_fragment, fragment) = match input.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment.to_owned())),
        None => (input, None),
    };
    let (rest, query) = match without_fragment.split_once('?') {
        Some((head, query)) => (head, Some(query.to_owned())),
        None => (without_fragment, None),
    };

    if rest.starts_with("//") && !rest.starts_with("///") {
        // Network-path reference: borrow the authority parsing of the url crate.
        validate_userinfo(rest, &['/'])?;
        let url = Url::parse(&format!("http:{}", input))
            .context("Failed to parse network-path reference")?;
        let mut structure = UrlStructure::from_url(&url);
        structure.scheme = None;
        return Ok(structure);
    }

    let first_segment = rest.split('/').next().unwrap_or("");
    if first_segment.contains(':') {
        bail!("First path segment in URL cannot contain colon");
    }

    trace!("Parsed relative reference with path {:?}", rest);
    Ok(UrlStructure {
        path: rest.to_owned(),
        query,
        fragment,
        ..UrlStructure::default()
    })
}

/// Parses an HTTP request target: an absolute URI or an absolute path.
///
/// Request targets carry no fragment, so `#` is left in place.
pub fn parse_request_uri(input: &str) -> Result<UrlStructure> {
    if input.is_empty() {
        bail!("Empty request URI");
    }
    reject_control_bytes(input)?;
    validate_escapes(&strip_query(input))?;

    match split_scheme(input)? {
        Some((scheme, rest)) if !rest.starts_with('/') => {
            trace!("Accepting opaque request URI with scheme {}", scheme);
            Ok(UrlStructure {
                scheme: Some(scheme.to_ascii_lowercase()),
                ..UrlStructure::default()
            })
        }
        Some((_, rest)) => {
            validate_userinfo(rest, &['/', '?'])?;
            let url = Url::parse(input).context("Failed to parse request URI")?;
            Ok(UrlStructure::from_url(&url))
        }
        None if input.starts_with('/') => {
            let (path, query) = match input.split_once('?') {
                Some((path, query)) => (path, Some(query.to_owned())),
                None => (input, None),
            };
            Ok(UrlStructure {
                path: path.to_owned(),
                query,
                ..UrlStructure::default()
            })
        }
        None => bail!("Invalid URI for request"),
    }
}

/// Splits `scheme:rest` when the input starts with a syntactically valid
/// RFC 3986 scheme.
///
/// A leading `:` is an error; any other non-scheme character before the first
/// `:` means the input has no scheme.
pub fn split_scheme(input: &str) -> Result<Option<(&str, &str)>> {
    for (i, c) in input.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => return Err(anyhow!("Missing protocol scheme")),
            ':' => return Ok(Some((&input[..i], &input[i + 1..]))),
            _ => return Ok(None),
        }
    }
    Ok(None)
}

/// Rejects an authority whose userinfo holds characters outside RFC 3986
/// unreserved, sub-delims, `:`, `%` and `@`.
///
/// `hier_part` is the text after the scheme; the authority runs from a
/// leading `//` to the first of `terminators`, and the userinfo is everything
/// before its last `@`. The url crate would percent-encode these instead.
fn validate_userinfo(hier_part: &str, terminators: &[char]) -> Result<()> {
    let authority = match hier_part.strip_prefix("//") {
        Some(after) => after.split(terminators).next().unwrap_or(""),
        None => return Ok(()),
    };
    let userinfo = match authority.rfind('@') {
        Some(at) => &authority[..at],
        None => return Ok(()),
    };
    let valid = userinfo.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.' | '_' | ':' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+'
                    | ',' | ';' | '=' | '%' | '@'
            )
    });
    if !valid {
        bail!("Invalid userinfo");
    }
    Ok(())
}

fn reject_control_bytes(input: &str) -> Result<()> {
    if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
        bail!("Invalid control character in URL");
    }
    Ok(())
}

// The query component is kept raw, so its escapes are never checked.
fn strip_query(input: &str) -> String {
    match input.split_once('?') {
        Some((head, tail)) => match tail.split_once('#') {
            Some((_, fragment)) => format!("{}#{}", head, fragment),
            None => head.to_owned(),
        },
        None => input.to_owned(),
    }
}

fn validate_escapes(component: &str) -> Result<()> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                bail!("Invalid URL escape at byte {}", i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
