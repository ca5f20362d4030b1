use std::borrow::Cow;

use tracing::{debug, trace};

use super::grammar::matches_url;
use super::reference::parse_reference;

// Practical ceiling on URL length, counted in code points.
const MAX_URL_RUNE_COUNT: usize = 2083;
// Inputs of this many bytes or fewer are never URLs.
const MIN_URL_BYTE_LENGTH: usize = 3;

/// Returns true if the string is a plausible URL.
///
/// Accepts absolute URLs with one of the common schemes as well as bare
/// host forms such as `foobar.com` or `localhost:3000`. Structural checks run
/// on a copy with an inferred `http://` scheme when the input looks like
/// `host:port`; the final grammar match always runs on the input as given.
pub fn is_url(input: &str) -> bool {
    if input.is_empty() {
        trace!("Rejecting empty URL");
        return false;
    }
    if input.chars().count() >= MAX_URL_RUNE_COUNT {
        debug!("URL exceeds maximum length of {} characters", MAX_URL_RUNE_COUNT);
        return false;
    }
    if input.len() <= MIN_URL_BYTE_LENGTH || input.starts_with('.') {
        trace!("URL too short or starts with a dot: {:?}", input);
        return false;
    }

    let candidate = with_inferred_scheme(input);
    let parsed = match parse_reference(&candidate) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!("Failed to parse {:?}: {:#}", candidate, e);
            return false;
        }
    };

    if parsed.host.starts_with('.') {
        trace!("Host starts with a dot: {}", parsed.host);
        return false;
    }
    if parsed.host.is_empty() && !parsed.path.is_empty() && !parsed.path.contains('.') {
        trace!("Path without host or dot is not a URL: {}", parsed.path);
        return false;
    }

    matches_url(input)
}

/// Prefixes `http://` when the input has a colon but no `://`, so that a bare
/// `host:port` parses as an authority rather than as `scheme:opaque`.
fn with_inferred_scheme(input: &str) -> Cow<'_, str> {
    if input.contains(':') && !input.contains("://") {
        Cow::Owned(format!("http://{}", input))
    } else {
        Cow::Borrowed(input)
    }
}
