use tracing::trace;

use super::reference::parse_request_uri;

/// Returns true if the string, taken as an HTTP request target, is an
/// absolute URI or an absolute path.
pub fn is_request_uri(input: &str) -> bool {
    match parse_request_uri(input) {
        Ok(_) => true,
        Err(e) => {
            trace!("Not a request URI {:?}: {:#}", input, e);
            false
        }
    }
}

/// Returns true if the string is a request URI that names a scheme.
pub fn is_request_url(input: &str) -> bool {
    match parse_request_uri(input) {
        Ok(parsed) => parsed.scheme.map_or(false, |scheme| !scheme.is_empty()),
        Err(e) => {
            trace!("Not a request URL {:?}: {:#}", input, e);
            false
        }
    }
}
