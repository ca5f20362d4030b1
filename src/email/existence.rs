use tracing::{debug, trace};

use super::resolver::{probe_domain, DomainResolver, SystemResolver};
use super::syntax::{
    is_valid_domain, is_valid_local_part, EmailParts, MAX_EMAIL_LENGTH, MAX_LOCAL_PART_LENGTH,
    MIN_EMAIL_LENGTH,
};

// Always accepted without a lookup.
const RESERVED_DOMAINS: [&str; 2] = ["localhost", "example.com"];

/// Checks the address syntax and that its domain resolves to an MX or
/// address record, using the platform resolver.
///
/// Blocks on network I/O. Safe to call from inside an async runtime, but
/// [`is_existing_email_async`] keeps the worker thread free.
pub fn is_existing_email(email: &str) -> bool {
    is_existing_email_with(email, &SystemResolver::default())
}

/// Same as [`is_existing_email`] with a caller-supplied resolver.
pub fn is_existing_email_with<R: DomainResolver + ?Sized>(email: &str, resolver: &R) -> bool {
    let parts = match checked_parts(email) {
        Some(parts) => parts,
        None => return false,
    };

    if RESERVED_DOMAINS.contains(&parts.domain) {
        trace!("Reserved domain {}, skipping lookup", parts.domain);
        return true;
    }

    if !is_valid_local_part(parts.local) {
        debug!("Rejecting {:?}: bad local-part", email);
        return false;
    }
    if !is_valid_domain(parts.domain) {
        debug!("Rejecting {:?}: bad domain", email);
        return false;
    }

    let found = probe_domain(resolver, parts.domain).exists();
    debug!("Domain {} exists: {}", parts.domain, found);
    found
}

/// Runs [`is_existing_email`] on the blocking thread pool.
///
/// A panicked or cancelled lookup task counts as a failed check.
pub async fn is_existing_email_async(email: impl Into<String>) -> bool {
    let email = email.into();
    tokio::task::spawn_blocking(move || is_existing_email(&email))
        .await
        .unwrap_or_else(|e| {
            debug!("Email lookup task failed: {}", e);
            false
        })
}

fn checked_parts(email: &str) -> Option<EmailParts<'_>> {
    if email.len() < MIN_EMAIL_LENGTH || email.len() > MAX_EMAIL_LENGTH {
        trace!("Rejecting {:?}: length {}", email, email.len());
        return None;
    }
    let parts = EmailParts::split(email)?;
    if parts.local.len() > MAX_LOCAL_PART_LENGTH {
        trace!("Rejecting {:?}: local-part too long", email);
        return None;
    }
    Some(parts)
}
