use std::fmt;
use std::net::IpAddr;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;
use once_cell::unsync::OnceCell;
use tokio::runtime::Handle;
use serde::Deserialize;
use tracing::{debug, trace, warn};

/// One MX answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxHost {
    pub preference: u16,
    pub exchange: String,
}

/// DNS lookups needed by the existence check.
///
/// Errors and empty answers both mean "no such record" to callers; the
/// distinction only matters for logging.
pub trait DomainResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>>;
    fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>>;
}

impl<R: DomainResolver + ?Sized> DomainResolver for &R {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>> {
        (**self).lookup_mx(domain)
    }

    fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>> {
        (**self).lookup_ip(domain)
    }
}

/// Outcome of probing a domain for mail-capable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    MailExchanger(Vec<MxHost>),
    /// No MX answer, but the domain has A or AAAA records.
    AddressOnly(Vec<IpAddr>),
    Absent,
}

impl LookupResult {
    pub fn exists(&self) -> bool {
        !matches!(self, LookupResult::Absent)
    }
}

/// Queries MX once and, failing that, A/AAAA once. No retries.
pub fn probe_domain<R: DomainResolver + ?Sized>(resolver: &R, domain: &str) -> LookupResult {
    match resolver.lookup_mx(domain) {
        Ok(hosts) if !hosts.is_empty() => {
            trace!("Found {} MX records for {}", hosts.len(), domain);
            return LookupResult::MailExchanger(hosts);
        }
        Ok(_) => debug!("Empty MX answer for {}", domain),
        Err(e) => debug!("MX lookup for {} failed: {:#}", domain, e),
    }

    match resolver.lookup_ip(domain) {
        Ok(addrs) if !addrs.is_empty() => {
            trace!("Found {} address records for {}", addrs.len(), domain);
            LookupResult::AddressOnly(addrs)
        }
        Ok(_) => {
            debug!("Empty address answer for {}", domain);
            LookupResult::Absent
        }
        Err(e) => {
            debug!("Address lookup for {} failed: {:#}", domain, e);
            LookupResult::Absent
        }
    }
}

/// Where the system resolver sends its queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nameservers {
    /// Platform configuration (`/etc/resolv.conf` or the Windows registry).
    #[default]
    System,
    Google,
    Cloudflare,
    Quad9,
}

/// `DomainResolver` backed by hickory's blocking resolver.
///
/// The underlying resolver is built on the first lookup and reused for the
/// lifetime of this value only. hickory drives the blocking resolver with its
/// own runtime, so a lookup made from a thread inside a tokio runtime runs on
/// a short-lived helper thread with a resolver of its own.
pub struct SystemResolver {
    nameservers: Nameservers,
    timeout: Option<Duration>,
    resolver: OnceCell<Resolver>,
}

impl fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemResolver")
            .field("nameservers", &self.nameservers)
            .field("timeout", &self.timeout)
            .field("initialized", &self.resolver.get().is_some())
            .finish()
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(Nameservers::System, None)
    }
}

impl SystemResolver {
    /// `timeout` applies to the public presets; the platform configuration
    /// keeps its own timeout.
    pub fn new(nameservers: Nameservers, timeout: Option<Duration>) -> Self {
        Self {
            nameservers,
            timeout,
            resolver: OnceCell::new(),
        }
    }

    fn resolver(&self) -> Result<&Resolver> {
        self.resolver
            .get_or_try_init(|| build_resolver(self.nameservers, self.timeout))
            .map_err(|e| {
                warn!("Could not construct DNS resolver: {:#}", e);
                e
            })
    }

    /// Runs `query` against a resolver on a thread with no async runtime.
    ///
    /// The helper thread builds and drops its own resolver: hickory panics
    /// when its runtime is created or dropped inside another one.
    fn run<T, F>(&self, query: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(&Resolver) -> Result<T> + Send,
    {
        if Handle::try_current().is_err() {
            return query(self.resolver()?);
        }

        trace!("Inside an async runtime, resolving on a helper thread");
        let (nameservers, timeout) = (self.nameservers, self.timeout);
        thread::scope(|scope| {
            let worker = scope.spawn(move || {
                let resolver = build_resolver(nameservers, timeout).map_err(|e| {
                    warn!("Could not construct DNS resolver: {:#}", e);
                    e
                })?;
                query(&resolver)
            });
            match worker.join() {
                Ok(result) => result,
                Err(_) => Err(anyhow!("DNS lookup thread panicked")),
            }
        })
    }
}

fn build_resolver(nameservers: Nameservers, timeout: Option<Duration>) -> Result<Resolver> {
    debug!("Building {:?} resolver", nameservers);
    let config = match nameservers {
        Nameservers::System => {
            return Resolver::from_system_conf()
                .context("Failed to read system resolver configuration");
        }
        Nameservers::Google => ResolverConfig::google(),
        Nameservers::Cloudflare => ResolverConfig::cloudflare(),
        Nameservers::Quad9 => ResolverConfig::quad9(),
    };
    let mut opts = ResolverOpts::default();
    if let Some(timeout) = timeout {
        opts.timeout = timeout;
    }
    Resolver::new(config, opts).context("Failed to build resolver")
}

impl DomainResolver for SystemResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxHost>> {
        self.run(|resolver| {
            let lookup = resolver
                .mx_lookup(domain)
                .with_context(|| format!("MX lookup failed for {}", domain))?;
            Ok(lookup
                .iter()
                .map(|mx| MxHost {
                    preference: mx.preference(),
                    exchange: mx.exchange().to_utf8().trim_end_matches('.').to_owned(),
                })
                .collect())
        })
    }

    fn lookup_ip(&self, domain: &str) -> Result<Vec<IpAddr>> {
        self.run(|resolver| {
            let lookup = resolver
                .lookup_ip(domain)
                .with_context(|| format!("Address lookup failed for {}", domain))?;
            Ok(lookup.iter().collect())
        })
    }
}
