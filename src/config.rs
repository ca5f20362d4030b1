use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::email::{Nameservers, SystemResolver};

/// Environment variable prefix, e.g. `STRING_VALIDATOR__DNS__TIMEOUT_MS`.
pub const ENV_PREFIX: &str = "STRING_VALIDATOR";

/// Settings for the resolver used by `existing-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DnsSettings {
    pub nameservers: Nameservers,

    /// Per-query timeout in milliseconds; ignored for `system`.
    pub timeout_ms: Option<u64>,
}

impl DnsSettings {
    pub fn resolver(&self) -> SystemResolver {
        SystemResolver::new(self.nameservers, self.timeout_ms.map(Duration::from_millis))
    }
}

/// Configuration for the command-line validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<PathBuf>,

    /// Emit one JSON object per candidate
    pub json: bool,

    pub dns: DnsSettings,
}

impl ValidatorConfig {
    /// Loads defaults, then the optional file, then the environment.
    ///
    /// A missing file is an error only when a path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
