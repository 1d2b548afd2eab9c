//! # stubby-config
//!
//! Layered configuration loading for stubby using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STUBBY_*` prefix, `__` as separator)
//! 2. Project-level `.stubby/config.toml`
//! 3. User-level `~/.config/stubby/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STUBBY_SIGNATURE__EMPTY_RESULTS` -> `signature.empty_results`,
//! `STUBBY_RESOLVER__INCLUDE_TESTS` -> `resolver.include_tests`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use stubby_config::StubbyConfig;
//!
//! let config = StubbyConfig::load().expect("config");
//! let options = config.signature.collect_options();
//! let kinds = config.resolver.external_kinds().expect("valid kinds");
//! ```

mod error;
mod resolver;
mod signature;

pub use error::ConfigError;
pub use resolver::ResolverConfig;
pub use signature::SignatureConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "STUBBY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StubbyConfig {
    #[serde(default)]
    pub signature: SignatureConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl StubbyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source cannot be read or a value
    /// has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".stubby/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stubby").join("config.toml"))
    }
}
