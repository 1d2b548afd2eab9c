//! Type resolution configuration.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use stubby_core::UnderlyingKind;

use crate::error::ConfigError;

const fn default_load_package() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Load the other files of the target's package for local type lookups.
    #[serde(default = "default_load_package")]
    pub load_package: bool,

    /// Also load `_test.go` files of the package.
    #[serde(default)]
    pub include_tests: bool,

    /// Underlying kinds of imported types, keyed by `importpath.Name`
    /// (e.g. `"github.com/acme/ids.ID" = "string"`).
    #[serde(default)]
    pub external: BTreeMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            load_package: default_load_package(),
            include_tests: false,
            external: BTreeMap::new(),
        }
    }
}

impl ResolverConfig {
    /// Validate the `external` table into underlying kinds.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a key that is not of the form
    /// `importpath.Name` or a value that names no known kind.
    pub fn external_kinds(&self) -> Result<HashMap<String, UnderlyingKind>, ConfigError> {
        self.external
            .iter()
            .map(|(key, value)| {
                let field = format!("resolver.external.{key}");
                let qualified = key
                    .rsplit_once('.')
                    .is_some_and(|(path, name)| !path.is_empty() && !name.is_empty());
                if !qualified {
                    return Err(ConfigError::InvalidValue {
                        field,
                        reason: "expected a key of the form importpath.Name".to_string(),
                    });
                }
                let kind = UnderlyingKind::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                    field,
                    reason: format!("unknown kind '{value}'"),
                })?;
                Ok((key.clone(), kind))
            })
            .collect()
    }
}
