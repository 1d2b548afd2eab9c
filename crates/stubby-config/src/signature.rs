//! Signature rendering configuration.

use serde::{Deserialize, Serialize};
use stubby_core::{CollectOptions, EmptyResultPolicy};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct SignatureConfig {
    /// What a method without results renders as: `empty` or `reject`.
    #[serde(default)]
    pub empty_results: EmptyResultPolicy,

    /// Inline the methods of embedded interfaces declared in the same file.
    #[serde(default)]
    pub expand_embedded: bool,
}

impl SignatureConfig {
    #[must_use]
    pub const fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            empty_results: self.empty_results,
            expand_embedded: self.expand_embedded,
        }
    }
}
