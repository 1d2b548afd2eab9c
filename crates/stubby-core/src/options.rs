//! Knobs for the interface collector.

use serde::{Deserialize, Serialize};

/// What to do with a method that declares no results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResultPolicy {
    /// Render an empty signature and an empty default-value list.
    #[default]
    Empty,
    /// Fail with `MalformedSignature`.
    Reject,
}

/// Options for a single collection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectOptions {
    #[serde(default)]
    pub empty_results: EmptyResultPolicy,
    /// Inline the methods of embedded interfaces declared in the same file.
    #[serde(default)]
    pub expand_embedded: bool,
}
