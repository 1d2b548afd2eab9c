//! Method records handed to stub emitters.
//!
//! Every field is plain text ready for template substitution.

use serde::{Deserialize, Serialize};

/// Three projections of one parameter list. Splitting any of them on
/// top-level commas yields lists of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// `name type` pairs, comma-joined.
    pub full_fields: String,
    /// Names only, comma-joined.
    pub names_only: String,
    /// Types only, comma-joined.
    pub types_only: String,
}

/// Return clause and the matching zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    /// Parenthesized when there is more than one result.
    pub signature_text: String,
    /// One zero-value expression per result, comma-joined.
    pub default_values: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub param: Param,
    #[serde(rename = "return")]
    pub ret: Return,
}

/// An interface and its methods in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
}
