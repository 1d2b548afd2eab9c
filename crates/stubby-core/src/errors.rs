//! Error types raised while building method records.
//!
//! Rendering never fails: shapes without a rendering fall back to `nil` and
//! are logged. The two variants below are hard failures and abort collection
//! of the file they occur in.

use thiserror::Error;

/// Failures while deriving a single method's parameter or return record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The resolver could not classify an identifier, so no zero value can be
    /// chosen without guessing.
    #[error("cannot resolve the underlying kind of `{ident}`")]
    UnresolvedType { ident: String },

    /// The field list cannot be turned into well-formed Go.
    #[error("malformed signature: {reason}")]
    MalformedSignature { reason: String },
}

/// A [`SignatureError`] tagged with the interface and method it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("interface {interface}, method {method}: {source}")]
pub struct CollectError {
    pub interface: String,
    pub method: String,
    #[source]
    pub source: SignatureError,
}
