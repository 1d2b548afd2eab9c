//! Primitive and underlying kinds, and the type-resolution seam.
//!
//! Zero values depend on what a named type ultimately *is*, not on how it is
//! spelled. A `KindResolver` answers that question for one identifier at a
//! time; the signature builder never resolves anything itself.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Ident;

// ---------------------------------------------------------------------------
// PrimitiveKind
// ---------------------------------------------------------------------------

/// Go basic types. `byte` and `rune` map onto `Uint8` and `Int32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
}

impl PrimitiveKind {
    /// Return the Go spelling of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
        }
    }

    /// Look up a predeclared basic type by its Go name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" | "rune" => Self::Int32,
            "int64" => Self::Int64,
            "uint" => Self::Uint,
            "uint8" | "byte" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "uintptr" => Self::Uintptr,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "complex64" => Self::Complex64,
            "complex128" => Self::Complex128,
            "string" => Self::String,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UnderlyingKind
// ---------------------------------------------------------------------------

/// The fully resolved classification of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderlyingKind {
    Primitive(PrimitiveKind),
    /// Structs, interfaces, pointers, maps and everything else without a
    /// literal zero value.
    Other,
}

impl UnderlyingKind {
    /// Parse a kind name as written in configuration files.
    ///
    /// Accepts every basic type name plus `other`, `struct`, `interface`,
    /// `pointer`, `slice`, `map`, `func` and `chan`, which all mean `Other`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(kind) = PrimitiveKind::from_name(name) {
            return Some(Self::Primitive(kind));
        }
        match name {
            "other" | "struct" | "interface" | "pointer" | "slice" | "map" | "func" | "chan" => {
                Some(Self::Other)
            }
            _ => None,
        }
    }
}

impl fmt::Display for UnderlyingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => kind.fmt(f),
            Self::Other => f.write_str("other"),
        }
    }
}

/// Underlying kind of a Go predeclared type name, if `name` is one.
#[must_use]
pub fn builtin_kind(name: &str) -> Option<UnderlyingKind> {
    PrimitiveKind::from_name(name)
        .map(UnderlyingKind::Primitive)
        .or_else(|| matches!(name, "error" | "any" | "comparable").then_some(UnderlyingKind::Other))
}

// ---------------------------------------------------------------------------
// KindResolver
// ---------------------------------------------------------------------------

/// Answers "what is the underlying kind of this identifier?".
///
/// Returning `None` means the identifier could not be resolved; callers must
/// treat that as a hard failure rather than guess.
pub trait KindResolver {
    fn resolved_underlying_kind(&self, ident: &Ident) -> Option<UnderlyingKind>;
}

impl<R: KindResolver + ?Sized> KindResolver for &R {
    fn resolved_underlying_kind(&self, ident: &Ident) -> Option<UnderlyingKind> {
        (**self).resolved_underlying_kind(ident)
    }
}

/// Fixed table of kinds keyed by [`Ident::qualified_name`], backed by the Go
/// predeclared types.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    kinds: HashMap<String, UnderlyingKind>,
}

impl StaticResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` (e.g. `Celsius` or `time.Duration`) with a kind.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, kind: UnderlyingKind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }
}

impl KindResolver for StaticResolver {
    fn resolved_underlying_kind(&self, ident: &Ident) -> Option<UnderlyingKind> {
        if let Some(kind) = self.kinds.get(&ident.qualified_name()) {
            return Some(*kind);
        }
        if ident.package.is_none() {
            return builtin_kind(&ident.name);
        }
        None
    }
}
