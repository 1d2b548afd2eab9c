//! # stubby-core
//!
//! Core types and error types for stubby.
//!
//! This crate provides the foundational types shared across all stubby crates:
//! - The Go declaration tree consumed by the signature builder (`ast`)
//! - Primitive and underlying kinds plus the `KindResolver` seam (`kind`)
//! - Method records handed to emitters (`records`)
//! - Collection options and the empty-result policy (`options`)
//! - Cross-cutting error types (`errors`)

pub mod ast;
pub mod errors;
pub mod kind;
pub mod options;
pub mod records;

pub use ast::{
    ChanDir, Decl, Field, FuncType, Ident, InterfaceElem, MethodSpec, SourceFile, TypeExpr,
    TypeSpec,
};
pub use errors::{CollectError, SignatureError};
pub use kind::{KindResolver, PrimitiveKind, StaticResolver, UnderlyingKind, builtin_kind};
pub use options::{CollectOptions, EmptyResultPolicy};
pub use records::{Interface, Method, Param, Return};
