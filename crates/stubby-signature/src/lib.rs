//! # stubby-signature
//!
//! Turns the interfaces of a parsed Go file into method records a stub
//! emitter can fill into a template.
//!
//! Four pieces cooperate:
//! - [`render`]: canonical text for any type expression
//! - [`names`]: readable, collision-free names for unnamed parameters
//! - [`zero`]: default-value expressions driven by the resolved underlying kind
//! - [`collect`]: walks the declarations and assembles one record per method
//!
//! Type resolution is injected through [`stubby_core::KindResolver`].

pub mod collect;
pub mod method;
pub mod names;
pub mod render;
pub mod zero;

pub use collect::{InterfaceCollector, Interfaces, collect_interfaces};
pub use method::{build_method, build_param, build_return};
pub use names::{NameTable, ident_stem};
pub use render::{render_signature, render_type, render_types_only};
pub use zero::{default_values, zero_value};
