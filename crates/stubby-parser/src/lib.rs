//! # stubby-parser
//!
//! Go front end for stubby. Parses Go source with ast-grep (tree-sitter-go),
//! lowers the top-level type declarations into the [`stubby_core`]
//! declaration tree, and resolves the underlying kinds of named types from
//! the surrounding package.

pub mod error;
pub mod go;
pub mod package;
pub mod parser;
pub mod resolver;

pub use error::ParserError;
pub use go::{lower_file, parse_file};
pub use package::{LoadOptions, Package, load_package};
pub use parser::{AstTree, is_go_file, parse_source};
pub use resolver::{PackageResolver, STDLIB_KINDS};
