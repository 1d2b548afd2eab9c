//! Go lowering: ast-grep tree to declaration tree.
//!
//! Only what stub generation needs is lowered: the package clause, the
//! import table, and type declarations. Other top-level declarations are kept
//! as [`Decl::Other`] so declaration order survives; type declarations inside
//! their bodies follow them as ordinary [`Decl::Type`] entries.

mod helpers;
mod types;

use std::path::Path;

use ast_grep_core::Node;
use stubby_core::{Decl, SourceFile, TypeSpec};

use crate::error::ParserError;
use crate::parser::parse_source;
use helpers::Imports;

const OTHER_TOP_KINDS: &[&str] = &[
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "const_declaration",
    "var_declaration",
];

/// Parse and lower one Go file.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the tree contains a syntax error.
pub fn parse_file(source: &str, path: &Path) -> Result<SourceFile, ParserError> {
    let tree = parse_source(source);
    if let Some(error) = helpers::first_error(tree.root()) {
        return Err(ParserError::ParseFailed {
            path: path.to_path_buf(),
            line: error.start_pos().line() + 1,
            message: helpers::error_message(&error),
        });
    }
    let file = lower_file(&tree.root());
    tracing::debug!(
        path = %path.display(),
        package = %file.package,
        decls = file.decls.len(),
        "lowered go file"
    );
    Ok(file)
}

/// Lower a `source_file` node.
pub fn lower_file<D: ast_grep_core::Doc>(root: &Node<D>) -> SourceFile {
    let imports = Imports::collect(root);
    let mut file = SourceFile {
        dot_imports: imports.dot_paths().to_vec(),
        ..SourceFile::default()
    };

    for child in root.children() {
        let kind = child.kind();
        match kind.as_ref() {
            "package_clause" => {
                if let Some(name) = child
                    .children()
                    .find(|c| c.kind().as_ref() == "package_identifier")
                {
                    file.package = name.text().to_string();
                }
            }
            "type_declaration" => {
                file.decls.extend(
                    lower_type_declaration(&child, &imports)
                        .into_iter()
                        .map(Decl::Type),
                );
            }
            other if OTHER_TOP_KINDS.contains(&other) => {
                file.decls.push(Decl::Other {
                    kind: other.to_string(),
                });
                let mut nested = Vec::new();
                helpers::nested_type_declarations(&child, &mut nested);
                for decl in &nested {
                    let specs = lower_type_declaration(decl, &imports);
                    for spec in &specs {
                        tracing::debug!(name = %spec.name, "function-local type");
                    }
                    file.decls.extend(specs.into_iter().map(Decl::Type));
                }
            }
            _ => {}
        }
    }
    file
}

// ── type_declaration ──────────────────────────────────────────────

/// A `type` declaration holds one spec, or a parenthesized group of them.
fn lower_type_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
    imports: &Imports,
) -> Vec<TypeSpec> {
    node.children()
        .filter_map(|child| match child.kind().as_ref() {
            "type_spec" => lower_type_spec(&child, imports, false),
            "type_alias" => lower_type_spec(&child, imports, true),
            _ => None,
        })
        .collect()
}

fn lower_type_spec<D: ast_grep_core::Doc>(
    node: &Node<D>,
    imports: &Imports,
    alias: bool,
) -> Option<TypeSpec> {
    let name = node.field("name")?.text().to_string();
    let ty = node.field("type")?;
    let generic = node
        .children()
        .any(|c| c.kind().as_ref() == "type_parameter_list");

    Some(TypeSpec {
        name,
        alias,
        generic,
        ty: types::lower_type(&ty, imports),
    })
}

#[cfg(test)]
mod tests;
