use std::collections::HashMap;

use ast_grep_core::Node;

const ERROR_SNIPPET_CHARS: usize = 40;

// ── Syntax errors ─────────────────────────────────────────────────

/// First `ERROR` node in document order, including `node` itself.
pub(super) fn first_error<'r, D: ast_grep_core::Doc>(node: Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "ERROR" {
        return Some(node);
    }
    node.children().find_map(first_error)
}

pub(super) fn error_message<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let text = node.text();
    let line = text.lines().next().unwrap_or_default().trim();
    let snippet: String = line.chars().take(ERROR_SNIPPET_CHARS).collect();
    if snippet.is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near `{snippet}`")
    }
}

// ── Imports ───────────────────────────────────────────────────────

/// Qualifier to import path, as written in the file's import declarations.
#[derive(Debug, Default)]
pub(super) struct Imports {
    by_qualifier: HashMap<String, String>,
    dot: Vec<String>,
}

impl Imports {
    pub(super) fn collect<D: ast_grep_core::Doc>(root: &Node<D>) -> Self {
        let mut imports = Self::default();
        for decl in root
            .children()
            .filter(|c| c.kind().as_ref() == "import_declaration")
        {
            for child in decl.children() {
                match child.kind().as_ref() {
                    "import_spec" => imports.add(&child),
                    "import_spec_list" => {
                        for spec in child
                            .children()
                            .filter(|c| c.kind().as_ref() == "import_spec")
                        {
                            imports.add(&spec);
                        }
                    }
                    _ => {}
                }
            }
        }
        imports
    }

    fn add<D: ast_grep_core::Doc>(&mut self, spec: &Node<D>) {
        let Some(path) = spec.field("path").map(|p| unquote(&p.text())) else {
            return;
        };
        let qualifier = match spec.field("name") {
            Some(name) => {
                let name = name.text().to_string();
                match name.as_str() {
                    "." => {
                        self.dot.push(path);
                        return;
                    }
                    "_" => {
                        tracing::debug!(path = %path, "blank import");
                        return;
                    }
                    _ => name,
                }
            }
            None => package_name(&path).to_string(),
        };
        self.by_qualifier.insert(qualifier, path);
    }

    /// Import path for a qualifier. An unknown qualifier stands for itself.
    pub(super) fn resolve<'a>(&'a self, qualifier: &'a str) -> &'a str {
        self.by_qualifier
            .get(qualifier)
            .map_or(qualifier, String::as_str)
    }

    /// Paths imported with a `.` name, in declaration order.
    pub(super) fn dot_paths(&self) -> &[String] {
        &self.dot
    }
}

// ── Nested declarations ───────────────────────────────────────────

/// `type_declaration` nodes below `node` (function bodies, closures), in
/// document order.
pub(super) fn nested_type_declarations<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    out: &mut Vec<Node<'r, D>>,
) {
    for child in node.children() {
        if child.kind().as_ref() == "type_declaration" {
            out.push(child);
        } else {
            nested_type_declarations(&child, out);
        }
    }
}

fn unquote(literal: &str) -> String {
    literal.trim_matches(|c| c == '"' || c == '`').to_string()
}

/// Default package name for an import path: the last segment, skipping a
/// major-version suffix (`.../yaml/v3`, `gopkg.in/yaml.v3`).
pub(super) fn package_name(path: &str) -> &str {
    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or(path);
    let last = if is_major_version(last) {
        segments.next().unwrap_or(last)
    } else {
        last
    };
    match last.rsplit_once(".v") {
        Some((name, version)) if !name.is_empty() && is_digits(version) => name,
        _ => last,
    }
}

fn is_major_version(segment: &str) -> bool {
    segment.strip_prefix('v').is_some_and(is_digits)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
