//! ast-grep wrapper for Go source.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether the path names a Go source file.
#[must_use]
pub fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Whether the path names a Go test file (`*_test.go`).
#[must_use]
pub fn is_go_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Parse Go source into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_go_files() {
        assert!(is_go_file(Path::new("store.go")));
        assert!(is_go_file(Path::new("pkg/store/store_test.go")));
        assert!(!is_go_file(Path::new("store.rs")));
        assert!(!is_go_file(Path::new("go.mod")));
        assert!(!is_go_file(Path::new("README")));
    }

    #[test]
    fn detect_test_files() {
        assert!(is_go_test_file(Path::new("pkg/store_test.go")));
        assert!(!is_go_test_file(Path::new("pkg/store.go")));
        assert!(!is_go_test_file(Path::new("pkg/testdata.go")));
    }

    #[test]
    fn parse_source_produces_valid_tree() {
        let tree = parse_source("package store\n");
        assert_eq!(tree.root().kind().as_ref(), "source_file");
    }
}
