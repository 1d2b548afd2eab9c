//! Loading a target file together with the rest of its package.

use std::fs;
use std::path::{Path, PathBuf};

use stubby_core::SourceFile;

use crate::error::ParserError;
use crate::go::parse_file;
use crate::parser::{is_go_file, is_go_test_file};

/// Which package siblings to load next to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Load the other `.go` files of the target's directory.
    pub siblings: bool,
    /// Also load `_test.go` siblings.
    pub include_tests: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            siblings: true,
            include_tests: false,
        }
    }
}

/// A target file and the sibling files that share its package clause.
#[derive(Debug, Clone)]
pub struct Package {
    pub path: PathBuf,
    pub target: SourceFile,
    pub siblings: Vec<SourceFile>,
}

impl Package {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.target.package
    }

    /// The target first, then siblings in path order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        std::iter::once(&self.target).chain(&self.siblings)
    }
}

/// Load `path` and, when enabled, the rest of its package.
///
/// Siblings that cannot be read or parsed are skipped with a warning, as are
/// files declaring a different package (external `_test` packages included).
///
/// # Errors
/// Returns `ParserError::NotGoSource` for a non-`.go` path, and `Io` or
/// `ParseFailed` when the target itself cannot be read or parsed.
pub fn load_package(path: &Path, options: &LoadOptions) -> Result<Package, ParserError> {
    if !is_go_file(path) {
        return Err(ParserError::NotGoSource(path.to_path_buf()));
    }
    let target = read_go_file(path)?;

    let mut siblings = Vec::new();
    if options.siblings {
        for sibling in sibling_paths(path, options)? {
            match read_go_file(&sibling) {
                Ok(file) if file.package == target.package => {
                    tracing::debug!(path = %sibling.display(), "loaded package sibling");
                    siblings.push(file);
                }
                Ok(file) => {
                    tracing::debug!(
                        path = %sibling.display(),
                        package = %file.package,
                        "skipping file from another package"
                    );
                }
                Err(error) => {
                    tracing::warn!(path = %sibling.display(), %error, "skipping package sibling");
                }
            }
        }
    }

    Ok(Package {
        path: path.to_path_buf(),
        target,
        siblings,
    })
}

fn read_go_file(path: &Path) -> Result<SourceFile, ParserError> {
    let source = fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_file(&source, path)
}

fn sibling_paths(target: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>, ParserError> {
    let dir = target
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let entries = fs::read_dir(dir).map_err(|source| ParserError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let target_name = target.file_name();
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_go_file(path))
        .filter(|path| path.file_name() != target_name)
        .filter(|path| options.include_tests || !is_go_test_file(path))
        .collect();
    paths.sort();
    Ok(paths)
}
