//! Underlying-kind resolution backed by a loaded package.

use std::collections::HashMap;

use stubby_core::{
    Ident, KindResolver, PrimitiveKind, SourceFile, TypeExpr, UnderlyingKind, builtin_kind,
};

use crate::package::Package;

const OTHER: UnderlyingKind = UnderlyingKind::Other;

const fn primitive(kind: PrimitiveKind) -> UnderlyingKind {
    UnderlyingKind::Primitive(kind)
}

/// Underlying kinds of common standard-library types, keyed by
/// `importpath.Name`.
pub static STDLIB_KINDS: &[(&str, UnderlyingKind)] = &[
    ("bytes.Buffer", OTHER),
    ("context.CancelFunc", OTHER),
    ("context.Context", OTHER),
    ("database/sql.DB", OTHER),
    ("database/sql.Rows", OTHER),
    ("database/sql.Tx", OTHER),
    ("encoding/json.Number", primitive(PrimitiveKind::String)),
    ("encoding/json.RawMessage", OTHER),
    ("fmt.Stringer", OTHER),
    ("io.Closer", OTHER),
    ("io.ReadCloser", OTHER),
    ("io.ReadWriter", OTHER),
    ("io.Reader", OTHER),
    ("io.WriteCloser", OTHER),
    ("io.Writer", OTHER),
    ("io/fs.FileInfo", OTHER),
    ("io/fs.FileMode", primitive(PrimitiveKind::Uint32)),
    ("log/slog.Level", primitive(PrimitiveKind::Int)),
    ("log/slog.Logger", OTHER),
    ("math/big.Int", OTHER),
    ("net.Conn", OTHER),
    ("net.IP", OTHER),
    ("net/http.Handler", OTHER),
    ("net/http.Header", OTHER),
    ("net/http.Request", OTHER),
    ("net/http.Response", OTHER),
    ("net/http.ResponseWriter", OTHER),
    ("net/url.URL", OTHER),
    ("net/url.Values", OTHER),
    ("os.File", OTHER),
    ("os.FileInfo", OTHER),
    ("os.FileMode", primitive(PrimitiveKind::Uint32)),
    ("os.Signal", OTHER),
    ("reflect.Kind", primitive(PrimitiveKind::Uint)),
    ("reflect.Type", OTHER),
    ("reflect.Value", OTHER),
    ("strings.Builder", OTHER),
    ("sync.Mutex", OTHER),
    ("sync.RWMutex", OTHER),
    ("sync.WaitGroup", OTHER),
    ("time.Duration", primitive(PrimitiveKind::Int64)),
    ("time.Location", OTHER),
    ("time.Month", primitive(PrimitiveKind::Int)),
    ("time.Time", OTHER),
    ("time.Weekday", primitive(PrimitiveKind::Int)),
];

/// Resolves local names through the package's type declarations, qualified
/// names through a table of external kinds, and everything else as a Go
/// predeclared type. Unqualified names not declared in the package are also
/// looked up in dot-imported packages.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    types: HashMap<String, TypeExpr>,
    external: HashMap<String, UnderlyingKind>,
    dot_imports: Vec<String>,
}

impl Default for PackageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageResolver {
    /// A resolver with no local types and the standard-library table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            external: STDLIB_KINDS
                .iter()
                .map(|(name, kind)| ((*name).to_string(), *kind))
                .collect(),
            dot_imports: Vec::new(),
        }
    }

    #[must_use]
    pub fn for_package(package: &Package) -> Self {
        let mut resolver = Self::new();
        for file in package.files() {
            resolver.add_file(file);
        }
        resolver
    }

    /// Register the type declarations of a file. A name already registered
    /// keeps its first definition.
    pub fn add_file(&mut self, file: &SourceFile) {
        for spec in file.type_specs() {
            self.types
                .entry(spec.name.clone())
                .or_insert_with(|| spec.ty.clone());
        }
        for path in &file.dot_imports {
            if !self.dot_imports.contains(path) {
                self.dot_imports.push(path.clone());
            }
        }
    }

    /// Add or override external kinds keyed by `importpath.Name`.
    #[must_use]
    pub fn with_external(
        mut self,
        kinds: impl IntoIterator<Item = (String, UnderlyingKind)>,
    ) -> Self {
        self.external.extend(kinds);
        self
    }

    fn local_kind<'a>(
        &'a self,
        name: &'a str,
        visiting: &mut Vec<&'a str>,
    ) -> Option<UnderlyingKind> {
        let Some(ty) = self.types.get(name) else {
            return self.dot_imported_kind(name).or_else(|| builtin_kind(name));
        };
        if visiting.contains(&name) {
            tracing::debug!(name, "cyclic type definition");
            return None;
        }
        visiting.push(name);
        self.underlying(ty, visiting)
    }

    fn underlying<'a>(
        &'a self,
        ty: &'a TypeExpr,
        visiting: &mut Vec<&'a str>,
    ) -> Option<UnderlyingKind> {
        match ty {
            TypeExpr::Ident(ident) => self.local_kind(&ident.name, visiting),
            TypeExpr::Qualified { name, .. } => self.external_kind(name),
            TypeExpr::Unsupported(_) => None,
            TypeExpr::Pointer(_)
            | TypeExpr::Slice(_)
            | TypeExpr::Array { .. }
            | TypeExpr::Map { .. }
            | TypeExpr::Func(_)
            | TypeExpr::Chan { .. }
            | TypeExpr::Struct(_)
            | TypeExpr::Interface(_)
            | TypeExpr::Variadic(_) => Some(UnderlyingKind::Other),
        }
    }

    fn external_kind(&self, ident: &Ident) -> Option<UnderlyingKind> {
        self.external.get(&ident.qualified_name()).copied()
    }

    fn dot_imported_kind(&self, name: &str) -> Option<UnderlyingKind> {
        self.dot_imports
            .iter()
            .find_map(|path| self.external.get(&format!("{path}.{name}")).copied())
    }
}

impl KindResolver for PackageResolver {
    fn resolved_underlying_kind(&self, ident: &Ident) -> Option<UnderlyingKind> {
        if ident.package.is_some() {
            self.external_kind(ident)
        } else {
            self.local_kind(&ident.name, &mut Vec::new())
        }
    }
}
