//! Go declaration tree consumed by the signature builder.
//!
//! The tree is deliberately small: it carries exactly what rendering, name
//! synthesis and zero-value resolution need. Every type-expression shape is a
//! `TypeExpr` variant so consumers can match exhaustively.

use serde::{Deserialize, Serialize};

/// One parsed Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level declarations in source order, each followed by the type
    /// declarations nested in its body.
    pub decls: Vec<Decl>,
    /// Import paths brought in with `import . "path"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dot_imports: Vec<String>,
}

impl SourceFile {
    /// Iterate over the `type` specs of this file in source order.
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(spec) => Some(spec),
            Decl::Other { .. } => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    /// `type Name ...` or `type Name = ...`.
    Type(TypeSpec),
    /// Functions, methods, constants and variables. Only the node kind is kept.
    Other { kind: String },
}

/// A single `type` spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    /// `type A = B` rather than `type A B`.
    pub alias: bool,
    /// Declared with a type parameter list.
    pub generic: bool,
    pub ty: TypeExpr,
}

/// An identifier in type position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    /// Import path of the package the identifier belongs to, when it was
    /// reached through a qualifier. `None` means package-local or predeclared.
    pub package: Option<String>,
}

impl Ident {
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
        }
    }

    #[must_use]
    pub fn in_package(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
        }
    }

    /// `path.Name` for imported identifiers, `Name` otherwise.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{package}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// Type expression node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// `Name`
    Ident(Ident),
    /// `pkg.Name`. `qualifier` is the spelling used in the source; the member
    /// identifier carries the resolved import path.
    Qualified { qualifier: String, name: Ident },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`
    Array { len: String, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `func(...) ...`
    Func(FuncType),
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `struct { ... }`
    Struct(Vec<Field>),
    /// `interface { ... }`
    Interface(Vec<InterfaceElem>),
    /// `...T` in the last parameter position.
    Variadic(Box<TypeExpr>),
    /// A node shape this tree has no variant for, tagged with its node kind.
    Unsupported(String),
}

impl TypeExpr {
    /// Package-local or predeclared name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Ident(Ident::local(name))
    }

    /// Qualified name whose qualifier is also the import path.
    #[must_use]
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        let package = package.into();
        Self::Qualified {
            name: Ident::in_package(package.clone(), name),
            qualifier: package,
        }
    }

    #[must_use]
    pub fn pointer(elem: Self) -> Self {
        Self::Pointer(Box::new(elem))
    }

    #[must_use]
    pub fn slice(elem: Self) -> Self {
        Self::Slice(Box::new(elem))
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn chan(dir: ChanDir, elem: Self) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }
}

/// A parameter, result or struct field entry.
///
/// `names` is empty for unnamed entries and holds several names for grouped
/// declarations such as `a, b int`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    #[must_use]
    pub const fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
        }
    }
}

/// Parameters and results of a function type or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncType {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// An element of an interface body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceElem {
    Method(MethodSpec),
    /// Embedded interface or type-set term.
    Embedded(TypeExpr),
}

/// A method element of an interface body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub sig: FuncType,
}
