use stubby_core::{
    CollectOptions, Decl, Field, FuncType, InterfaceElem, MethodSpec, PrimitiveKind, SourceFile,
    StaticResolver, TypeExpr, TypeSpec, UnderlyingKind,
};

use super::*;

mod scenarios;

fn resolver() -> StaticResolver {
    StaticResolver::new()
        .with("Value", UnderlyingKind::Other)
        .with("Celsius", UnderlyingKind::Primitive(PrimitiveKind::Float64))
        .with("context.Context", UnderlyingKind::Other)
}

fn method(name: &str, params: Vec<Field>, results: Vec<Field>) -> InterfaceElem {
    InterfaceElem::Method(MethodSpec {
        name: name.to_string(),
        sig: FuncType { params, results },
    })
}

fn interface(name: &str, elems: Vec<InterfaceElem>) -> Decl {
    Decl::Type(TypeSpec {
        name: name.to_string(),
        alias: false,
        generic: false,
        ty: TypeExpr::Interface(elems),
    })
}

fn file(decls: Vec<Decl>) -> SourceFile {
    SourceFile {
        package: "store".to_string(),
        decls,
        ..SourceFile::default()
    }
}

fn collect(file: &SourceFile) -> Interfaces {
    collect_interfaces(file, &resolver(), &CollectOptions::default())
        .expect("collection should succeed")
}

fn error_result() -> Field {
    Field::unnamed(TypeExpr::name("error"))
}
