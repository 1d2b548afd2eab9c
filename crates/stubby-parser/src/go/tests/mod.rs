use std::path::Path;

use stubby_core::{
    ChanDir, Decl, Field, FuncType, Ident, InterfaceElem, MethodSpec, SourceFile, TypeExpr,
    TypeSpec,
};

use super::*;

mod errors;

const STORE: &str = include_str!("../../../tests/fixtures/store.go");
const SHAPES: &str = include_str!("../../../tests/fixtures/shapes.go");
const BROKEN: &str = include_str!("../../../tests/fixtures/broken.go");

fn lower(source: &str) -> SourceFile {
    parse_file(source, Path::new("fixture.go")).expect("fixture should parse")
}

fn find_spec<'a>(file: &'a SourceFile, name: &str) -> &'a TypeSpec {
    file.type_specs()
        .find(|spec| spec.name == name)
        .unwrap_or_else(|| panic!("should find type named '{name}'"))
}

fn interface_elems<'a>(file: &'a SourceFile, name: &str) -> &'a [InterfaceElem] {
    match &find_spec(file, name).ty {
        TypeExpr::Interface(elems) => elems,
        other => panic!("'{name}' should be an interface, got {other:?}"),
    }
}

fn method<'a>(file: &'a SourceFile, interface: &str, name: &str) -> &'a MethodSpec {
    interface_elems(file, interface)
        .iter()
        .find_map(|elem| match elem {
            InterfaceElem::Method(spec) if spec.name == name => Some(spec),
            _ => None,
        })
        .unwrap_or_else(|| panic!("should find method '{interface}.{name}'"))
}

/// The type of the single parameter of a `Shapes` method.
fn shape(name: &str) -> TypeExpr {
    let file = lower(SHAPES);
    let spec = method(&file, "Shapes", name);
    assert_eq!(spec.sig.params.len(), 1, "{name} should take one parameter");
    spec.sig.params[0].ty.clone()
}
