use pretty_assertions::assert_eq;

use super::*;

#[test]
fn get_with_named_struct_value() {
    let source = file(vec![interface(
        "Cache",
        vec![method(
            "Get",
            vec![Field::named("key", TypeExpr::name("string"))],
            vec![
                Field::unnamed(TypeExpr::name("Value")),
                Field::unnamed(TypeExpr::name("bool")),
            ],
        )],
    )]);

    let interfaces = collect(&source);
    let get = &interfaces["Cache"].methods[0];
    assert_eq!(get.name, "Get");
    assert_eq!(get.param.full_fields, "key string");
    assert_eq!(get.param.names_only, "key");
    assert_eq!(get.param.types_only, "string");
    assert_eq!(get.ret.signature_text, "(Value, bool)");
    assert_eq!(get.ret.default_values, "nil, false");
}

#[test]
fn do_with_context_and_map() {
    let source = file(vec![interface(
        "Runner",
        vec![method(
            "Do",
            vec![
                Field::unnamed(TypeExpr::qualified("context", "Context")),
                Field::unnamed(TypeExpr::map(
                    TypeExpr::name("string"),
                    TypeExpr::name("int"),
                )),
            ],
            vec![error_result()],
        )],
    )]);

    let interfaces = collect(&source);
    let run = &interfaces["Runner"].methods[0];
    assert_eq!(run.param.names_only, "ctx, ivalmap");
    assert_eq!(
        run.param.full_fields,
        "ctx context.Context, ivalmap map[string]int"
    );
    assert_eq!(run.param.types_only, "context.Context, map[string]int");
    assert_eq!(run.ret.signature_text, "error");
    assert_eq!(run.ret.default_values, "nil");
}

#[test]
fn three_unnamed_ints() {
    let int = || Field::unnamed(TypeExpr::name("int"));
    let source = file(vec![interface(
        "Adder",
        vec![method(
            "Add",
            vec![int(), int(), int()],
            vec![Field::unnamed(TypeExpr::name("int"))],
        )],
    )]);

    let interfaces = collect(&source);
    let add = &interfaces["Adder"].methods[0];
    assert_eq!(add.param.names_only, "ival, ival0, ival1");
    assert_eq!(add.ret.signature_text, "int");
    assert_eq!(add.ret.default_values, "0");
}

#[test]
fn counters_reset_per_method() {
    let int = || Field::unnamed(TypeExpr::name("int"));
    let source = file(vec![interface(
        "Pair",
        vec![
            method("A", vec![int(), int()], vec![error_result()]),
            method("B", vec![int()], vec![error_result()]),
        ],
    )]);

    let interfaces = collect(&source);
    assert_eq!(interfaces["Pair"].methods[0].param.names_only, "ival, ival0");
    assert_eq!(interfaces["Pair"].methods[1].param.names_only, "ival");
}

#[test]
fn methods_keep_declaration_order() {
    let source = file(vec![interface(
        "Store",
        vec![
            method("Put", Vec::new(), vec![error_result()]),
            method("Delete", Vec::new(), vec![error_result()]),
            method("All", Vec::new(), vec![error_result()]),
        ],
    )]);

    let names: Vec<_> = collect(&source)["Store"]
        .methods
        .iter()
        .map(|method| method.name.clone())
        .collect();
    assert_eq!(names, ["Put", "Delete", "All"]);
}

#[test]
fn multiple_interfaces_are_independent() {
    let source = file(vec![
        interface("Reader", vec![method("Read", Vec::new(), vec![error_result()])]),
        Decl::Other {
            kind: "function_declaration".to_string(),
        },
        interface("Writer", vec![method("Write", Vec::new(), vec![error_result()])]),
    ]);

    let interfaces = collect(&source);
    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces["Reader"].methods[0].name, "Read");
    assert_eq!(interfaces["Writer"].methods[0].name, "Write");
}

#[test]
fn later_declaration_with_same_name_wins() {
    let source = file(vec![
        interface("Store", vec![method("Old", Vec::new(), vec![error_result()])]),
        interface("Store", vec![method("New", Vec::new(), vec![error_result()])]),
    ]);

    let interfaces = collect(&source);
    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces["Store"].methods[0].name, "New");
}

#[test]
fn non_interface_types_are_ignored() {
    let source = file(vec![Decl::Type(TypeSpec {
        name: "Celsius".to_string(),
        alias: false,
        generic: false,
        ty: TypeExpr::name("float64"),
    })]);
    assert!(collect(&source).is_empty());
}

#[test]
fn generic_interfaces_are_skipped() {
    let source = file(vec![Decl::Type(TypeSpec {
        name: "Box".to_string(),
        alias: false,
        generic: true,
        ty: TypeExpr::Interface(vec![method("Get", Vec::new(), vec![error_result()])]),
    })]);
    assert!(collect(&source).is_empty());
}

#[test]
fn named_results_keep_names_and_zero_values() {
    let source = file(vec![interface(
        "Thermometer",
        vec![method(
            "Read",
            Vec::new(),
            vec![
                Field::named("temp", TypeExpr::name("Celsius")),
                Field::named("err", TypeExpr::name("error")),
            ],
        )],
    )]);

    let interfaces = collect(&source);
    let read = &interfaces["Thermometer"].methods[0];
    assert_eq!(read.ret.signature_text, "(temp Celsius, err error)");
    assert_eq!(read.ret.default_values, "0, nil");
}

#[test]
fn method_without_results_renders_empty_by_default() {
    let source = file(vec![interface(
        "Closer",
        vec![method("Close", Vec::new(), Vec::new())],
    )]);

    let interfaces = collect(&source);
    let close = &interfaces["Closer"].methods[0];
    assert_eq!(close.ret.signature_text, "");
    assert_eq!(close.ret.default_values, "");
}

#[test]
fn embedded_elements_are_skipped_by_default() {
    let source = file(vec![interface(
        "ReadCloser",
        vec![
            InterfaceElem::Embedded(TypeExpr::qualified("io", "Reader")),
            method("Close", Vec::new(), vec![error_result()]),
        ],
    )]);

    let interfaces = collect(&source);
    assert_eq!(interfaces["ReadCloser"].methods.len(), 1);
    assert_eq!(interfaces["ReadCloser"].methods[0].name, "Close");
}
