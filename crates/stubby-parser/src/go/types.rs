//! Type node lowering.
//!
//! Shapes the declaration tree has no variant for (`generic_type`,
//! `negated_type`, union constraint elements) lower to
//! [`TypeExpr::Unsupported`] carrying the node kind.

use ast_grep_core::Node;
use stubby_core::{ChanDir, Field, FuncType, Ident, InterfaceElem, MethodSpec, TypeExpr};

use super::helpers::Imports;

pub(super) fn lower_type<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> TypeExpr {
    let kind = node.kind();
    let lowered = match kind.as_ref() {
        "type_identifier" => Some(TypeExpr::name(node.text())),
        "qualified_type" => lower_qualified(node, imports),
        "pointer_type" => {
            inner_type(node).map(|elem| TypeExpr::pointer(lower_type(&elem, imports)))
        }
        "parenthesized_type" => inner_type(node).map(|inner| lower_type(&inner, imports)),
        "slice_type" => node
            .field("element")
            .map(|elem| TypeExpr::slice(lower_type(&elem, imports))),
        "array_type" => lower_array(node, imports),
        "map_type" => lower_map(node, imports),
        "channel_type" => lower_channel(node, imports),
        "function_type" => Some(TypeExpr::Func(lower_signature(node, imports))),
        "struct_type" => Some(TypeExpr::Struct(lower_struct_fields(node, imports))),
        "interface_type" => Some(TypeExpr::Interface(lower_interface_elems(node, imports))),
        _ => None,
    };
    lowered.unwrap_or_else(|| TypeExpr::Unsupported(kind.to_string()))
}

/// Parameters and results of a `function_type` or interface method.
pub(super) fn lower_signature<D: ast_grep_core::Doc>(
    node: &Node<D>,
    imports: &Imports,
) -> FuncType {
    let params = node
        .field("parameters")
        .map(|list| lower_parameter_list(&list, imports))
        .unwrap_or_default();
    let results = node
        .field("result")
        .map(|result| {
            if result.kind().as_ref() == "parameter_list" {
                lower_parameter_list(&result, imports)
            } else {
                vec![Field::unnamed(lower_type(&result, imports))]
            }
        })
        .unwrap_or_default();
    FuncType { params, results }
}

/// The single type child of a wrapper node, skipping punctuation.
fn inner_type<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children()
        .find(|c| !matches!(c.kind().as_ref(), "*" | "(" | ")" | "comment"))
}

// ── Named types ───────────────────────────────────────────────────

fn lower_qualified<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> Option<TypeExpr> {
    let qualifier = node.field("package")?.text().to_string();
    let name = node.field("name")?.text().to_string();
    let package = imports.resolve(&qualifier).to_string();
    Some(TypeExpr::Qualified {
        name: Ident::in_package(package, name),
        qualifier,
    })
}

// ── Composite types ───────────────────────────────────────────────

fn lower_array<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> Option<TypeExpr> {
    let len = node.field("length")?.text().to_string();
    let elem = node.field("element")?;
    Some(TypeExpr::Array {
        len,
        elem: Box::new(lower_type(&elem, imports)),
    })
}

fn lower_map<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> Option<TypeExpr> {
    let key = node.field("key")?;
    let value = node.field("value")?;
    Some(TypeExpr::map(
        lower_type(&key, imports),
        lower_type(&value, imports),
    ))
}

/// Direction comes from where the arrow sits relative to `chan`:
/// `<-chan T` receives, `chan<- T` sends.
fn lower_channel<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> Option<TypeExpr> {
    let value = node.field("value")?;
    let tokens: Vec<String> = node
        .children()
        .map(|c| c.kind().to_string())
        .take_while(|kind| kind == "chan" || kind == "<-")
        .collect();
    let dir = match tokens.as_slice() {
        [first, ..] if first == "<-" => ChanDir::Recv,
        tokens if tokens.iter().any(|kind| kind == "<-") => ChanDir::Send,
        _ => ChanDir::Both,
    };
    Some(TypeExpr::chan(dir, lower_type(&value, imports)))
}

// ── Field lists ───────────────────────────────────────────────────

fn lower_parameter_list<D: ast_grep_core::Doc>(list: &Node<D>, imports: &Imports) -> Vec<Field> {
    list.children()
        .filter_map(|decl| {
            let variadic = match decl.kind().as_ref() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => return None,
            };
            let ty = lower_type(&decl.field("type")?, imports);
            let ty = if variadic {
                TypeExpr::Variadic(Box::new(ty))
            } else {
                ty
            };
            Some(Field {
                names: child_texts(&decl, "identifier"),
                ty,
            })
        })
        .collect()
}

fn lower_struct_fields<D: ast_grep_core::Doc>(node: &Node<D>, imports: &Imports) -> Vec<Field> {
    node.children()
        .filter(|c| c.kind().as_ref() == "field_declaration_list")
        .flat_map(|list| list.children().collect::<Vec<_>>())
        .filter(|c| c.kind().as_ref() == "field_declaration")
        .filter_map(|decl| {
            let names = child_texts(&decl, "field_identifier");
            let ty = lower_type(&decl.field("type")?, imports);
            // Embedded `*T` keeps its star outside the type field.
            let embedded_pointer =
                names.is_empty() && decl.children().any(|c| c.kind().as_ref() == "*");
            let ty = if embedded_pointer {
                TypeExpr::pointer(ty)
            } else {
                ty
            };
            Some(Field { names, ty })
        })
        .collect()
}

fn child_texts<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == kind)
        .map(|c| c.text().to_string())
        .collect()
}

// ── interface_type ────────────────────────────────────────────────

/// Method elements and embedded elements in declaration order. Both the
/// current (`method_elem`, `type_elem`) and older (`method_spec`,
/// `interface_type_name`) grammar node names are accepted.
fn lower_interface_elems<D: ast_grep_core::Doc>(
    node: &Node<D>,
    imports: &Imports,
) -> Vec<InterfaceElem> {
    node.children()
        .filter_map(|child| match child.kind().as_ref() {
            "method_elem" | "method_spec" => {
                let name = child.field("name")?.text().to_string();
                Some(InterfaceElem::Method(MethodSpec {
                    name,
                    sig: lower_signature(&child, imports),
                }))
            }
            "type_elem" | "constraint_elem" | "interface_type_name" => {
                let types: Vec<_> = child
                    .children()
                    .filter(|c| !matches!(c.kind().as_ref(), "|" | "comment"))
                    .collect();
                let embedded = match types.as_slice() {
                    [single] => lower_type(single, imports),
                    _ => TypeExpr::Unsupported(child.kind().to_string()),
                };
                Some(InterfaceElem::Embedded(embedded))
            }
            "struct_elem" => Some(InterfaceElem::Embedded(TypeExpr::Unsupported(
                "struct_elem".to_string(),
            ))),
            _ => None,
        })
        .collect()
}
