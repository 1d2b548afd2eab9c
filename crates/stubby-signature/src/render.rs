//! Canonical text for type expressions and field lists.

use stubby_core::{ChanDir, Field, InterfaceElem, TypeExpr};

/// Text used for shapes with no rendering, and the zero value of every
/// reference-like type.
pub const ABSENT: &str = "nil";

/// Render a type expression.
///
/// Arrays render like slices (`[]T`). Shapes without a rendering fall back to
/// [`ABSENT`] and are logged.
#[must_use]
pub fn render_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Ident(ident) => ident.name.clone(),
        TypeExpr::Qualified { qualifier, name } => format!("{qualifier}.{}", name.name),
        TypeExpr::Pointer(elem) => format!("*{}", render_type(elem)),
        TypeExpr::Slice(elem) | TypeExpr::Array { elem, .. } => {
            format!("[]{}", render_type(elem))
        }
        TypeExpr::Map { key, value } => {
            format!("map[{}]{}", render_type(key), render_type(value))
        }
        TypeExpr::Func(func) => {
            let params = render_types_only(&func.params);
            let results = render_signature(&func.results);
            if results.is_empty() {
                format!("func({params})")
            } else {
                format!("func({params}) {results}")
            }
        }
        TypeExpr::Chan { dir, elem } => {
            let prefix = match dir {
                ChanDir::Both => "chan ",
                ChanDir::Recv => "<-chan ",
                ChanDir::Send => "chan<- ",
            };
            format!("{prefix}{}", render_type(elem))
        }
        TypeExpr::Struct(fields) => render_struct(fields),
        TypeExpr::Interface(elems) => render_interface(elems),
        TypeExpr::Variadic(elem) => format!("...{}", render_type(elem)),
        TypeExpr::Unsupported(kind) => {
            tracing::warn!(kind = %kind, "no rendering for type shape, using nil");
            ABSENT.to_string()
        }
    }
}

/// Iterate over the slots of a field list: one `(name, type)` pair per
/// declared name, or `(None, type)` for an unnamed entry.
pub(crate) fn slots(fields: &[Field]) -> impl Iterator<Item = (Option<&str>, &TypeExpr)> {
    fields.iter().flat_map(|field| {
        let names: Vec<Option<&str>> = if field.names.is_empty() {
            vec![None]
        } else {
            field.names.iter().map(|name| Some(name.as_str())).collect()
        };
        names.into_iter().map(move |name| (name, &field.ty))
    })
}

/// Comma-joined types of every slot, names dropped.
#[must_use]
pub fn render_types_only(fields: &[Field]) -> String {
    slots(fields)
        .map(|(_, ty)| render_type(ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a result list as a Go return clause.
///
/// More than one slot is parenthesized, as is a single named result, since
/// `n int` is not a valid bare return clause. An empty list renders as `""`.
#[must_use]
pub fn render_signature(fields: &[Field]) -> String {
    let parts: Vec<String> = slots(fields)
        .map(|(name, ty)| match name {
            Some(name) => format!("{name} {}", render_type(ty)),
            None => render_type(ty),
        })
        .collect();
    let named = fields.iter().any(|field| !field.names.is_empty());

    match parts.as_slice() {
        [] => String::new(),
        [single] if !named => single.clone(),
        _ => format!("({})", parts.join(", ")),
    }
}

fn render_struct(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "struct{}".to_string();
    }
    let body = fields
        .iter()
        .map(|field| {
            if field.names.is_empty() {
                render_type(&field.ty)
            } else {
                format!("{} {}", field.names.join(", "), render_type(&field.ty))
            }
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("struct{{ {body} }}")
}

fn render_interface(elems: &[InterfaceElem]) -> String {
    if elems.is_empty() {
        return "interface{}".to_string();
    }
    let body = elems
        .iter()
        .map(|elem| match elem {
            InterfaceElem::Method(method) => {
                let params = render_types_only(&method.sig.params);
                let results = render_signature(&method.sig.results);
                if results.is_empty() {
                    format!("{}({params})", method.name)
                } else {
                    format!("{}({params}) {results}", method.name)
                }
            }
            InterfaceElem::Embedded(ty) => render_type(ty),
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("interface{{ {body} }}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stubby_core::{FuncType, MethodSpec};

    use super::*;

    fn int() -> TypeExpr {
        TypeExpr::name("int")
    }

    #[test]
    fn pointer_to_slice_of_map() {
        let ty = TypeExpr::pointer(TypeExpr::slice(TypeExpr::map(
            TypeExpr::name("string"),
            int(),
        )));
        assert_eq!(render_type(&ty), "*[]map[string]int");
    }

    #[test]
    fn qualified_uses_source_qualifier() {
        let ty = TypeExpr::Qualified {
            qualifier: "ctxpkg".to_string(),
            name: stubby_core::Ident::in_package("context", "Context"),
        };
        assert_eq!(render_type(&ty), "ctxpkg.Context");
    }

    #[test]
    fn array_renders_like_slice() {
        let ty = TypeExpr::Array {
            len: "4".to_string(),
            elem: Box::new(TypeExpr::name("byte")),
        };
        assert_eq!(render_type(&ty), "[]byte");
    }

    #[test]
    fn channel_directions() {
        let elem = TypeExpr::name("error");
        assert_eq!(
            render_type(&TypeExpr::chan(ChanDir::Both, elem.clone())),
            "chan error"
        );
        assert_eq!(
            render_type(&TypeExpr::chan(ChanDir::Recv, elem.clone())),
            "<-chan error"
        );
        assert_eq!(
            render_type(&TypeExpr::chan(ChanDir::Send, elem)),
            "chan<- error"
        );
    }

    #[test]
    fn function_type_with_results() {
        let ty = TypeExpr::Func(FuncType {
            params: vec![
                Field::unnamed(TypeExpr::qualified("context", "Context")),
                Field {
                    names: vec!["a".to_string(), "b".to_string()],
                    ty: int(),
                },
            ],
            results: vec![
                Field::unnamed(int()),
                Field::unnamed(TypeExpr::name("error")),
            ],
        });
        assert_eq!(
            render_type(&ty),
            "func(context.Context, int, int) (int, error)"
        );
    }

    #[test]
    fn function_type_without_results_has_no_trailing_space() {
        let ty = TypeExpr::Func(FuncType {
            params: vec![Field::unnamed(TypeExpr::name("string"))],
            results: Vec::new(),
        });
        assert_eq!(render_type(&ty), "func(string)");
    }

    #[test]
    fn empty_struct_and_interface_literals() {
        assert_eq!(render_type(&TypeExpr::Struct(Vec::new())), "struct{}");
        assert_eq!(render_type(&TypeExpr::Interface(Vec::new())), "interface{}");
    }

    #[test]
    fn non_empty_anonymous_struct_and_interface() {
        let strukt = TypeExpr::Struct(vec![
            Field {
                names: vec!["X".to_string(), "Y".to_string()],
                ty: int(),
            },
            Field::unnamed(TypeExpr::qualified("sync", "Mutex")),
        ]);
        assert_eq!(render_type(&strukt), "struct{ X, Y int; sync.Mutex }");

        let iface = TypeExpr::Interface(vec![
            InterfaceElem::Method(MethodSpec {
                name: "Close".to_string(),
                sig: FuncType {
                    params: Vec::new(),
                    results: vec![Field::unnamed(TypeExpr::name("error"))],
                },
            }),
            InterfaceElem::Embedded(TypeExpr::qualified("io", "Reader")),
        ]);
        assert_eq!(render_type(&iface), "interface{ Close() error; io.Reader }");
    }

    #[test]
    fn variadic_and_unsupported() {
        assert_eq!(
            render_type(&TypeExpr::Variadic(Box::new(TypeExpr::name("string")))),
            "...string"
        );
        assert_eq!(
            render_type(&TypeExpr::Unsupported("generic_type".to_string())),
            "nil"
        );
    }

    #[test]
    fn signature_bare_for_single_unnamed_result() {
        assert_eq!(
            render_signature(&[Field::unnamed(TypeExpr::name("error"))]),
            "error"
        );
    }

    #[test]
    fn signature_parenthesized_for_multiple_results() {
        let fields = [
            Field::unnamed(int()),
            Field::unnamed(TypeExpr::name("error")),
        ];
        assert_eq!(render_signature(&fields), "(int, error)");
    }

    #[test]
    fn signature_keeps_result_names() {
        let fields = [
            Field::named("n", int()),
            Field::named("err", TypeExpr::name("error")),
        ];
        assert_eq!(render_signature(&fields), "(n int, err error)");
        assert_eq!(render_signature(&[Field::named("n", int())]), "(n int)");
    }

    #[test]
    fn signature_empty_for_no_results() {
        assert_eq!(render_signature(&[]), "");
    }
}
