//! Per-method record assembly.

use stubby_core::{
    CollectOptions, EmptyResultPolicy, Field, KindResolver, Method, MethodSpec, Param, Return,
    SignatureError,
};

use crate::names::NameTable;
use crate::render::{render_signature, render_type};
use crate::zero::default_values;

/// Build the three parameter projections, naming unnamed parameters.
///
/// # Errors
/// Returns `MalformedSignature` if the list mixes named and unnamed entries.
pub fn build_param(fields: &[Field]) -> Result<Param, SignatureError> {
    ensure_uniform_naming(fields, "parameter")?;

    let mut table = NameTable::new();
    let mut full = Vec::new();
    let mut names = Vec::new();
    let mut types = Vec::new();

    for field in fields {
        let ty = render_type(&field.ty);
        if field.names.is_empty() {
            let name = table.synthesize(&ty);
            full.push(format!("{name} {ty}"));
            names.push(name);
            types.push(ty);
        } else {
            for name in &field.names {
                full.push(format!("{name} {ty}"));
                names.push(name.clone());
                types.push(ty.clone());
            }
        }
    }

    Ok(Param {
        full_fields: full.join(", "),
        names_only: names.join(", "),
        types_only: types.join(", "),
    })
}

/// Build the return clause and its zero values.
///
/// # Errors
/// Returns `MalformedSignature` for an empty list under
/// [`EmptyResultPolicy::Reject`] or for mixed naming, and `UnresolvedType`
/// when a result type cannot be classified.
pub fn build_return(
    fields: &[Field],
    resolver: &dyn KindResolver,
    policy: EmptyResultPolicy,
) -> Result<Return, SignatureError> {
    if fields.is_empty() {
        return match policy {
            EmptyResultPolicy::Empty => Ok(Return::default()),
            EmptyResultPolicy::Reject => Err(SignatureError::MalformedSignature {
                reason: "method declares no results".to_string(),
            }),
        };
    }
    ensure_uniform_naming(fields, "result")?;

    Ok(Return {
        signature_text: render_signature(fields),
        default_values: default_values(fields, resolver)?,
    })
}

/// Build the full record for one interface method.
///
/// # Errors
/// See [`build_param`] and [`build_return`].
pub fn build_method(
    spec: &MethodSpec,
    resolver: &dyn KindResolver,
    options: &CollectOptions,
) -> Result<Method, SignatureError> {
    Ok(Method {
        name: spec.name.clone(),
        param: build_param(&spec.sig.params)?,
        ret: build_return(&spec.sig.results, resolver, options.empty_results)?,
    })
}

fn ensure_uniform_naming(fields: &[Field], what: &str) -> Result<(), SignatureError> {
    let named = fields.iter().filter(|field| !field.names.is_empty()).count();
    if named == 0 || named == fields.len() {
        Ok(())
    } else {
        Err(SignatureError::MalformedSignature {
            reason: format!("{what} list mixes named and unnamed entries"),
        })
    }
}
