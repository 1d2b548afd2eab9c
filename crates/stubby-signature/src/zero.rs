//! Zero-value expressions for result slots.
//!
//! The zero value of a named type depends on its underlying kind, which only
//! the resolver knows: `type Celsius float64` is `0`, `type Handle struct{}`
//! is `nil` (stubs return pointers/interfaces for those in practice).

use stubby_core::{
    Field, Ident, KindResolver, PrimitiveKind, SignatureError, TypeExpr, UnderlyingKind,
};

use crate::render::{ABSENT, slots};

/// Zero-value expression for a type.
///
/// # Errors
/// Returns `SignatureError::UnresolvedType` when the resolver cannot classify
/// a named type.
pub fn zero_value(ty: &TypeExpr, resolver: &dyn KindResolver) -> Result<String, SignatureError> {
    match ty {
        TypeExpr::Pointer(_)
        | TypeExpr::Slice(_)
        | TypeExpr::Array { .. }
        | TypeExpr::Map { .. }
        | TypeExpr::Func(_)
        | TypeExpr::Chan { .. }
        | TypeExpr::Struct(_)
        | TypeExpr::Interface(_)
        | TypeExpr::Variadic(_)
        | TypeExpr::Unsupported(_) => Ok(ABSENT.to_string()),
        // The qualifier says nothing about the zero value; the member does.
        TypeExpr::Qualified { name, .. } => ident_zero_value(name, resolver),
        TypeExpr::Ident(ident) => ident_zero_value(ident, resolver),
    }
}

/// Comma-joined zero values, one per result slot.
///
/// # Errors
/// Propagates the first `UnresolvedType` failure.
pub fn default_values(
    fields: &[Field],
    resolver: &dyn KindResolver,
) -> Result<String, SignatureError> {
    let values = slots(fields)
        .map(|(_, ty)| zero_value(ty, resolver))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values.join(", "))
}

/// Literal zero value for an underlying kind.
#[must_use]
pub const fn zero_literal(kind: UnderlyingKind) -> &'static str {
    match kind {
        UnderlyingKind::Primitive(PrimitiveKind::Bool) => "false",
        UnderlyingKind::Primitive(PrimitiveKind::String) => "\"\"",
        UnderlyingKind::Primitive(_) => "0",
        UnderlyingKind::Other => ABSENT,
    }
}

fn ident_zero_value(ident: &Ident, resolver: &dyn KindResolver) -> Result<String, SignatureError> {
    let kind = resolver
        .resolved_underlying_kind(ident)
        .ok_or_else(|| SignatureError::UnresolvedType {
            ident: ident.qualified_name(),
        })?;
    Ok(zero_literal(kind).to_string())
}
