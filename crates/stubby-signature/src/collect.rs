//! Interface collection over a parsed file.
//!
//! Walks the top-level declarations in order and turns every non-generic
//! interface type into an [`Interface`] record. Records are keyed by name; a
//! later declaration with the same name replaces an earlier one.

use std::collections::{BTreeMap, HashMap};

use stubby_core::{
    CollectError, CollectOptions, Decl, Interface, InterfaceElem, KindResolver, MethodSpec,
    SourceFile, TypeExpr,
};

use crate::method::build_method;
use crate::render::render_type;

/// Interfaces of a file keyed by name.
pub type Interfaces = BTreeMap<String, Interface>;

/// Builds method records for every interface of a file.
pub struct InterfaceCollector<'r> {
    resolver: &'r dyn KindResolver,
    options: CollectOptions,
}

impl<'r> InterfaceCollector<'r> {
    #[must_use]
    pub fn new(resolver: &'r dyn KindResolver, options: CollectOptions) -> Self {
        Self { resolver, options }
    }

    /// Collect all interfaces of `file`.
    ///
    /// # Errors
    /// Returns the first method failure, tagged with its interface and method.
    pub fn collect(&self, file: &SourceFile) -> Result<Interfaces, CollectError> {
        let scope = EmbedScope::new(file);
        let mut interfaces = Interfaces::new();

        for decl in &file.decls {
            let Decl::Type(spec) = decl else {
                continue;
            };
            let TypeExpr::Interface(elems) = &spec.ty else {
                continue;
            };
            if spec.generic {
                tracing::warn!(interface = %spec.name, "skipping generic interface");
                continue;
            }

            let interface = self.collect_interface(&spec.name, elems, &scope)?;
            tracing::debug!(
                interface = %interface.name,
                methods = interface.methods.len(),
                "collected interface"
            );
            interfaces.insert(spec.name.clone(), interface);
        }

        Ok(interfaces)
    }

    fn collect_interface(
        &self,
        name: &str,
        elems: &[InterfaceElem],
        scope: &EmbedScope<'_>,
    ) -> Result<Interface, CollectError> {
        let mut specs = Vec::new();
        let mut visiting = vec![name];
        self.method_specs(elems, scope, &mut visiting, &mut specs);

        let methods = specs
            .into_iter()
            .map(|spec| {
                build_method(spec, self.resolver, &self.options).map_err(|source| CollectError {
                    interface: name.to_string(),
                    method: spec.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Interface {
            name: name.to_string(),
            methods,
        })
    }

    /// Gather method specs in declaration order, inlining embedded local
    /// interfaces when enabled. The first spec seen for a name wins.
    fn method_specs<'f>(
        &self,
        elems: &'f [InterfaceElem],
        scope: &EmbedScope<'f>,
        visiting: &mut Vec<&'f str>,
        out: &mut Vec<&'f MethodSpec>,
    ) {
        for elem in elems {
            match elem {
                InterfaceElem::Method(spec) => {
                    if !out.iter().any(|seen| seen.name == spec.name) {
                        out.push(spec);
                    }
                }
                InterfaceElem::Embedded(ty) => {
                    if !self.options.expand_embedded {
                        continue;
                    }
                    let Some((embedded, inner)) = scope.lookup(ty) else {
                        tracing::debug!(
                            embedded = %render_type(ty),
                            "cannot expand embedded element"
                        );
                        continue;
                    };
                    if visiting.contains(&embedded) {
                        tracing::debug!(embedded, "embedding cycle, skipping");
                        continue;
                    }
                    visiting.push(embedded);
                    self.method_specs(inner, scope, visiting, out);
                    visiting.pop();
                }
            }
        }
    }
}

/// Collect all interfaces of `file` with the given resolver and options.
///
/// # Errors
/// See [`InterfaceCollector::collect`].
pub fn collect_interfaces(
    file: &SourceFile,
    resolver: &dyn KindResolver,
    options: &CollectOptions,
) -> Result<Interfaces, CollectError> {
    InterfaceCollector::new(resolver, *options).collect(file)
}

/// Interfaces declared in the file, for expanding embedded elements.
struct EmbedScope<'f> {
    interfaces: HashMap<&'f str, &'f [InterfaceElem]>,
}

impl<'f> EmbedScope<'f> {
    fn new(file: &'f SourceFile) -> Self {
        let interfaces = file
            .type_specs()
            .filter(|spec| !spec.generic)
            .filter_map(|spec| match &spec.ty {
                TypeExpr::Interface(elems) => Some((spec.name.as_str(), elems.as_slice())),
                _ => None,
            })
            .collect();
        Self { interfaces }
    }

    fn lookup(&self, ty: &TypeExpr) -> Option<(&'f str, &'f [InterfaceElem])> {
        let TypeExpr::Ident(ident) = ty else {
            return None;
        };
        self.interfaces
            .get_key_value(ident.name.as_str())
            .map(|(name, elems)| (*name, *elems))
    }
}

#[cfg(test)]
mod tests;
