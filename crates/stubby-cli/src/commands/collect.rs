use anyhow::{Context, bail};
use stubby_config::StubbyConfig;
use stubby_core::{CollectOptions, EmptyResultPolicy};
use stubby_signature::{Interfaces, collect_interfaces};

use crate::cli::{CollectArgs, GlobalFlags};
use crate::commands::shared;
use crate::output::{TableView, output};

const HEADERS: &[&str] = &["interface", "method", "params", "returns", "defaults"];

/// Handle `stubby collect`.
pub fn handle(
    args: &CollectArgs,
    config: &StubbyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let loaded = shared::load(&args.file, args.no_package, config)?;
    let options = collect_options(args, config);

    let interfaces = collect_interfaces(&loaded.package.target, &loaded.resolver, &options)
        .with_context(|| format!("failed to collect interfaces from {}", args.file.display()))?;
    let interfaces = select(interfaces, &args.interfaces)?;

    output(&interfaces, &table_view(&interfaces), flags.format)
}

fn collect_options(args: &CollectArgs, config: &StubbyConfig) -> CollectOptions {
    let mut options = config.signature.collect_options();
    if args.strict {
        options.empty_results = EmptyResultPolicy::Reject;
    }
    if args.expand_embedded {
        options.expand_embedded = true;
    }
    options
}

/// Keep only the requested interfaces; an empty request keeps all.
fn select(mut interfaces: Interfaces, names: &[String]) -> anyhow::Result<Interfaces> {
    if names.is_empty() {
        return Ok(interfaces);
    }
    if let Some(missing) = names.iter().find(|name| !interfaces.contains_key(*name)) {
        bail!("interface '{missing}' not found");
    }
    interfaces.retain(|name, _| names.contains(name));
    Ok(interfaces)
}

fn table_view(interfaces: &Interfaces) -> TableView {
    let rows = interfaces
        .values()
        .flat_map(|interface| {
            interface.methods.iter().map(|method| {
                vec![
                    interface.name.clone(),
                    method.name.clone(),
                    method.param.full_fields.clone(),
                    method.ret.signature_text.clone(),
                    method.ret.default_values.clone(),
                ]
            })
        })
        .collect();
    TableView {
        headers: HEADERS,
        rows,
    }
}
