use anyhow::Context;
use serde::Serialize;
use stubby_config::StubbyConfig;
use stubby_signature::{Interfaces, collect_interfaces};

use crate::cli::{GlobalFlags, InterfacesArgs};
use crate::commands::shared;
use crate::output::{TableView, output};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct InterfaceSummary {
    name: String,
    methods: usize,
}

/// Handle `stubby interfaces`.
pub fn handle(
    args: &InterfacesArgs,
    config: &StubbyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let loaded = shared::load(&args.file, args.no_package, config)?;
    let options = config.signature.collect_options();
    let interfaces = collect_interfaces(&loaded.package.target, &loaded.resolver, &options)
        .with_context(|| format!("failed to collect interfaces from {}", args.file.display()))?;

    let summaries = summarize(&interfaces);
    let table = TableView {
        headers: &["interface", "methods"],
        rows: summaries
            .iter()
            .map(|summary| vec![summary.name.clone(), summary.methods.to_string()])
            .collect(),
    };
    output(&summaries, &table, flags.format)
}

fn summarize(interfaces: &Interfaces) -> Vec<InterfaceSummary> {
    interfaces
        .values()
        .map(|interface| InterfaceSummary {
            name: interface.name.clone(),
            methods: interface.methods.len(),
        })
        .collect()
}
