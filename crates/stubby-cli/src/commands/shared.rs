use std::path::Path;

use anyhow::Context;
use stubby_config::StubbyConfig;
use stubby_parser::{LoadOptions, Package, PackageResolver, load_package};

/// A loaded target file with a resolver over its package.
pub struct LoadedPackage {
    pub package: Package,
    pub resolver: PackageResolver,
}

/// Load `file` and its package according to configuration.
pub fn load(file: &Path, no_package: bool, config: &StubbyConfig) -> anyhow::Result<LoadedPackage> {
    let options = load_options(no_package, config);
    let package = load_package(file, &options)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let external = config
        .resolver
        .external_kinds()
        .context("invalid [resolver.external] table")?;

    let resolver = PackageResolver::for_package(&package).with_external(external);
    tracing::debug!(
        package = %package.name(),
        files = package.files().count(),
        "loaded package"
    );
    Ok(LoadedPackage { package, resolver })
}

pub const fn load_options(no_package: bool, config: &StubbyConfig) -> LoadOptions {
    LoadOptions {
        siblings: config.resolver.load_package && !no_package,
        include_tests: config.resolver.include_tests,
    }
}
