use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print stub signature records for every interface of a Go file.
    Collect(CollectArgs),
    /// List the interfaces of a Go file with their method counts.
    Interfaces(InterfacesArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CollectArgs {
    /// Go source file to read.
    pub file: PathBuf,

    /// Only print these interfaces (repeatable).
    #[arg(short, long = "interface", value_name = "NAME")]
    pub interfaces: Vec<String>,

    /// Fail on methods that declare no results.
    #[arg(long)]
    pub strict: bool,

    /// Inline methods of embedded interfaces declared in the same file.
    #[arg(long)]
    pub expand_embedded: bool,

    /// Do not load the other files of the package.
    #[arg(long)]
    pub no_package: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InterfacesArgs {
    /// Go source file to read.
    pub file: PathBuf,

    /// Do not load the other files of the package.
    #[arg(long)]
    pub no_package: bool,
}
