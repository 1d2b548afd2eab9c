use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CollectArgs, Commands, InterfacesArgs};

/// Top-level CLI parser for the `stubby` binary.
#[derive(Debug, Parser)]
#[command(
    name = "stubby",
    version,
    about = "Method stub signatures for Go interfaces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "stubby",
            "--format",
            "table",
            "--verbose",
            "collect",
            "store.go",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Collect(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stubby", "interfaces", "store.go", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Interfaces(_)));
    }

    #[test]
    fn collect_arguments() {
        let cli = Cli::try_parse_from([
            "stubby",
            "collect",
            "pkg/store.go",
            "--interface",
            "Cache",
            "-i",
            "Runner",
            "--strict",
            "--expand-embedded",
            "--no-package",
        ])
        .expect("cli should parse");

        let Commands::Collect(args) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.file, Path::new("pkg/store.go"));
        assert_eq!(args.interfaces, ["Cache", "Runner"]);
        assert!(args.strict);
        assert!(args.expand_embedded);
        assert!(args.no_package);
    }

    #[test]
    fn collect_defaults() {
        let cli = Cli::try_parse_from(["stubby", "collect", "store.go"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);

        let Commands::Collect(args) = cli.command else {
            panic!("expected collect");
        };
        assert!(args.interfaces.is_empty());
        assert!(!args.strict);
        assert!(!args.expand_embedded);
        assert!(!args.no_package);
    }

    #[test]
    fn file_argument_is_required() {
        assert!(Cli::try_parse_from(["stubby", "collect"]).is_err());
        assert!(Cli::try_parse_from(["stubby", "interfaces"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stubby", "--format", "xml", "collect", "store.go"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["stubby", "--format", value, "collect", "store.go"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Collect(_)));
        }
    }
}
