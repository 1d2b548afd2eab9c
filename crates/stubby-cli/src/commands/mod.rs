use stubby_config::StubbyConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod collect;
pub mod interfaces;
pub mod shared;

/// Run a parsed command.
pub fn dispatch(
    command: &Commands,
    config: &StubbyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Collect(args) => collect::handle(args, config, flags),
        Commands::Interfaces(args) => interfaces::handle(args, config, flags),
    }
}
