pub mod ask;
pub mod plan;
pub mod resolve;

use samarth_config::SamarthConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &SamarthConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Ask { question } => ask::handle(question, config, flags),
        Commands::Plan { question } => plan::handle(question, config, flags),
        Commands::Resolve { domain, name } => resolve::handle(*domain, name, config, flags),
    }
}
