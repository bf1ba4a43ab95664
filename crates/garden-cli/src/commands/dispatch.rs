use garden_config::GardenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, config, flags),
        Commands::Batch(args) => commands::batch::handle(&args, config, flags),
        Commands::Rank(args) => commands::rank::handle(&args, config, flags),
        Commands::Report(args) => commands::report::handle(&args, config, flags),
        Commands::Criteria(args) => commands::criteria::handle(&args, config, flags),
    }
}
