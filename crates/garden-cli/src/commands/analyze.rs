use garden_config::GardenConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::{analyzer, input};
use crate::output::output;

/// Handle `garden analyze`.
pub fn handle(args: &AnalyzeArgs, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = input::read_single(&args.input.input)?;
    let analyzer = analyzer::build(config)?;
    let result = analyzer.analyze_content(&item, analyzer::options(&args.input))?;
    output(&result, flags.format)
}
