use garden_config::GardenConfig;
use garden_impact::{generate_report, successful};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::analyzer;
use crate::output::output;

/// Handle `garden report`.
pub fn handle(args: &ReportArgs, config: &GardenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcomes = analyzer::run_batch(&args.input, config)?;
    let report = generate_report(&successful(&outcomes));

    if args.text {
        print!("{}", report.render_text());
        return Ok(());
    }
    output(&report, flags.format)
}
