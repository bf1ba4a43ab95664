use std::path::Path;

use anyhow::Context;
use garden_config::GardenConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<GardenConfig> {
    load_project_dotenv()?;

    let config = GardenConfig::load(flags.config.as_deref()).with_context(|| {
        flags.config.as_deref().map_or_else(
            || String::from("failed to load garden configuration"),
            |path| format!("failed to load garden configuration with {}", path.display()),
        )
    })?;

    tracing::debug!(
        cache = config.cache.enabled,
        delay_ms = config.batch.delay_ms,
        "config loaded"
    );
    Ok(config)
}

fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv_in(&cwd)
}

/// Load `<dir>/.env` when present, otherwise fall back to dotenvy's upward
/// search.
fn load_dotenv_in(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
