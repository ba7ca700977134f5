//! Create a starter config

use std::fs;
use std::path::Path;

use testmapper::config::STARTER_CONFIG;
use testmapper::output::{OperationResult, OutputMode};

use super::{config_file, workspace_dir};

/// Write a commented starter `.testmapper.toml`
pub fn init(
    workspace: Option<&Path>,
    config: Option<&Path>,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let workspace = workspace_dir(workspace, &cwd);
    let path = config_file(&workspace, config, &cwd);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite it.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, STARTER_CONFIG)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
