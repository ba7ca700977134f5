//! Command implementations

mod init;
mod lookup;
mod open;

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use testmapper::config::ProjectConfig;
use testmapper::core::models::MappingRule;
use testmapper::core::path::PathStyle;
use testmapper::core::services::PathResolver;
use testmapper::paths;

pub use init::init;
pub use lookup::{rules, source, tests};
pub use open::open;

/// Everything a lookup command needs: the resolver and where relative
/// arguments resolve from
#[derive(Debug)]
pub struct Session {
    pub resolver: PathResolver,
    cwd: PathBuf,
}

impl Session {
    /// Load the config for `workspace` (or the current directory), append
    /// `extra`, and build a resolver over the result
    pub fn load(
        workspace: Option<&Path>,
        config: Option<&Path>,
        extra: Option<MappingRule>,
    ) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let workspace = workspace_dir(workspace, &cwd);
        let config_path = config_file(&workspace, config, &cwd);

        let mut project = ProjectConfig::load(&config_path)
            .with_context(|| format!("loading {}", config_path.display()))?;
        if let Some(rule) = extra {
            debug!("extra rule from the command line: {rule}");
            project = project.with_rule(rule);
        }

        let style = PathStyle::native();
        project.validate(style)?;
        if project.mapping.is_empty() {
            warn!("no mapping rules configured; run 'testmapper init' or pass --src-root/--test-root");
        }

        let root = project.project_root(&paths::display(&workspace), style);
        Ok(Self {
            resolver: PathResolver::new(style, &root, project.mapping),
            cwd,
        })
    }

    /// Absolute form of a file argument, resolved against the working directory
    pub fn file_arg(&self, file: &Path) -> String {
        let absolute = paths::display(&paths::absolute(file, &self.cwd));
        self.resolver.absolutize(&absolute)
    }
}

fn workspace_dir(workspace: Option<&Path>, cwd: &Path) -> PathBuf {
    workspace.map_or_else(|| cwd.to_path_buf(), |dir| paths::absolute(dir, cwd))
}

fn config_file(workspace: &Path, config: Option<&Path>, cwd: &Path) -> PathBuf {
    config.map_or_else(|| paths::project_config(workspace), |file| paths::absolute(file, cwd))
}
