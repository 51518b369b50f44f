use anyhow::{Context, Result};
use lens_discovery::ProjectLayout;
use std::path::{Path, PathBuf};

const ROOT_VARS: &[&str] = &["LENS_ROOT", "LENS_PROJECT_ROOT"];
const MANIFEST_VAR: &str = "LENS_MANIFEST";
const DEPS_DIR_VAR: &str = "LENS_DEPS_DIR";
const APP_VAR: &str = "LENS_APP";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub layout: ProjectLayout,
    /// Pinned application scope for resource queries. `None` lets every query use
    /// the project manifest's current `app`, else the directory name.
    pub scope: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Self::from_vars(|key| std::env::var(key).ok(), &cwd)
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>, cwd: &Path) -> Result<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let root = ROOT_VARS
            .iter()
            .find_map(|key| non_empty(*key))
            .map(PathBuf::from)
            .unwrap_or_else(|| cwd.to_path_buf());
        let root = cwd.join(root);
        let root = root
            .canonicalize()
            .with_context(|| format!("invalid project root {}", root.display()))?;

        let mut layout = ProjectLayout::new(root);
        if let Some(manifest) = non_empty(MANIFEST_VAR) {
            layout = layout.with_manifest_path(manifest);
        }
        if let Some(deps_dir) = non_empty(DEPS_DIR_VAR) {
            layout = layout.with_deps_dir(deps_dir);
        }

        Ok(Self {
            layout,
            scope: non_empty(APP_VAR),
        })
    }
}
