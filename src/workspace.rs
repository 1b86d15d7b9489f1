//! Workspace resolution for notice.
//!
//! A workspace is a `.notice/` directory holding the config, the template
//! store, the outbox, and the audit log. Commands find it by walking up from
//! the current directory, the same way tools locate a `.git` directory.
//! `NOTICE_DIR` points at a workspace directly and skips the search.

use crate::config::Config;
use crate::error::{NoticeError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Workspace directory name.
pub const WORKSPACE_DIR: &str = ".notice";

/// Environment variable overriding workspace discovery.
pub const WORKSPACE_ENV: &str = "NOTICE_DIR";

/// Resolved workspace paths. All paths are absolute when resolved from an
/// absolute directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The `.notice/` directory itself.
    pub root: PathBuf,
}

impl Workspace {
    /// Workspace rooted at an explicit directory.
    pub fn at<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the workspace from the environment and current directory.
    ///
    /// If no workspace exists yet, the result points at `.notice/` in the
    /// current directory, which is where `notice init` creates one.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            NoticeError::IoError(format!("failed to get current working directory: {}", e))
        })?;

        let override_dir = env::var_os(WORKSPACE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self::locate(&cwd, override_dir))
    }

    /// Resolve from a specific directory, with an optional explicit root.
    pub fn locate(cwd: &Path, override_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir {
            return Self::at(if dir.is_absolute() { dir } else { cwd.join(dir) });
        }

        cwd.ancestors()
            .map(|dir| dir.join(WORKSPACE_DIR))
            .find(|candidate| candidate.is_dir())
            .map(Self::at)
            .unwrap_or_else(|| Self::at(cwd.join(WORKSPACE_DIR)))
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_dir()
    }

    /// Fail with a pointer to `notice init` if the workspace is missing.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.is_initialized() {
            return Err(NoticeError::UserError(format!(
                "notice workspace not initialized.\n\
                 Expected workspace at: {}\n\n\
                 Run `notice init` to create one in the current directory.",
                self.root.display()
            )));
        }
        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn templates_path(&self) -> PathBuf {
        self.root.join("templates.yaml")
    }

    pub fn events_dir(&self) -> PathBuf {
        self.root.join("events")
    }

    /// Outbox directory as configured.
    pub fn outbox_dir(&self, config: &Config) -> PathBuf {
        self.root.join(&config.outbox_dir)
    }

    /// Load the workspace config, using defaults when the file is absent.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(self.config_path())
    }
}

/// Resolve the workspace and require that it exists.
///
/// Every command except `init` and `render` goes through this.
pub fn require_initialized_workspace() -> Result<Workspace> {
    let workspace = Workspace::resolve()?;
    workspace.ensure_initialized()?;
    Ok(workspace)
}
