use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use valet_runtime::Workspace;

pub struct ExecutionContext {
    data_dir: PathBuf,
    workspace: OnceCell<Workspace>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            workspace: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn workspace(&self) -> Result<&Workspace> {
        let workspace = self
            .workspace
            .get_or_try_init(|| Workspace::open(&self.data_dir))?;
        Ok(workspace)
    }

    /// Close the store if a command opened it.
    pub fn close(self) -> Result<()> {
        if let Some(workspace) = self.workspace.into_inner() {
            workspace.close()?;
        }
        Ok(())
    }
}
