use std::path::{Path, PathBuf};
use valet_index::Database;

use crate::config::{CONFIG_FILE_NAME, Config, DB_FILE_NAME};
use crate::workflow::TicketWorkflow;
use crate::Result;

/// Outcome of [`Workspace::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
}

/// A data directory holding the record database and its config file.
///
/// Owns the single open store for the life of the process; front ends borrow
/// a [`TicketWorkflow`] from it.
pub struct Workspace {
    data_dir: PathBuf,
    db: Database,
    config: Config,
}

impl Workspace {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let db = Database::open(&data_dir.join(DB_FILE_NAME))?;
        let config = Config::load_from(&data_dir.join(CONFIG_FILE_NAME))?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            db,
            config,
        })
    }

    /// Create the data directory, database and a default config file if missing.
    pub fn init(data_dir: &Path) -> Result<InitReport> {
        std::fs::create_dir_all(data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let config_created = !config_path.exists();
        if config_created {
            Config::default().save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "default config written");
        }

        let workspace = Self::open(data_dir)?;
        let report = InitReport {
            data_dir: workspace.data_dir.clone(),
            db_path: workspace.db_path(),
            config_path,
            config_created,
        };
        workspace.close()?;

        Ok(report)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn workflow(&self) -> TicketWorkflow<'_> {
        TicketWorkflow::new(&self.db)
    }

    pub fn record_count(&self) -> Result<usize> {
        Ok(self.db.count()?)
    }

    pub fn close(self) -> Result<()> {
        Ok(self.db.close()?)
    }
}
