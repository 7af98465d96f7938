//! Store management for folio
//!
//! The store is the root directory containing all folio data.
//! Default location: `.folio/` (hidden, git-trackable)

pub mod paths;
mod posts;
mod users;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::db::Database;
use crate::error::{FolioError, Result};
use paths::{CONFIG_FILE, DEFAULT_STORE_DIR};

/// The folio store
#[derive(Debug)]
pub struct Store {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    /// SQLite database
    db: Database,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(FolioError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            // Sensible defaults when the config file is missing
            StoreConfig::default()
        };

        let db = Database::open(path)?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            db,
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        let store_path = project_root.join(DEFAULT_STORE_DIR);
        Self::init_at(&store_path)
    }

    /// Initialize a store at an explicit store root path
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            let config = StoreConfig::default();
            config.save(&config_path)?;
            config
        };

        let db = Database::open(store_root)?;

        Ok(Store {
            root: store_root.to_path_buf(),
            config,
            db,
        })
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Get the database file path
    pub fn db_path(&self) -> PathBuf {
        self.root.join(crate::db::DB_FILE)
    }

    /// Get the config
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the database
    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests;
