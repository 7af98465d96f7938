//! SQLite database module for folio

mod comments;
mod posts;
mod schema;
mod search;
mod users;

use std::path::Path;

use rusqlite::Connection;

use crate::error::{FolioError, Result};

pub use schema::create_schema;

/// Name of the database file inside the store root
pub const DB_FILE: &str = "folio.db";

/// SQLite database for folio
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given store root
    pub fn open(store_root: &Path) -> Result<Self> {
        let db_path = store_root.join(DB_FILE);

        let conn = Connection::open(&db_path).map_err(|e| {
            FolioError::Other(format!(
                "failed to open database at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| FolioError::Other(format!("failed to enable WAL mode: {}", e)))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| FolioError::Other(format!("failed to enable foreign keys: {}", e)))?;

        create_schema(&conn)?;

        Ok(Database { conn })
    }

    pub fn get_post_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM posts", [], |r| r.get(0))
            .map_err(|e| FolioError::Other(format!("failed to get post count: {}", e)))
    }

    pub fn get_user_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
            .map_err(|e| FolioError::Other(format!("failed to get user count: {}", e)))
    }

    pub fn get_comment_count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM comments", [], |r| r.get(0))
            .map_err(|e| FolioError::Other(format!("failed to get comment count: {}", e)))
    }

    pub fn get_schema_version(&self) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| FolioError::Other(format!("failed to get schema version: {}", e)))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Checkpoint WAL changes before closing so that rapid open/close
        // sequences in tests observe committed data
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}

#[cfg(test)]
mod tests;
