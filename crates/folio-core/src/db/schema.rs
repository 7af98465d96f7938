//! SQLite database schema for folio

use rusqlite::Connection;

use crate::error::{FolioError, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
-- Platform users
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created TEXT NOT NULL
);

-- Posts
CREATE TABLE IF NOT EXISTS posts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    slug TEXT NOT NULL,
    author_id TEXT NOT NULL REFERENCES users(id),
    views INTEGER NOT NULL DEFAULT 0,
    created TEXT NOT NULL,
    updated TEXT
);
CREATE INDEX IF NOT EXISTS idx_posts_views ON posts(views);
CREATE INDEX IF NOT EXISTS idx_posts_author ON posts(author_id);

-- Full-text search index with FTS5
CREATE VIRTUAL TABLE IF NOT EXISTS posts_fts USING fts5(
    title,
    content,
    tags,
    tokenize='porter unicode61'
);

-- Tags, keyed by position to preserve insertion order and duplicates
CREATE TABLE IF NOT EXISTS tags (
    post_id TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    tag TEXT NOT NULL,
    PRIMARY KEY (post_id, position)
);
CREATE INDEX IF NOT EXISTS idx_tags_tag ON tags(tag);

-- Likes (one per user per post)
CREATE TABLE IF NOT EXISTS likes (
    post_id TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    user_id TEXT NOT NULL,
    created TEXT NOT NULL,
    PRIMARY KEY (post_id, user_id)
);

-- Comments
CREATE TABLE IF NOT EXISTS comments (
    id TEXT PRIMARY KEY,
    post_id TEXT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    author_id TEXT NOT NULL,
    body TEXT NOT NULL,
    flagged INTEGER NOT NULL DEFAULT 0,
    created TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_comments_post ON comments(post_id);

-- Follow edges
CREATE TABLE IF NOT EXISTS follows (
    follower_id TEXT NOT NULL,
    followee_id TEXT NOT NULL,
    created TEXT NOT NULL,
    PRIMARY KEY (follower_id, followee_id)
);
CREATE INDEX IF NOT EXISTS idx_follows_followee ON follows(followee_id);

-- Store metadata
CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Create or validate the schema.
///
/// The database is the primary copy of all platform data, so a version
/// mismatch is an error rather than a drop-and-rebuild.
pub fn create_schema(conn: &Connection) -> Result<()> {
    let current_version: Option<i32> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .ok();

    match current_version {
        None => {
            conn.execute_batch(SCHEMA_SQL)
                .map_err(|e| FolioError::Other(format!("failed to create schema: {}", e)))?;
            conn.execute(
                "INSERT INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )
            .map_err(|e| FolioError::Other(format!("failed to record schema version: {}", e)))?;
            Ok(())
        }
        Some(v) if v == CURRENT_SCHEMA_VERSION => Ok(()),
        Some(v) => Err(FolioError::InvalidStore {
            reason: format!(
                "store format version {} is not supported (expected {})",
                v, CURRENT_SCHEMA_VERSION
            ),
        }),
    }
}
