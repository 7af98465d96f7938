//! Post CRUD queries

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{FolioError, Result};
use crate::post::Post;

pub(super) const POST_COLUMNS: &str =
    "id, title, content, slug, author_id, views, created, updated";

pub(super) struct PostRow {
    id: String,
    title: String,
    content: String,
    slug: String,
    author: String,
    views: i64,
    created: String,
    updated: Option<String>,
}

pub(super) fn extract_post_row(row: &rusqlite::Row) -> rusqlite::Result<PostRow> {
    Ok(PostRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        slug: row.get(3)?,
        author: row.get(4)?,
        views: row.get(5)?,
        created: row.get(6)?,
        updated: row.get(7)?,
    })
}

fn parse_created(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FolioError::Other(format!("invalid timestamp in store: {}", e)))
}

pub(super) fn load_tags(conn: &Connection, post_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT tag FROM tags WHERE post_id = ?1 ORDER BY position")
        .map_err(|e| FolioError::Other(format!("failed to prepare tags query: {}", e)))?;

    let tags = stmt
        .query_map(params![post_id], |row| row.get::<_, String>(0))
        .map_err(|e| FolioError::Other(format!("failed to query tags: {}", e)))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| FolioError::Other(format!("failed to read tag rows: {}", e)))?;

    Ok(tags)
}

pub(super) fn load_likes(conn: &Connection, post_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT user_id FROM likes WHERE post_id = ?1 ORDER BY rowid")
        .map_err(|e| FolioError::Other(format!("failed to prepare likes query: {}", e)))?;

    let likes = stmt
        .query_map(params![post_id], |row| row.get::<_, String>(0))
        .map_err(|e| FolioError::Other(format!("failed to query likes: {}", e)))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| FolioError::Other(format!("failed to read like rows: {}", e)))?;

    Ok(likes)
}

pub(super) fn finish_post(conn: &Connection, raw: PostRow) -> Result<Post> {
    let tags = load_tags(conn, &raw.id)?;
    let likes = load_likes(conn, &raw.id)?;
    let created = parse_created(&raw.created)?;
    let updated = raw
        .updated
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Ok(Post {
        id: raw.id,
        title: raw.title,
        content: raw.content,
        slug: raw.slug,
        author: raw.author,
        tags,
        likes,
        views: raw.views.max(0) as u64,
        created,
        updated,
    })
}

impl super::Database {
    pub fn insert_post(&self, post: &Post) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO posts (id, title, content, slug, author_id, views, created, updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    post.id,
                    post.title,
                    post.content,
                    post.slug,
                    post.author,
                    post.views as i64,
                    post.created.to_rfc3339(),
                    post.updated.map(|dt| dt.to_rfc3339()),
                ],
            )
            .map_err(|e| FolioError::Other(format!("failed to insert post {}: {}", post.id, e)))?;

        let rowid: i64 = self.conn.last_insert_rowid();

        self.conn
            .execute(
                "INSERT OR REPLACE INTO posts_fts(rowid, title, content, tags) VALUES (?1, ?2, ?3, ?4)",
                params![rowid, post.title, post.content, post.tags.join(" ")],
            )
            .map_err(|e| {
                FolioError::Other(format!("failed to index post {}: {}", post.id, e))
            })?;

        for (position, tag) in post.tags.iter().enumerate() {
            self.conn
                .execute(
                    "INSERT INTO tags (post_id, position, tag) VALUES (?1, ?2, ?3)",
                    params![post.id, position as i64, tag],
                )
                .map_err(|e| {
                    FolioError::Other(format!(
                        "failed to insert tag {} for post {}: {}",
                        tag, post.id, e
                    ))
                })?;
        }

        Ok(())
    }

    pub fn get_post(&self, post_id: &str) -> Result<Option<Post>> {
        let sql = format!("SELECT {} FROM posts WHERE id = ?1", POST_COLUMNS);
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| FolioError::Other(format!("failed to prepare post query: {}", e)))?;

        let row = stmt
            .query_map(params![post_id], extract_post_row)
            .map_err(|e| FolioError::Other(format!("failed to query post: {}", e)))?
            .next();

        match row {
            Some(raw) => {
                let raw =
                    raw.map_err(|e| FolioError::Other(format!("failed to read post row: {}", e)))?;
                Ok(Some(finish_post(&self.conn, raw)?))
            }
            None => Ok(None),
        }
    }

    /// Update a post's title and content; tags are immutable after creation
    pub fn update_post(&self, post: &Post) -> Result<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE posts SET title = ?1, content = ?2, updated = ?3 WHERE id = ?4",
                params![
                    post.title,
                    post.content,
                    post.updated.map(|dt| dt.to_rfc3339()),
                    post.id,
                ],
            )
            .map_err(|e| FolioError::Other(format!("failed to update post {}: {}", post.id, e)))?;

        if changed == 0 {
            return Err(FolioError::PostNotFound {
                id: post.id.clone(),
            });
        }

        let rowid: i64 = self
            .conn
            .query_row(
                "SELECT rowid FROM posts WHERE id = ?1",
                params![post.id],
                |r| r.get(0),
            )
            .map_err(|e| FolioError::Other(format!("failed to resolve post rowid: {}", e)))?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO posts_fts(rowid, title, content, tags) VALUES (?1, ?2, ?3, ?4)",
                params![rowid, post.title, post.content, post.tags.join(" ")],
            )
            .map_err(|e| {
                FolioError::Other(format!("failed to reindex post {}: {}", post.id, e))
            })?;

        Ok(())
    }

    pub fn delete_post(&self, post_id: &str) -> Result<()> {
        let rowid: Option<i64> = self
            .conn
            .query_row(
                "SELECT rowid FROM posts WHERE id = ?1",
                params![post_id],
                |r| r.get(0),
            )
            .ok();

        let rowid = match rowid {
            Some(rowid) => rowid,
            None => {
                return Err(FolioError::PostNotFound {
                    id: post_id.to_string(),
                })
            }
        };

        self.conn
            .execute("DELETE FROM posts_fts WHERE rowid = ?1", params![rowid])
            .map_err(|e| {
                FolioError::Other(format!("failed to deindex post {}: {}", post_id, e))
            })?;

        // Tags, likes, and comments cascade
        self.conn
            .execute("DELETE FROM posts WHERE id = ?1", params![post_id])
            .map_err(|e| FolioError::Other(format!("failed to delete post {}: {}", post_id, e)))?;

        Ok(())
    }

    /// List all posts, newest first
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts ORDER BY created DESC, id",
            POST_COLUMNS
        );
        self.collect_posts(&sql, &[])
    }

    /// List posts by a single author, newest first
    pub fn list_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts WHERE author_id = ?1 ORDER BY created DESC, id",
            POST_COLUMNS
        );
        self.collect_posts(&sql, &[&author_id])
    }

    /// The candidate pool for recommendations: every post except the
    /// reference, in insertion order
    pub fn list_posts_excluding(&self, post_id: &str) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts WHERE id != ?1 ORDER BY created, id",
            POST_COLUMNS
        );
        self.collect_posts(&sql, &[&post_id])
    }

    pub(super) fn collect_posts(
        &self,
        sql: &str,
        query_params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| FolioError::Other(format!("failed to prepare post list query: {}", e)))?;

        let rows = stmt
            .query_map(query_params, extract_post_row)
            .map_err(|e| FolioError::Other(format!("failed to execute post list query: {}", e)))?;

        let mut results = Vec::new();
        for raw in rows {
            let raw =
                raw.map_err(|e| FolioError::Other(format!("failed to read post row: {}", e)))?;
            results.push(finish_post(&self.conn, raw)?);
        }

        Ok(results)
    }

    /// Increment the view counter for a post
    pub fn record_view(&self, post_id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE posts SET views = views + 1 WHERE id = ?1",
                params![post_id],
            )
            .map_err(|e| {
                FolioError::Other(format!("failed to record view for {}: {}", post_id, e))
            })?;

        if changed == 0 {
            return Err(FolioError::PostNotFound {
                id: post_id.to_string(),
            });
        }

        Ok(())
    }

    /// Toggle a like; returns true when the post is liked after the call
    pub fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<bool> {
        let liked: bool = self
            .conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = ?1 AND user_id = ?2)",
                params![post_id, user_id],
                |r| r.get(0),
            )
            .map_err(|e| FolioError::Other(format!("failed to query like: {}", e)))?;

        if liked {
            self.conn
                .execute(
                    "DELETE FROM likes WHERE post_id = ?1 AND user_id = ?2",
                    params![post_id, user_id],
                )
                .map_err(|e| FolioError::Other(format!("failed to remove like: {}", e)))?;
        } else {
            self.conn
                .execute(
                    "INSERT INTO likes (post_id, user_id, created) VALUES (?1, ?2, ?3)",
                    params![post_id, user_id, Utc::now().to_rfc3339()],
                )
                .map_err(|e| FolioError::Other(format!("failed to insert like: {}", e)))?;
        }

        Ok(!liked)
    }
}
