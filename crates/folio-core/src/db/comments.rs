//! Comment queries

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::error::{FolioError, Result};
use crate::post::Comment;

struct CommentRow {
    id: String,
    post: String,
    author: String,
    body: String,
    flagged: i64,
    created: String,
}

fn extract_comment_row(row: &rusqlite::Row) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        post: row.get(1)?,
        author: row.get(2)?,
        body: row.get(3)?,
        flagged: row.get(4)?,
        created: row.get(5)?,
    })
}

fn finish_comment(raw: CommentRow) -> Result<Comment> {
    let created = DateTime::parse_from_rfc3339(&raw.created)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FolioError::Other(format!("invalid timestamp in store: {}", e)))?;

    Ok(Comment {
        id: raw.id,
        post: raw.post,
        author: raw.author,
        body: raw.body,
        flagged: raw.flagged != 0,
        created,
    })
}

impl super::Database {
    pub fn insert_comment(&self, comment: &Comment) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO comments (id, post_id, author_id, body, flagged, created)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    comment.id,
                    comment.post,
                    comment.author,
                    comment.body,
                    comment.flagged as i64,
                    comment.created.to_rfc3339(),
                ],
            )
            .map_err(|e| {
                FolioError::Other(format!("failed to insert comment {}: {}", comment.id, e))
            })?;

        Ok(())
    }

    pub fn get_comment(&self, comment_id: &str) -> Result<Option<Comment>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, post_id, author_id, body, flagged, created
                 FROM comments WHERE id = ?1",
            )
            .map_err(|e| FolioError::Other(format!("failed to prepare comment query: {}", e)))?;

        let row = stmt
            .query_map(params![comment_id], extract_comment_row)
            .map_err(|e| FolioError::Other(format!("failed to query comment: {}", e)))?
            .next();

        match row {
            Some(raw) => {
                let raw = raw
                    .map_err(|e| FolioError::Other(format!("failed to read comment row: {}", e)))?;
                Ok(Some(finish_comment(raw)?))
            }
            None => Ok(None),
        }
    }

    pub fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1", params![comment_id])
            .map_err(|e| {
                FolioError::Other(format!("failed to delete comment {}: {}", comment_id, e))
            })?;

        if changed == 0 {
            return Err(FolioError::CommentNotFound {
                id: comment_id.to_string(),
            });
        }

        Ok(())
    }

    /// List a post's comments, newest first
    pub fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, post_id, author_id, body, flagged, created
                 FROM comments WHERE post_id = ?1 ORDER BY created DESC, id",
            )
            .map_err(|e| {
                FolioError::Other(format!("failed to prepare comment list query: {}", e))
            })?;

        let rows = stmt
            .query_map(params![post_id], extract_comment_row)
            .map_err(|e| FolioError::Other(format!("failed to query comments: {}", e)))?;

        let mut results = Vec::new();
        for raw in rows {
            let raw =
                raw.map_err(|e| FolioError::Other(format!("failed to read comment row: {}", e)))?;
            results.push(finish_comment(raw)?);
        }

        Ok(results)
    }
}
