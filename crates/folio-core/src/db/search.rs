//! Full-text search and popularity queries

use rusqlite::params;

use super::posts::POST_COLUMNS;
use crate::error::{FolioError, Result};
use crate::post::Post;

impl super::Database {
    /// Full-text search over titles, content, and tags.
    ///
    /// Matches are ordered by popularity (views descending) and then
    /// recency, mirroring the explore surface rather than by match rank.
    pub fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        // Wrap the query in double quotes to treat it as a phrase search.
        // This prevents FTS5 from interpreting hyphens as column filters.
        let fts_query = format!("\"{}\"", query.replace('"', "\"\""));

        let sql = format!(
            "SELECT {} FROM posts p
             JOIN posts_fts ON posts_fts.rowid = p.rowid
             WHERE posts_fts MATCH ?1
             ORDER BY p.views DESC, p.created DESC, p.id",
            qualified_columns()
        );

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| FolioError::Other(format!("failed to prepare search query: {}", e)))?;

        let rows = stmt
            .query_map(params![fts_query], super::posts::extract_post_row)
            .map_err(|e| {
                FolioError::Other(format!(
                    "failed to execute search query for '{}': {}",
                    query, e
                ))
            })?;

        let mut results = Vec::new();
        for raw in rows {
            let raw =
                raw.map_err(|e| FolioError::Other(format!("failed to read search row: {}", e)))?;
            results.push(super::posts::finish_post(&self.conn, raw)?);
        }

        Ok(results)
    }

    /// Most-viewed posts, optionally excluding one id.
    ///
    /// Ordered by views descending, creation time descending. Serves the
    /// explore surface and the trending recommendation fallback.
    pub fn trending_posts(&self, exclude: Option<&str>, limit: usize) -> Result<Vec<Post>> {
        let sql = format!(
            "SELECT {} FROM posts WHERE id != ?1
             ORDER BY views DESC, created DESC, id LIMIT ?2",
            POST_COLUMNS
        );

        // An empty sentinel id matches nothing, so the same query serves both
        let exclude = exclude.unwrap_or("");
        self.collect_posts(&sql, &[&exclude, &(limit as i64)])
    }

    /// Posts sharing at least one tag with the given set, excluding one id.
    ///
    /// Tag comparison is case-insensitive. Ordered by views descending.
    /// Serves the shared-tag recommendation fallback.
    pub fn posts_sharing_tags(
        &self,
        tags: &[String],
        exclude: &str,
        limit: usize,
    ) -> Result<Vec<Post>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (0..tags.len())
            .map(|i| format!("?{}", i + 3))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "SELECT {} FROM posts p
             WHERE p.id != ?1
               AND EXISTS (
                   SELECT 1 FROM tags t
                   WHERE t.post_id = p.id AND lower(t.tag) IN ({})
               )
             ORDER BY p.views DESC, p.created DESC, p.id LIMIT ?2",
            qualified_columns(),
            placeholders
        );

        let mut query_params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(exclude.to_string()), Box::new(limit as i64)];
        for tag in tags {
            query_params.push(Box::new(tag.to_lowercase()));
        }
        let param_refs: Vec<&dyn rusqlite::ToSql> =
            query_params.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql).map_err(|e| {
            FolioError::Other(format!("failed to prepare shared-tag query: {}", e))
        })?;

        let rows = stmt
            .query_map(param_refs.as_slice(), super::posts::extract_post_row)
            .map_err(|e| FolioError::Other(format!("failed to execute shared-tag query: {}", e)))?;

        let mut results = Vec::new();
        for raw in rows {
            let raw = raw
                .map_err(|e| FolioError::Other(format!("failed to read shared-tag row: {}", e)))?;
            results.push(super::posts::finish_post(&self.conn, raw)?);
        }

        Ok(results)
    }
}

fn qualified_columns() -> String {
    POST_COLUMNS
        .split(", ")
        .map(|c| format!("p.{}", c))
        .collect::<Vec<_>>()
        .join(", ")
}
