//! User and follow-graph queries

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::error::{FolioError, Result};
use crate::user::User;

fn extract_user_row(row: &rusqlite::Row) -> rusqlite::Result<(String, String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn finish_user(raw: (String, String, String, String)) -> Result<User> {
    let (id, name, email, created) = raw;
    let created = DateTime::parse_from_rfc3339(&created)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FolioError::Other(format!("invalid timestamp in store: {}", e)))?;

    Ok(User {
        id,
        name,
        email,
        created,
    })
}

impl super::Database {
    pub fn insert_user(&self, user: &User) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO users (id, name, email, created) VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.name, user.email, user.created.to_rfc3339()],
            )
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint failed: users.email") {
                    FolioError::already_exists("user email", &user.email)
                } else {
                    FolioError::Other(format!("failed to insert user {}: {}", user.id, e))
                }
            })?;

        Ok(())
    }

    pub fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, created FROM users WHERE id = ?1")
            .map_err(|e| FolioError::Other(format!("failed to prepare user query: {}", e)))?;

        let row = stmt
            .query_map(params![user_id], extract_user_row)
            .map_err(|e| FolioError::Other(format!("failed to query user: {}", e)))?
            .next();

        match row {
            Some(raw) => {
                let raw =
                    raw.map_err(|e| FolioError::Other(format!("failed to read user row: {}", e)))?;
                Ok(Some(finish_user(raw)?))
            }
            None => Ok(None),
        }
    }

    /// Users following the given user, in follow order
    pub fn followers_of(&self, user_id: &str) -> Result<Vec<User>> {
        self.collect_users(
            "SELECT u.id, u.name, u.email, u.created
             FROM follows f JOIN users u ON u.id = f.follower_id
             WHERE f.followee_id = ?1 ORDER BY f.rowid",
            user_id,
        )
    }

    /// Users the given user follows, in follow order
    pub fn following_of(&self, user_id: &str) -> Result<Vec<User>> {
        self.collect_users(
            "SELECT u.id, u.name, u.email, u.created
             FROM follows f JOIN users u ON u.id = f.followee_id
             WHERE f.follower_id = ?1 ORDER BY f.rowid",
            user_id,
        )
    }

    fn collect_users(&self, sql: &str, user_id: &str) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| FolioError::Other(format!("failed to prepare follow query: {}", e)))?;

        let rows = stmt
            .query_map(params![user_id], extract_user_row)
            .map_err(|e| FolioError::Other(format!("failed to query follows: {}", e)))?;

        let mut results = Vec::new();
        for raw in rows {
            let raw =
                raw.map_err(|e| FolioError::Other(format!("failed to read user row: {}", e)))?;
            results.push(finish_user(raw)?);
        }

        Ok(results)
    }

    pub fn is_following(&self, follower_id: &str, followee_id: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = ?1 AND followee_id = ?2)",
                params![follower_id, followee_id],
                |r| r.get(0),
            )
            .map_err(|e| FolioError::Other(format!("failed to query follow edge: {}", e)))
    }

    /// Toggle a follow edge; returns true when the edge exists after the call
    pub fn toggle_follow(&self, follower_id: &str, followee_id: &str) -> Result<bool> {
        if follower_id == followee_id {
            return Err(FolioError::SelfFollow);
        }

        let following = self.is_following(follower_id, followee_id)?;

        if following {
            self.conn
                .execute(
                    "DELETE FROM follows WHERE follower_id = ?1 AND followee_id = ?2",
                    params![follower_id, followee_id],
                )
                .map_err(|e| FolioError::Other(format!("failed to remove follow edge: {}", e)))?;
        } else {
            self.conn
                .execute(
                    "INSERT INTO follows (follower_id, followee_id, created) VALUES (?1, ?2, ?3)",
                    params![follower_id, followee_id, Utc::now().to_rfc3339()],
                )
                .map_err(|e| FolioError::Other(format!("failed to insert follow edge: {}", e)))?;
        }

        Ok(!following)
    }

    pub fn follower_count(&self, user_id: &str) -> Result<usize> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM follows WHERE followee_id = ?1",
                params![user_id],
                |r| r.get::<_, i64>(0),
            )
            .map(|n| n.max(0) as usize)
            .map_err(|e| FolioError::Other(format!("failed to count followers: {}", e)))
    }

    pub fn following_count(&self, user_id: &str) -> Result<usize> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM follows WHERE follower_id = ?1",
                params![user_id],
                |r| r.get::<_, i64>(0),
            )
            .map(|n| n.max(0) as usize)
            .map_err(|e| FolioError::Other(format!("failed to count following: {}", e)))
    }
}
