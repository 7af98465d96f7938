//! User domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

/// A platform user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id::user_id(),
            name: name.into(),
            email: email.into(),
            created: Utc::now(),
        }
    }
}

/// A user's dashboard view: profile plus follower/following lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub user: User,
    pub followers: Vec<User>,
    pub following: Vec<User>,
}

/// Result of toggling or querying a follow relationship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowStatus {
    /// Whether the acting user now follows the target
    pub following: bool,
    /// Target's follower count
    pub follower_count: usize,
    /// Target's following count
    pub following_count: usize,
}
