//! User and follow operations on the store

use crate::error::{FolioError, Result};
use crate::user::{Dashboard, FollowStatus, User};

impl super::Store {
    /// Register a new user
    pub fn create_user(&self, name: &str, email: &str) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(FolioError::UsageError(
                "name and email are required".to_string(),
            ));
        }

        let user = User::new(name.trim(), email.trim());
        self.db().insert_user(&user)?;
        tracing::debug!(user_id = %user.id, "user_created");
        Ok(user)
    }

    /// Fetch a user or fail with `UserNotFound`
    pub fn require_user(&self, user_id: &str) -> Result<User> {
        self.db()
            .get_user(user_id)?
            .ok_or_else(|| FolioError::UserNotFound {
                id: user_id.to_string(),
            })
    }

    /// A user's dashboard: profile plus follower/following lists
    pub fn dashboard(&self, user_id: &str) -> Result<Dashboard> {
        let user = self.require_user(user_id)?;
        let followers = self.db().followers_of(user_id)?;
        let following = self.db().following_of(user_id)?;

        Ok(Dashboard {
            user,
            followers,
            following,
        })
    }

    /// Follow or unfollow a target user on behalf of the actor.
    /// Acts as a toggle, returning the resulting status.
    pub fn toggle_follow(&self, actor_id: &str, target_id: &str) -> Result<FollowStatus> {
        self.require_user(actor_id)?;
        self.require_user(target_id)?;

        let following = self.db().toggle_follow(actor_id, target_id)?;
        tracing::debug!(actor = %actor_id, target = %target_id, following, "follow_toggled");

        Ok(FollowStatus {
            following,
            follower_count: self.db().follower_count(target_id)?,
            following_count: self.db().following_count(target_id)?,
        })
    }

    /// Whether the actor currently follows the target
    pub fn follow_status(&self, actor_id: &str, target_id: &str) -> Result<FollowStatus> {
        self.require_user(actor_id)?;
        self.require_user(target_id)?;

        Ok(FollowStatus {
            following: self.db().is_following(actor_id, target_id)?,
            follower_count: self.db().follower_count(target_id)?,
            following_count: self.db().following_count(target_id)?,
        })
    }
}
