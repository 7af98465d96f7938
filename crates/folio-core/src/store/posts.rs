//! Post and comment operations on the store

use chrono::Utc;

use crate::error::{FolioError, Result};
use crate::post::{Comment, Post};

impl super::Store {
    /// Create a post authored by an existing user. Tags are normalized;
    /// title and content are required.
    pub fn create_post(
        &self,
        title: &str,
        content: &str,
        author_id: &str,
        tags: &[String],
    ) -> Result<Post> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(FolioError::UsageError(
                "title and content are required".to_string(),
            ));
        }

        self.require_user(author_id)?;

        let post = Post::new(title, content, author_id).with_tags(tags.iter());
        self.db().insert_post(&post)?;

        tracing::debug!(post_id = %post.id, author = %author_id, "post_created");
        Ok(post)
    }

    /// Fetch a post or fail with `PostNotFound`
    pub fn require_post(&self, post_id: &str) -> Result<Post> {
        self.db()
            .get_post(post_id)?
            .ok_or_else(|| FolioError::PostNotFound {
                id: post_id.to_string(),
            })
    }

    /// Fetch a post and record a view
    pub fn view_post(&self, post_id: &str) -> Result<Post> {
        self.require_post(post_id)?;
        self.db().record_view(post_id)?;
        self.require_post(post_id)
    }

    /// Update a post's title and/or content. Only the author may update;
    /// empty values keep the existing field.
    pub fn update_post(
        &self,
        post_id: &str,
        actor_id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Post> {
        let mut post = self.require_post(post_id)?;

        if post.author != actor_id {
            return Err(FolioError::not_authorized("update this post"));
        }

        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            post.title = title.to_string();
        }
        if let Some(content) = content.filter(|c| !c.trim().is_empty()) {
            post.content = content.to_string();
        }
        post.updated = Some(Utc::now());

        self.db().update_post(&post)?;
        Ok(post)
    }

    /// Delete a post. Only the author may delete.
    pub fn delete_post(&self, post_id: &str, actor_id: &str) -> Result<()> {
        let post = self.require_post(post_id)?;

        if post.author != actor_id {
            return Err(FolioError::not_authorized("delete this post"));
        }

        self.db().delete_post(post_id)?;
        tracing::debug!(post_id = %post_id, "post_deleted");
        Ok(())
    }

    /// Toggle a like on behalf of a user; returns the updated post
    pub fn like_post(&self, post_id: &str, actor_id: &str) -> Result<Post> {
        self.require_post(post_id)?;
        self.require_user(actor_id)?;

        let liked = self.db().toggle_like(post_id, actor_id)?;
        tracing::debug!(post_id = %post_id, user = %actor_id, liked, "like_toggled");

        self.require_post(post_id)
    }

    /// Add a comment. The moderation verdict is decided by the caller
    /// before the comment reaches the store.
    pub fn add_comment(&self, post_id: &str, author_id: &str, body: &str) -> Result<Comment> {
        if body.trim().is_empty() {
            return Err(FolioError::UsageError(
                "comment text is required".to_string(),
            ));
        }

        self.require_post(post_id)?;
        self.require_user(author_id)?;

        let comment = Comment::new(post_id, author_id, body);
        self.db().insert_comment(&comment)?;
        Ok(comment)
    }

    /// Delete a comment. Only the comment author may delete.
    pub fn delete_comment(&self, comment_id: &str, actor_id: &str) -> Result<()> {
        let comment =
            self.db()
                .get_comment(comment_id)?
                .ok_or_else(|| FolioError::CommentNotFound {
                    id: comment_id.to_string(),
                })?;

        if comment.author != actor_id {
            return Err(FolioError::not_authorized("delete this comment"));
        }

        self.db().delete_comment(comment_id)
    }

    /// List a post's comments, newest first
    pub fn comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.require_post(post_id)?;
        self.db().list_comments(post_id)
    }

    /// Full-text search over posts
    pub fn search(&self, query: &str) -> Result<Vec<Post>> {
        self.db().search_posts(query)
    }

    /// The explore surface: most-viewed posts
    pub fn explore(&self) -> Result<Vec<Post>> {
        self.db().trending_posts(None, self.config().explore_limit)
    }
}
