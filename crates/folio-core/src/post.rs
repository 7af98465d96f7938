//! Post and comment domain types

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::id;

static TAG_WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn tag_whitespace() -> &'static Regex {
    TAG_WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Normalize a tag for storage: trimmed, inner whitespace removed, lowercased
pub fn normalize_tag(tag: &str) -> String {
    tag_whitespace()
        .replace_all(tag.trim(), "")
        .to_lowercase()
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: String,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// URL-friendly slug derived from the title
    pub slug: String,
    /// Id of the authoring user
    pub author: String,
    /// Tags in insertion order; duplicates are allowed
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ids of users who liked the post
    #[serde(default)]
    pub likes: Vec<String>,
    /// View counter
    #[serde(default)]
    pub views: u64,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with a fresh id and slug
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let slug = slug::slugify(&title);
        Post {
            id: id::post_id(),
            title,
            content: content.into(),
            slug,
            author: author.into(),
            tags: Vec::new(),
            likes: Vec::new(),
            views: 0,
            created: Utc::now(),
            updated: None,
        }
    }

    /// Add tags, normalizing each
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.tags.extend(
            tags.into_iter()
                .map(|t| normalize_tag(t.as_ref()))
                .filter(|t| !t.is_empty()),
        );
        self
    }

    /// The text a post contributes to similarity ranking: title, content,
    /// and space-joined tags concatenated into one document.
    pub fn similarity_text(&self) -> String {
        format!("{} {} {}", self.title, self.content, self.tags.join(" "))
    }

    /// Number of likes
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: String,
    /// Id of the post this comment belongs to
    pub post: String,
    /// Id of the authoring user
    pub author: String,
    /// Comment text
    pub body: String,
    /// Verdict recorded by the moderation screen
    #[serde(default)]
    pub flagged: bool,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh id
    pub fn new(
        post: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Comment {
            id: id::comment_id(),
            post: post.into(),
            author: author.into(),
            body: body.into(),
            flagged: false,
            created: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag_strips_whitespace_and_case() {
        assert_eq!(normalize_tag("  Machine Learning "), "machinelearning");
        assert_eq!(normalize_tag("Tech"), "tech");
        assert_eq!(normalize_tag("ai"), "ai");
    }

    #[test]
    fn test_with_tags_normalizes_and_keeps_order() {
        let post = Post::new("Title", "Body", "us-1").with_tags(["Rust", "  Web Dev ", "rust"]);
        assert_eq!(post.tags, vec!["rust", "webdev", "rust"]);
    }

    #[test]
    fn test_with_tags_drops_empty_tags() {
        let post = Post::new("Title", "Body", "us-1").with_tags(["", "   ", "ok"]);
        assert_eq!(post.tags, vec!["ok"]);
    }

    #[test]
    fn test_slug_from_title() {
        let post = Post::new("Hello, Blogging World!", "Body", "us-1");
        assert_eq!(post.slug, "hello-blogging-world");
    }

    #[test]
    fn test_similarity_text_joins_fields() {
        let post = Post::new("AI trends", "deep learning models", "us-1").with_tags(["ai", "ml"]);
        assert_eq!(post.similarity_text(), "AI trends deep learning models ai ml");
    }

    #[test]
    fn test_similarity_text_without_tags() {
        let post = Post::new("AI trends", "deep learning", "us-1");
        assert_eq!(post.similarity_text(), "AI trends deep learning ");
    }
}
