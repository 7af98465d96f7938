//! Identifier generation for posts, comments, and users
//!
//! Identifiers are ULIDs with a short entity prefix so that ids remain
//! self-describing in logs and CLI output (`po-...`, `cm-...`, `us-...`).

use ulid::Ulid;

/// Prefix for post identifiers
pub const POST_PREFIX: &str = "po";

/// Prefix for comment identifiers
pub const COMMENT_PREFIX: &str = "cm";

/// Prefix for user identifiers
pub const USER_PREFIX: &str = "us";

fn generate(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new().to_string().to_lowercase())
}

/// Generate a new post id
pub fn post_id() -> String {
    generate(POST_PREFIX)
}

/// Generate a new comment id
pub fn comment_id() -> String {
    generate(COMMENT_PREFIX)
}

/// Generate a new user id
pub fn user_id() -> String {
    generate(USER_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_carry_entity_prefix() {
        assert!(post_id().starts_with("po-"));
        assert!(comment_id().starts_with("cm-"));
        assert!(user_id().starts_with("us-"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = post_id();
        let b = post_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_are_lowercase() {
        let id = post_id();
        assert_eq!(id, id.to_lowercase());
    }
}
