//! `folio comment` commands - add, remove, list
//!
//! Comment text is screened by the configured toxicity classifier before it
//! is accepted. Screening fails open when the service is unreachable.

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::print_comments;
use folio_core::error::{FolioError, Result};
use folio_core::moderation::ModerationClient;
use folio_core::store::Store;

/// Add a comment to a post
pub fn add(cli: &Cli, store: &Store, post_id: &str, user: &str, text: &str) -> Result<()> {
    let moderation = store.config().moderation.clone().with_env_overrides();
    let client = ModerationClient::new(moderation);

    if let Some(verdict) = client.screen(text) {
        tracing::debug!(
            is_toxic = verdict.is_toxic,
            confidence = verdict.confidence,
            "moderation_verdict"
        );
        if verdict.is_toxic {
            return Err(FolioError::ModerationRejected {
                reason: "your comment violates our community guidelines, please keep it respectful"
                    .to_string(),
            });
        }
    }

    let comment = store.add_comment(post_id, user, text)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&comment)?),
        OutputFormat::Human => {
            println!("{}", comment.id);
        }
    }

    Ok(())
}

/// Remove a comment
pub fn remove(cli: &Cli, store: &Store, comment_id: &str, user: &str) -> Result<()> {
    store.delete_comment(comment_id, user)?;

    if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Deleted {}", comment_id);
    } else if cli.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "deleted": comment_id }));
    }

    Ok(())
}

/// List a post's comments, newest first
pub fn list(cli: &Cli, store: &Store, post_id: &str) -> Result<()> {
    let comments = store.comments(post_id)?;
    print_comments(cli, &comments)
}
