//! Helper functions shared across commands

use std::env;
use std::path::PathBuf;

use folio_core::error::Result;
use folio_core::post::{Comment, Post};
use folio_core::store::Store;

use crate::cli::{Cli, OutputFormat};

/// Resolve the base directory used for store discovery
pub fn resolve_root(cli: &Cli) -> PathBuf {
    cli.root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Open the store from --store, or discover it from the root directory
pub fn open_store(cli: &Cli) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(path),
        None => Store::discover(&resolve_root(cli)),
    }
}

/// One-line human rendering of a post
pub fn post_line(post: &Post) -> String {
    let tags = if post.tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", post.tags.join(","))
    };

    format!(
        "{}  {}{}  views:{} likes:{}",
        post.id,
        post.title,
        tags,
        post.views,
        post.like_count()
    )
}

/// Print a list of posts in the requested format
pub fn print_posts(cli: &Cli, posts: &[Post]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(posts)?);
        }
        OutputFormat::Human => {
            if posts.is_empty() {
                if !cli.quiet {
                    println!("No posts found");
                }
            } else {
                for post in posts {
                    println!("{}", post_line(post));
                }
            }
        }
    }
    Ok(())
}

/// Print a list of comments in the requested format
pub fn print_comments(cli: &Cli, comments: &[Comment]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(comments)?);
        }
        OutputFormat::Human => {
            if comments.is_empty() {
                if !cli.quiet {
                    println!("No comments found");
                }
            } else {
                for comment in comments {
                    println!("{}  {}: {}", comment.id, comment.author, comment.body);
                }
            }
        }
    }
    Ok(())
}
