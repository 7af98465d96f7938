//! `folio` post commands - create, show, list, update, delete, like

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{post_line, print_posts};
use folio_core::error::Result;
use folio_core::post::Post;
use folio_core::store::Store;

fn print_post(cli: &Cli, post: &Post) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(post)?),
        OutputFormat::Human => {
            println!("{}", post.id);
            println!("{}", post_line(post));
        }
    }
    Ok(())
}

/// Create a new post
pub fn create(
    cli: &Cli,
    store: &Store,
    title: &str,
    content: &str,
    author: &str,
    tags: &[String],
) -> Result<()> {
    debug!(title, author, tags_count = tags.len(), "create_params");

    let post = store.create_post(title, content, author, tags)?;
    print_post(cli, &post)
}

/// Show a post with its comments; records a view
pub fn show(cli: &Cli, store: &Store, post_id: &str) -> Result<()> {
    let post = store.view_post(post_id)?;
    let comments = store.comments(post_id)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "post": post,
                "comments": comments,
            });
            println!("{}", output);
        }
        OutputFormat::Human => {
            println!("{}  {}", post.id, post.title);
            println!(
                "by {} · views:{} likes:{}",
                post.author,
                post.views,
                post.like_count()
            );
            if !post.tags.is_empty() {
                println!("tags: {}", post.tags.join(","));
            }
            println!();
            println!("{}", post.content);
            if !comments.is_empty() {
                println!();
                println!("comments ({}):", comments.len());
                for comment in &comments {
                    println!("  {}  {}: {}", comment.id, comment.author, comment.body);
                }
            }
        }
    }

    Ok(())
}

/// List posts, newest first
pub fn list(
    cli: &Cli,
    store: &Store,
    author: Option<&str>,
    since: Option<&str>,
) -> Result<()> {
    let since = since
        .map(|s| {
            chrono::DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .map_err(|e| {
                    folio_core::error::FolioError::UsageError(format!(
                        "invalid --since date: {}",
                        e
                    ))
                })
        })
        .transpose()?;

    let mut posts = match author {
        Some(author) => {
            store.require_user(author)?;
            store.db().list_posts_by_author(author)?
        }
        None => store.db().list_posts()?,
    };

    if let Some(since) = since {
        posts.retain(|p| p.created >= since);
    }

    print_posts(cli, &posts)
}

/// Update a post's title and/or content
pub fn update(
    cli: &Cli,
    store: &Store,
    post_id: &str,
    title: Option<&str>,
    content: Option<&str>,
    actor: &str,
) -> Result<()> {
    let post = store.update_post(post_id, actor, title, content)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&post)?),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Updated {}", post.id);
            }
        }
    }

    Ok(())
}

/// Delete a post
pub fn delete(cli: &Cli, store: &Store, post_id: &str, actor: &str) -> Result<()> {
    store.delete_post(post_id, actor)?;

    if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Deleted {}", post_id);
    } else if cli.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "deleted": post_id }));
    }

    Ok(())
}

/// Toggle a like on a post
pub fn like(cli: &Cli, store: &Store, post_id: &str, user: &str) -> Result<()> {
    let post = store.like_post(post_id, user)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&post)?),
        OutputFormat::Human => {
            let verb = if post.likes.iter().any(|id| id.as_str() == user) {
                "Liked"
            } else {
                "Unliked"
            };
            println!("{} {} (likes: {})", verb, post.id, post.like_count());
        }
    }

    Ok(())
}
