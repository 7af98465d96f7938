//! `folio user` commands - registration, profiles, follow relationships

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::post_line;
use folio_core::error::Result;
use folio_core::store::Store;
use folio_core::user::User;

fn print_user(cli: &Cli, user: &User) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(user)?),
        OutputFormat::Human => {
            println!("{}", user.id);
            println!("{} <{}>", user.name, user.email);
        }
    }
    Ok(())
}

/// Register a new user
pub fn add(cli: &Cli, store: &Store, name: &str, email: &str) -> Result<()> {
    let user = store.create_user(name, email)?;
    print_user(cli, &user)
}

/// Show a user profile with their posts
pub fn show(cli: &Cli, store: &Store, user_id: &str) -> Result<()> {
    let user = store.require_user(user_id)?;
    let posts = store.db().list_posts_by_author(user_id)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "user": user,
                "posts": posts,
            });
            println!("{}", output);
        }
        OutputFormat::Human => {
            println!("{}", user.id);
            println!("{} <{}>", user.name, user.email);
            for post in &posts {
                println!("{}", post_line(post));
            }
        }
    }

    Ok(())
}

/// Show a user's dashboard
pub fn dashboard(cli: &Cli, store: &Store, user_id: &str) -> Result<()> {
    let dashboard = store.dashboard(user_id)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&dashboard)?),
        OutputFormat::Human => {
            println!("{} <{}>", dashboard.user.name, dashboard.user.email);
            println!("followers ({}):", dashboard.followers.len());
            for user in &dashboard.followers {
                println!("  {}  {}", user.id, user.name);
            }
            println!("following ({}):", dashboard.following.len());
            for user in &dashboard.following {
                println!("  {}  {}", user.id, user.name);
            }
        }
    }

    Ok(())
}

/// Follow or unfollow a target user (toggle)
pub fn follow(cli: &Cli, store: &Store, actor_id: &str, target_id: &str) -> Result<()> {
    let status = store.toggle_follow(actor_id, target_id)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&status)?),
        OutputFormat::Human => {
            let verb = if status.following {
                "Followed"
            } else {
                "Unfollowed"
            };
            println!(
                "{} {} (followers: {})",
                verb, target_id, status.follower_count
            );
        }
    }

    Ok(())
}

/// Report whether the acting user follows the target
pub fn follow_status(cli: &Cli, store: &Store, actor_id: &str, target_id: &str) -> Result<()> {
    let status = store.follow_status(actor_id, target_id)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&status)?),
        OutputFormat::Human => {
            println!(
                "{}",
                if status.following {
                    "following"
                } else {
                    "not following"
                }
            );
        }
    }

    Ok(())
}
