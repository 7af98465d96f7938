//! Command dispatch logic for folio

use std::time::Instant;

use crate::cli::{Cli, CommentCommands, Commands, UserCommands};
use crate::commands;
use crate::commands::helpers::{open_store, resolve_root};
use folio_core::error::{FolioError, Result};
use folio_core::store::Store;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root(cli);

    if cli.verbose {
        eprintln!("resolve_root: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(FolioError::UsageError(
            "no command given (try --help)".to_string(),
        )),

        Some(Commands::Init) => commands::init::execute(cli, &root),

        Some(Commands::User { command }) => {
            let store = open_store(cli)?;
            run_user(cli, &store, command)
        }

        Some(Commands::Comment { command }) => {
            let store = open_store(cli)?;
            run_comment(cli, &store, command)
        }

        Some(command) => {
            let store = open_store(cli)?;
            run_post(cli, &store, command)
        }
    }
}

fn run_post(cli: &Cli, store: &Store, command: &Commands) -> Result<()> {
    match command {
        Commands::Create {
            title,
            content,
            author,
            tag,
        } => commands::post::create(cli, store, title, content, author, tag),

        Commands::Show { id } => commands::post::show(cli, store, id),

        Commands::List { author, since } => {
            commands::post::list(cli, store, author.as_deref(), since.as_deref())
        }

        Commands::Update {
            id,
            title,
            content,
            author,
        } => commands::post::update(cli, store, id, title.as_deref(), content.as_deref(), author),

        Commands::Delete { id, author } => commands::post::delete(cli, store, id, author),

        Commands::Like { id, user } => commands::post::like(cli, store, id, user),

        Commands::Search { query } => commands::search::search(cli, store, query),

        Commands::Explore => commands::search::explore(cli, store),

        Commands::Recommend {
            id,
            limit,
            tag_weight,
            threshold,
        } => commands::recommend::execute(cli, store, id, *limit, *tag_weight, *threshold),

        // Handled by `run` before delegating here
        Commands::Init | Commands::User { .. } | Commands::Comment { .. } => unreachable!(),
    }
}

fn run_user(cli: &Cli, store: &Store, command: &UserCommands) -> Result<()> {
    match command {
        UserCommands::Add { name, email } => commands::user::add(cli, store, name, email),
        UserCommands::Show { id } => commands::user::show(cli, store, id),
        UserCommands::Dashboard { id } => commands::user::dashboard(cli, store, id),
        UserCommands::Follow { id, user } => commands::user::follow(cli, store, user, id),
        UserCommands::FollowStatus { id, user } => {
            commands::user::follow_status(cli, store, user, id)
        }
    }
}

fn run_comment(cli: &Cli, store: &Store, command: &CommentCommands) -> Result<()> {
    match command {
        CommentCommands::Add {
            post_id,
            text,
            user,
        } => commands::comment::add(cli, store, post_id, user, text),
        CommentCommands::Remove { comment_id, user } => {
            commands::comment::remove(cli, store, comment_id, user)
        }
        CommentCommands::List { post_id } => commands::comment::list(cli, store, post_id),
    }
}
