//! CLI argument parsing for folio
//!
//! Uses clap for argument parsing. Global flags: --root, --store, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Folio - blogging and social platform CLI
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new folio store
    Init,

    /// User management and follow relationships
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Create a new post
    Create {
        /// Post title
        title: String,

        /// Post content
        content: String,

        /// Acting user id
        #[arg(long = "as")]
        author: String,

        /// Tag the post (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,
    },

    /// Show a post (records a view)
    Show {
        /// Post id
        id: String,
    },

    /// List posts
    List {
        /// Only posts by this author
        #[arg(long)]
        author: Option<String>,

        /// Only posts created at or after this time (RFC 3339)
        #[arg(long)]
        since: Option<String>,
    },

    /// Update a post's title and/or content
    Update {
        /// Post id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// Acting user id
        #[arg(long = "as")]
        author: String,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,

        /// Acting user id
        #[arg(long = "as")]
        author: String,
    },

    /// Toggle a like on a post
    Like {
        /// Post id
        id: String,

        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },

    /// Comment management
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Search posts by title, content, or tags
    Search {
        /// Search query
        query: String,
    },

    /// Most-viewed posts
    Explore,

    /// Recommend posts related to a reference post
    Recommend {
        /// Reference post id
        id: String,

        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Bonus per overlapping tag
        #[arg(long)]
        tag_weight: Option<f64>,

        /// Minimum qualifying score
        #[arg(long)]
        threshold: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new user
    Add {
        /// Display name
        name: String,

        /// Email address
        email: String,
    },

    /// Show a user profile
    Show {
        /// User id
        id: String,
    },

    /// Show a user's dashboard with follower/following lists
    Dashboard {
        /// User id
        id: String,
    },

    /// Follow or unfollow a user (acts as a toggle)
    Follow {
        /// Target user id
        id: String,

        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },

    /// Report whether the acting user follows the target
    FollowStatus {
        /// Target user id
        id: String,

        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a comment to a post
    Add {
        /// Post id
        post_id: String,

        /// Comment text
        text: String,

        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },

    /// Remove a comment
    Remove {
        /// Comment id
        comment_id: String,

        /// Acting user id
        #[arg(long = "as")]
        user: String,
    },

    /// List a post's comments
    List {
        /// Post id
        post_id: String,
    },
}
