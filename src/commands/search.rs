//! `folio search` and `folio explore` commands

use crate::cli::Cli;
use crate::commands::helpers::print_posts;
use folio_core::error::Result;
use folio_core::store::Store;

/// Full-text search over posts
pub fn search(cli: &Cli, store: &Store, query: &str) -> Result<()> {
    let posts = store.search(query)?;
    print_posts(cli, &posts)
}

/// Most-viewed posts
pub fn explore(cli: &Cli, store: &Store) -> Result<()> {
    let posts = store.explore()?;
    print_posts(cli, &posts)
}
