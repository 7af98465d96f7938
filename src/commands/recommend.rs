//! `folio recommend` command - related posts for a reference post

use crate::cli::Cli;
use crate::commands::helpers::print_posts;
use folio_core::error::Result;
use folio_core::recommend::{self, RecommendParams};
use folio_core::store::Store;

/// Execute the recommend command. Flags override the configured parameters.
pub fn execute(
    cli: &Cli,
    store: &Store,
    post_id: &str,
    limit: Option<usize>,
    tag_weight: Option<f64>,
    threshold: Option<f64>,
) -> Result<()> {
    let configured = store.config().recommend;
    let params = RecommendParams {
        tag_weight: tag_weight.unwrap_or(configured.tag_weight),
        score_threshold: threshold.unwrap_or(configured.score_threshold),
        limit: limit.unwrap_or(configured.limit),
    };

    let posts = recommend::recommend_posts(store, post_id, &params)?;
    print_posts(cli, &posts)
}
