//! Recommendation ranking engine
//!
//! Given a reference post and the pool of all other posts, candidates are
//! scored by summed TF-IDF weight of the reference's terms plus a bonus per
//! overlapping tag, then filtered by a score threshold. When nothing
//! qualifies, ranking falls back to popularity: posts sharing a tag with
//! the reference first, trending posts otherwise.
//!
//! The engine is a pure function of its inputs. Corpus statistics are built
//! fresh per invocation and discarded; fallback tiers are executed by the
//! service entry point against the store.

mod tfidf;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::post::Post;
use crate::store::Store;
use crate::text::reference_terms;
use tfidf::TfIdf;

/// Default bonus added per overlapping tag occurrence
pub const DEFAULT_TAG_WEIGHT: f64 = 1.5;

/// Default minimum score a candidate must exceed to qualify
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;

/// Default maximum number of recommendations returned
pub const DEFAULT_LIMIT: usize = 4;

/// Ranking parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendParams {
    /// Bonus added per overlapping tag occurrence
    pub tag_weight: f64,
    /// Minimum score a candidate must exceed to qualify
    pub score_threshold: f64,
    /// Maximum number of recommendations returned
    pub limit: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        RecommendParams {
            tag_weight: DEFAULT_TAG_WEIGHT,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A candidate with its computed relevance score
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub post: Post,
    pub score: f64,
}

/// Terminal outcome of the ranking decision chain
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The pool is empty; the result is empty and no fallback applies
    NoCandidates,
    /// Candidates passed the score threshold, best first
    Ranked(Vec<Post>),
    /// Nothing qualified and the reference is tagged: fall back to
    /// popular posts sharing one of its tags
    SharedTagFallback,
    /// Nothing qualified and the reference is untagged: fall back to
    /// trending posts
    TrendingFallback,
}

/// Score every candidate against the reference.
///
/// Each candidate contributes the summed TF-IDF weight of the reference's
/// terms in its own document. Reference terms are not deduplicated, so a
/// repeated term accumulates once per occurrence. When the reference is
/// tagged, each candidate tag matching a reference tag (case-insensitively)
/// adds `tag_weight`, counted per occurrence.
pub fn score_candidates(
    reference: &Post,
    candidates: &[Post],
    params: &RecommendParams,
) -> Vec<ScoredCandidate> {
    let mut corpus = TfIdf::new();
    for candidate in candidates {
        corpus.add_document(&candidate.similarity_text());
    }

    let terms = reference_terms(&reference.similarity_text());
    let reference_tags: HashSet<String> =
        reference.tags.iter().map(|t| t.to_lowercase()).collect();

    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let mut score: f64 = terms.iter().map(|t| corpus.tfidf(t, i)).sum();

            if !reference_tags.is_empty() {
                let overlap = candidate
                    .tags
                    .iter()
                    .filter(|t| reference_tags.contains(&t.to_lowercase()))
                    .count();
                score += params.tag_weight * overlap as f64;
            }

            ScoredCandidate {
                post: candidate.clone(),
                score,
            }
        })
        .collect()
}

/// Run the ranking decision chain for a reference and candidate pool
pub fn decide(reference: &Post, candidates: &[Post], params: &RecommendParams) -> Outcome {
    if candidates.is_empty() {
        return Outcome::NoCandidates;
    }

    let mut scored = score_candidates(reference, candidates, params);

    // Stable sort keyed only on the score: equal-score candidates keep
    // their relative order from the input pool
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let ranked: Vec<Post> = scored
        .into_iter()
        .filter(|s| s.score > params.score_threshold)
        .take(params.limit)
        .map(|s| s.post)
        .collect();

    if !ranked.is_empty() {
        Outcome::Ranked(ranked)
    } else if reference.tags.is_empty() {
        Outcome::TrendingFallback
    } else {
        Outcome::SharedTagFallback
    }
}

/// Produce recommendations for a post.
///
/// Fetches the reference and its candidate pool, runs the decision chain,
/// and executes the chosen fallback tier against the store. A shared-tag
/// fallback that matches nothing cascades to the trending tier.
#[tracing::instrument(skip(store, params))]
pub fn recommend_posts(store: &Store, post_id: &str, params: &RecommendParams) -> Result<Vec<Post>> {
    let reference = store.require_post(post_id)?;
    let candidates = store.db().list_posts_excluding(post_id)?;

    match decide(&reference, &candidates, params) {
        Outcome::NoCandidates => Ok(Vec::new()),
        Outcome::Ranked(posts) => {
            tracing::debug!(post_id, count = posts.len(), "ranked_recommendations");
            Ok(posts)
        }
        Outcome::SharedTagFallback => {
            let shared = store
                .db()
                .posts_sharing_tags(&reference.tags, post_id, params.limit)?;
            if shared.is_empty() {
                tracing::debug!(post_id, "shared_tag_fallback_empty_cascading_to_trending");
                store.db().trending_posts(Some(post_id), params.limit)
            } else {
                tracing::debug!(post_id, count = shared.len(), "shared_tag_fallback");
                Ok(shared)
            }
        }
        Outcome::TrendingFallback => {
            tracing::debug!(post_id, "trending_fallback");
            store.db().trending_posts(Some(post_id), params.limit)
        }
    }
}
