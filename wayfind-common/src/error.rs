//! Error types and utilities for the wayfind toolkit
//!
//! Provides the shared error type and fuzzy matching for node identifiers.

use std::fmt;
use strsim::{jaro_winkler, normalized_levenshtein};

/// Minimum similarity (0.0 to 1.0) for a candidate to be suggested.
const MIN_SIMILARITY: f64 = 0.65;

/// Find the best fuzzy match using character-based scoring plus a few bonuses
///
/// Combines Jaro-Winkler (70%) with Normalized Levenshtein (30%) and adds:
/// - Prefix matching: 20% bonus for strong prefix similarity (first 7 chars)
/// - Length similarity: 10% bonus when both strings are long and similar length
/// - Substring matching: 12% bonus per compound part (`north-gate`, `dock_3`)
fn find_best_fuzzy_match(input: &str, candidates: &[&str]) -> Option<String> {
    let input_lower = input.to_lowercase();
    let mut best_match = None;
    let mut best_score = 0.0f64;

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();

        // Jaro-Winkler handles transpositions and rewards shared prefixes,
        // Levenshtein covers insertions and deletions.
        let jw_score = jaro_winkler(&input_lower, &candidate_lower);
        let lev_score = normalized_levenshtein(&input_lower, &candidate_lower);
        let combined_score = (jw_score * 0.7) + (lev_score * 0.3);

        let mut bonus = 0.0;

        let prefix_len = input_lower.chars().count().min(7);
        if prefix_len >= 4 {
            let input_prefix = input_lower.chars().take(prefix_len).collect::<String>();
            let candidate_prefix = candidate_lower.chars().take(prefix_len).collect::<String>();

            let prefix_similarity = normalized_levenshtein(&input_prefix, &candidate_prefix);
            if prefix_similarity > 0.7 {
                bonus += 0.2 * prefix_similarity;
            }
        }

        if input_lower.len() >= 8 && candidate_lower.len() >= 8 {
            let length_ratio = 1.0
                - ((input_lower.len() as f64 - candidate_lower.len() as f64).abs()
                    / input_lower.len().max(candidate_lower.len()) as f64);
            if length_ratio > 0.7 {
                bonus += 0.1 * length_ratio;
            }
        }

        if candidate_lower.contains(['-', '_', '/']) {
            for part in candidate_lower.split(['-', '_', '/']) {
                if part.len() >= 4 {
                    let part_similarity = jaro_winkler(&input_lower, part);
                    if part_similarity > 0.85 {
                        bonus += 0.12 * part_similarity;
                    }
                }
            }
        }

        let final_score = combined_score + bonus;

        if final_score >= MIN_SIMILARITY && final_score > best_score {
            best_score = final_score;
            best_match = Some((*candidate).to_string());
        }
    }

    best_match
}

/// Suggest an existing identifier for one that was not found
///
/// Returns `None` when `input` is itself one of the candidates or when nothing
/// is close enough. A candidate that differs only by ASCII case always wins.
pub fn suggest_correction<I, S>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<S> = candidates.into_iter().collect();
    let candidates: Vec<&str> = owned.iter().map(AsRef::as_ref).collect();

    if candidates.contains(&input) {
        return None;
    }

    if let Some(exact) = candidates.iter().find(|c| c.eq_ignore_ascii_case(input)) {
        return Some((*exact).to_string());
    }

    find_best_fuzzy_match(input, &candidates)
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

/// Main error type for wayfind operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Start node is not part of the graph
    #[error("node '{node}' not found in graph{}", did_you_mean(.suggestion))]
    NodeNotFound {
        node: String,
        suggestion: Option<String>,
    },

    /// No directed path leads from start to the requested node
    #[error("node '{finish}' is unreachable from '{start}'")]
    NodeUnreachable { start: String, finish: String },

    /// Route requested for a node the last run did not finalize
    #[error("node '{node}' has not been finalized by a shortest-path run")]
    NodeNotFinalized { node: String },

    /// A path sum exceeded the representable distance range
    #[error("distance overflow while relaxing edge '{from}' -> '{to}'")]
    DistanceOverflow { from: String, to: String },
}

impl Error {
    /// `NodeNotFound` for `node`, with a suggestion drawn from `known`
    pub fn node_not_found<N, I>(node: &N, known: I) -> Self
    where
        N: fmt::Display + ?Sized,
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let node = node.to_string();
        let suggestion = suggest_correction(&node, known.into_iter().map(|k| k.to_string()));
        Error::NodeNotFound { node, suggestion }
    }

    pub fn node_unreachable<A, B>(start: &A, finish: &B) -> Self
    where
        A: fmt::Display + ?Sized,
        B: fmt::Display + ?Sized,
    {
        Error::NodeUnreachable {
            start: start.to_string(),
            finish: finish.to_string(),
        }
    }

    pub fn node_not_finalized<N: fmt::Display + ?Sized>(node: &N) -> Self {
        Error::NodeNotFinalized {
            node: node.to_string(),
        }
    }

    pub fn distance_overflow<A, B>(from: &A, to: &B) -> Self
    where
        A: fmt::Display + ?Sized,
        B: fmt::Display + ?Sized,
    {
        Error::DistanceOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Convenience result type for wayfind operations
pub type Result<T> = std::result::Result<T, Error>;
