//! Ranking comparison analytics
//!
//! Compares two ranked lists produced for the same query and top-k
//! (typically TF-IDF vs BM25): overlap, per-list score distribution, source
//! diversity, and Spearman rank correlation over the shared documents.

use super::SearchResult;
use crate::loader::DocId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Mean, population standard deviation, and extremes of a score list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest score
    pub min: f64,
    /// Largest score
    pub max: f64,
    /// max - min
    pub range: f64,
}

impl ScoreDistribution {
    /// Compute the distribution of the result scores; all zeros for an empty
    /// list
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            range: max - min,
        }
    }
}

/// Distinct source labels and their frequencies within one ranked list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDiversity {
    /// Number of distinct source labels
    pub distinct: usize,
    /// Occurrences per source label
    pub counts: HashMap<String, usize>,
}

impl SourceDiversity {
    /// Count the source labels of the results
    pub fn from_results(results: &[SearchResult]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for result in results {
            *counts.entry(result.source.clone()).or_insert(0) += 1;
        }
        Self {
            distinct: counts.len(),
            counts,
        }
    }
}

/// Comparison of two ranked lists for the same query and top-k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// The top-k both lists were produced with
    pub top_k: usize,
    /// Size of the doc-id intersection
    pub overlap: usize,
    /// `overlap / top_k * 100`
    pub overlap_pct: f64,
    /// Score distribution of the first list
    pub first_distribution: ScoreDistribution,
    /// Score distribution of the second list
    pub second_distribution: ScoreDistribution,
    /// Source diversity of the first list
    pub first_sources: SourceDiversity,
    /// Source diversity of the second list
    pub second_sources: SourceDiversity,
    /// Spearman rank correlation over the intersecting doc ids; `None` when
    /// fewer than two ids overlap
    pub rank_correlation: Option<f64>,
}

/// Comparative analytics between two rankings
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Compare two ranked lists produced for the same query and `top_k`
    pub fn compare(
        &self,
        first: &[SearchResult],
        second: &[SearchResult],
        top_k: usize,
    ) -> ComparisonReport {
        let first_ids: HashSet<DocId> = first.iter().map(|r| r.doc_id).collect();
        let second_ids: HashSet<DocId> = second.iter().map(|r| r.doc_id).collect();
        let overlap = first_ids.intersection(&second_ids).count();
        let overlap_pct = if top_k > 0 {
            overlap as f64 / top_k as f64 * 100.0
        } else {
            0.0
        };

        ComparisonReport {
            top_k,
            overlap,
            overlap_pct,
            first_distribution: ScoreDistribution::from_results(first),
            second_distribution: ScoreDistribution::from_results(second),
            first_sources: SourceDiversity::from_results(first),
            second_sources: SourceDiversity::from_results(second),
            rank_correlation: spearman(first, second),
        }
    }
}

/// Spearman rank correlation over the intersecting doc ids, using each
/// list's own 0-based rank positions: `1 - 6 * sum(d^2) / (n * (n^2 - 1))`.
/// Undefined (None) below two overlapping ids.
fn spearman(first: &[SearchResult], second: &[SearchResult]) -> Option<f64> {
    let first_ranks: HashMap<DocId, usize> = first
        .iter()
        .enumerate()
        .map(|(rank, r)| (r.doc_id, rank))
        .collect();
    let second_ranks: HashMap<DocId, usize> = second
        .iter()
        .enumerate()
        .map(|(rank, r)| (r.doc_id, rank))
        .collect();

    let mut d_squared_sum = 0.0;
    let mut n = 0usize;
    for (doc_id, &rank_a) in &first_ranks {
        if let Some(&rank_b) = second_ranks.get(doc_id) {
            let d = rank_a as f64 - rank_b as f64;
            d_squared_sum += d * d;
            n += 1;
        }
    }

    if n < 2 {
        return None;
    }
    let n = n as f64;
    Some(1.0 - 6.0 * d_squared_sum / (n * (n * n - 1.0)))
}
