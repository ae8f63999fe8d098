//! Per-dimension weights for the twelve-dimension score, spec.md §4.6.

use serde::{Deserialize, Serialize};

/// One weight per scoring dimension. The default table sums to 1.0;
/// callers may substitute their own to bias a run, e.g. toward novelty
/// over model-theoretic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub connectivity: f64,
    pub richness: f64,
    pub tension: f64,
    pub economy: f64,
    pub fertility: f64,
    pub axiom_synergy: f64,
    pub has_models: f64,
    pub model_diversity: f64,
    pub spectrum_pattern: f64,
    pub solver_difficulty: f64,
    pub is_novel: f64,
    pub distance: f64,
}

impl Weights {
    /// The sum of every weight; the default table sums to 1.0.
    pub fn sum(&self) -> f64 {
        self.connectivity
            + self.richness
            + self.tension
            + self.economy
            + self.fertility
            + self.axiom_synergy
            + self.has_models
            + self.model_diversity
            + self.spectrum_pattern
            + self.solver_difficulty
            + self.is_novel
            + self.distance
    }
}

impl Default for Weights {
    fn default() -> Self {
        let weights = Self {
            connectivity: 0.05,
            richness: 0.08,
            tension: 0.08,
            economy: 0.10,
            fertility: 0.03,
            axiom_synergy: 0.06,
            has_models: 0.15,
            model_diversity: 0.10,
            spectrum_pattern: 0.10,
            solver_difficulty: 0.05,
            is_novel: 0.15,
            distance: 0.05,
        };
        debug_assert!((weights.sum() - 1.0).abs() < 1e-9, "default weights must sum to 1.0");
        weights
    }
}
