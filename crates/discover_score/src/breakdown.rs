//! The per-dimension score a signature receives, spec.md §4.6.

use serde::{Deserialize, Serialize};

use crate::weights::Weights;

/// One value per scoring dimension, each normalized to `[0, 1]`. When a
/// signature was scored without a [`crate::ModelSpectrum`],
/// `has_models`, `model_diversity`, `spectrum_pattern`, and
/// `solver_difficulty` are all exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
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

impl ScoreBreakdown {
    /// The exact weighted sum of every dimension under `weights`.
    pub fn total(&self, weights: &Weights) -> f64 {
        self.connectivity * weights.connectivity
            + self.richness * weights.richness
            + self.tension * weights.tension
            + self.economy * weights.economy
            + self.fertility * weights.fertility
            + self.axiom_synergy * weights.axiom_synergy
            + self.has_models * weights.has_models
            + self.model_diversity * weights.model_diversity
            + self.spectrum_pattern * weights.spectrum_pattern
            + self.solver_difficulty * weights.solver_difficulty
            + self.is_novel * weights.is_novel
            + self.distance * weights.distance
    }
}
