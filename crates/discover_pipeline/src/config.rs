//! Pipeline configuration: depth, allowed moves, model-size range, solver
//! timeout, the structural pre-filter threshold, top-N, and the optional
//! worker count for §5's "optional layer" parallelism.

use discover_moves::MoveKind;
use discover_score::Weights;

/// Tunables for one call to [`crate::run`]. `Default` mirrors the
/// teacher's `Config`-struct-with-`Default` convention (see
/// `Verifier::new()`'s built-in 10-second timeout): a run with no
/// explicit configuration still does something reasonable.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many move-engine rounds to run, per §4.7's iterative-deepening
    /// loop. `depth = 1` applies moves once to the seed set.
    pub depth: usize,
    /// Which of the eight move kinds `apply_all` is allowed to use.
    pub allowed_moves: Vec<MoveKind>,
    /// Smallest domain size the model finder sweeps.
    pub min_model_size: usize,
    /// Largest domain size the model finder sweeps.
    pub max_model_size: usize,
    /// Model-count cap per size, passed to [`discover_model::compute_spectrum`].
    pub max_models_per_size: usize,
    /// Per-solver-call timeout in milliseconds.
    pub solver_timeout_ms: u64,
    /// A candidate's cheap structural score must meet or exceed this to
    /// survive the first scoring pass (§4.7).
    pub structural_threshold: f64,
    /// How many structural-score survivors are sent to the model finder.
    pub top_n: usize,
    /// Worker count for the optional parallel model-checking pass. `None`
    /// or `Some(1)` runs sequentially.
    pub workers: Option<usize>,
    /// The weight table used for both the cheap structural pass and the
    /// full post-spectrum score.
    pub weights: Weights,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            allowed_moves: MoveKind::ALL.to_vec(),
            min_model_size: 2,
            max_model_size: 4,
            max_models_per_size: 5,
            solver_timeout_ms: 5_000,
            structural_threshold: 0.0,
            top_n: 20,
            workers: None,
            weights: Weights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_allows_every_move() {
        assert_eq!(PipelineConfig::default().allowed_moves, MoveKind::ALL.to_vec());
    }

    #[test]
    fn default_config_runs_sequentially() {
        assert_eq!(PipelineConfig::default().workers, None);
    }
}
