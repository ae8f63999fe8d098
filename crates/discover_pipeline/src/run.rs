//! The iterative-deepening driver, spec.md §4.7: alternate between the
//! move engine and a cheap structural prefilter for `depth` rounds, then
//! spend the solver budget only on the survivors that made it to the top
//! of the pile.

use rayon::prelude::*;

use discover_ast::Signature;
use discover_moves::dispatch::apply_all;
use discover_model::{compute_spectrum, SolverBackend};

use crate::cancel::CancellationFlag;
use crate::config::PipelineConfig;
use crate::discovery::Discovery;
use crate::novelty::NoveltyCache;

/// A signature carried between rounds, with its cheap structural score
/// attached so later stages don't recompute it.
struct Candidate {
    signature: Signature,
    structural_score: f64,
}

fn structural_score(sig: &Signature, config: &PipelineConfig) -> f64 {
    discover_score::score(sig, None, None).total(&config.weights)
}

/// One round of the move engine over `frontier`, scored and filtered to
/// `config.structural_threshold`. Signatures already known (by
/// fingerprint) are dropped before scoring — §4.7's "don't pay the
/// scoring cost for a signature already seen this run".
fn expand_round(frontier: &[Signature], config: &PipelineConfig, novelty: &NoveltyCache) -> Vec<Candidate> {
    let results = apply_all(frontier, &config.allowed_moves);
    let mut survivors = Vec::new();
    for result in results {
        let fingerprint = discover_ast::fingerprint(&result.signature);
        if novelty.contains(&fingerprint) {
            continue;
        }
        let score = structural_score(&result.signature, config);
        if score < config.structural_threshold {
            continue;
        }
        survivors.push(Candidate {
            signature: result.signature,
            structural_score: score,
        });
    }
    survivors
}

/// Model-check and fully score one candidate, consulting (and updating)
/// `novelty` for the final novelty dimension.
fn finish_candidate(
    candidate: Candidate,
    config: &PipelineConfig,
    backend: &dyn SolverBackend,
    novelty: &NoveltyCache,
) -> Discovery {
    let sig = candidate.signature;
    let fingerprint = discover_ast::fingerprint(&sig);

    let spectrum = compute_spectrum(
        backend,
        &sig,
        config.min_model_size,
        config.max_model_size,
        config.max_models_per_size,
        config.solver_timeout_ms,
    )
    .ok();

    let known = novelty.snapshot();
    let breakdown = discover_score::score(&sig, spectrum.as_ref(), Some(&known));
    novelty.insert(fingerprint.clone());
    let total = breakdown.total(&config.weights);

    Discovery::new(sig, fingerprint, breakdown, total)
}

/// Run the full iterative-deepening pipeline: `config.depth` rounds of
/// move-engine expansion with a cheap structural prefilter, then
/// model-checking and full scoring for the `config.top_n` best
/// structural survivors (§4.7). Cooperative cancellation is checked
/// between rounds and before each model-checking call; a cancelled run
/// returns whatever it has already scored rather than an error.
pub fn run(
    seeds: Vec<Signature>,
    config: &PipelineConfig,
    backend: &dyn SolverBackend,
    cancel: &CancellationFlag,
) -> Vec<Discovery> {
    let novelty = NoveltyCache::new();
    for seed in &seeds {
        novelty.insert(discover_ast::fingerprint(seed));
    }

    let mut frontier = seeds;
    let mut all_survivors: Vec<Candidate> = Vec::new();

    for round in 0..config.depth {
        if cancel.is_cancelled() {
            tracing::info!(round, "cancellation requested, stopping expansion early");
            break;
        }
        tracing::debug!(round, frontier_size = frontier.len(), "expanding frontier");
        let survivors = expand_round(&frontier, config, &novelty);
        frontier = survivors.iter().map(|c| c.signature.clone()).collect();
        all_survivors.extend(survivors);
    }

    all_survivors.sort_by(|a, b| b.structural_score.partial_cmp(&a.structural_score).unwrap_or(std::cmp::Ordering::Equal));
    all_survivors.truncate(config.top_n);

    if cancel.is_cancelled() {
        return Vec::new();
    }

    let mut discoveries: Vec<Discovery> = match config.workers {
        Some(n) if n > 1 => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .expect("building a bounded rayon thread pool should not fail");
            pool.install(|| {
                all_survivors
                    .into_par_iter()
                    .filter(|_| !cancel.is_cancelled())
                    .map(|candidate| finish_candidate(candidate, config, backend, &novelty))
                    .collect()
            })
        }
        _ => all_survivors
            .into_iter()
            .take_while(|_| !cancel.is_cancelled())
            .map(|candidate| finish_candidate(candidate, config, backend, &novelty))
            .collect(),
    };

    discoveries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    discoveries
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};
    use discover_model::Z3Backend;
    use discover_moves::MoveKind;

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn a_shallow_run_produces_scored_discoveries() {
        let config = PipelineConfig {
            depth: 1,
            allowed_moves: vec![MoveKind::Dualize, MoveKind::Complete],
            min_model_size: 2,
            max_model_size: 2,
            max_models_per_size: 2,
            solver_timeout_ms: 2000,
            structural_threshold: -1.0,
            top_n: 5,
            workers: None,
            weights: discover_score::Weights::default(),
        };
        let discoveries = run(vec![semigroup()], &config, &Z3Backend, &CancellationFlag::new());
        assert!(!discoveries.is_empty());
        for window in discoveries.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn cancelling_before_the_run_yields_nothing() {
        let config = PipelineConfig::default();
        let cancel = CancellationFlag::new();
        cancel.cancel();
        let discoveries = run(vec![semigroup()], &config, &Z3Backend, &cancel);
        assert!(discoveries.is_empty());
    }

    #[test]
    fn top_n_bounds_the_number_of_model_checked_candidates() {
        let config = PipelineConfig {
            depth: 1,
            allowed_moves: vec![MoveKind::Dualize, MoveKind::Complete, MoveKind::Quotient],
            min_model_size: 2,
            max_model_size: 2,
            max_models_per_size: 1,
            solver_timeout_ms: 2000,
            structural_threshold: -1.0,
            top_n: 1,
            workers: None,
            weights: discover_score::Weights::default(),
        };
        let discoveries = run(vec![semigroup()], &config, &Z3Backend, &CancellationFlag::new());
        assert!(discoveries.len() <= 1);
    }
}
