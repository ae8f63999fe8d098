//! The twelve-dimension scoring engine, spec.md §4.6.
//!
//! [`score`] reduces a [`Signature`] (and, optionally, a
//! [`discover_model::ModelSpectrum`] and a known-fingerprint set) to a
//! [`ScoreBreakdown`]: twelve dimensions in `[0, 1]`, four of them
//! structural-only, four model-theoretic, one novelty, one derivation
//! "distance". [`ScoreBreakdown::total`] reduces that further to a
//! single number under a [`Weights`] table.

pub mod breakdown;
pub mod model;
pub mod novelty;
pub mod structural;
pub mod weights;

pub use breakdown::ScoreBreakdown;
pub use weights::Weights;

use std::collections::HashSet;

use discover_ast::Signature;
use discover_model::ModelSpectrum;

/// Score `sig` along all twelve dimensions. `spectrum` is `None` for a
/// signature that has not yet been through the model finder — the four
/// model-theoretic dimensions are then exactly `0.0`, the two-phase
/// scoring split described in §4.7 (a cheap structural pass, then a
/// model-checked pass only for the survivors).
pub fn score(sig: &Signature, spectrum: Option<&ModelSpectrum>, known_fingerprints: Option<&HashSet<String>>) -> ScoreBreakdown {
    let fingerprint = discover_ast::fingerprint(sig);
    ScoreBreakdown {
        connectivity: structural::connectivity(sig),
        richness: structural::richness(sig),
        tension: structural::tension(sig),
        economy: structural::economy(sig),
        fertility: structural::fertility(sig),
        axiom_synergy: structural::axiom_synergy(sig),
        has_models: model::has_models(spectrum),
        model_diversity: model::model_diversity(spectrum),
        spectrum_pattern: model::spectrum_pattern(spectrum),
        solver_difficulty: model::solver_difficulty(spectrum),
        is_novel: novelty::is_novel(&fingerprint, known_fingerprints),
        distance: structural::distance(sig),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms.push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn missing_spectrum_zeroes_all_four_model_dimensions() {
        let breakdown = score(&semigroup(), None, None);
        assert_eq!(breakdown.has_models, 0.0);
        assert_eq!(breakdown.model_diversity, 0.0);
        assert_eq!(breakdown.spectrum_pattern, 0.0);
        assert_eq!(breakdown.solver_difficulty, 0.0);
    }

    #[test]
    fn structural_ceiling_without_a_spectrum_is_about_0_6() {
        let breakdown = score(&semigroup(), None, None);
        let weights = Weights::default();
        let ceiling = weights.connectivity
            + weights.richness
            + weights.tension
            + weights.economy
            + weights.fertility
            + weights.axiom_synergy
            + weights.is_novel
            + weights.distance;
        assert!(breakdown.total(&weights) <= ceiling + 1e-9);
    }

    #[test]
    fn total_matches_manual_weighted_sum() {
        let breakdown = score(&semigroup(), None, None);
        let weights = Weights::default();
        let manual = breakdown.connectivity * weights.connectivity
            + breakdown.richness * weights.richness
            + breakdown.tension * weights.tension
            + breakdown.economy * weights.economy
            + breakdown.fertility * weights.fertility
            + breakdown.axiom_synergy * weights.axiom_synergy
            + breakdown.has_models * weights.has_models
            + breakdown.model_diversity * weights.model_diversity
            + breakdown.spectrum_pattern * weights.spectrum_pattern
            + breakdown.solver_difficulty * weights.solver_difficulty
            + breakdown.is_novel * weights.is_novel
            + breakdown.distance * weights.distance;
        assert!((breakdown.total(&weights) - manual).abs() < 1e-9);
    }

    #[test]
    fn known_fingerprint_is_not_novel() {
        let sig = semigroup();
        let fp = discover_ast::fingerprint(&sig);
        let known = HashSet::from([fp]);
        let breakdown = score(&sig, None, Some(&known));
        assert_eq!(breakdown.is_novel, 0.0);
    }
}
