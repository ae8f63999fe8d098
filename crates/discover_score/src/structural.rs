//! The eight structural dimensions: computable from a [`Signature`]
//! alone, with no model finder involved. Spec.md §4.6.

use std::collections::HashSet;

use discover_ast::{AxiomKind, Signature};

/// Single-sorted signatures score 0.5. Multi-sorted signatures score the
/// mean of (fraction of declared sorts mentioned by at least one
/// operation) and (fraction of operations whose domain+codomain touch
/// more than one sort).
pub fn connectivity(sig: &Signature) -> f64 {
    if sig.sorts.len() <= 1 {
        return 0.5;
    }

    let mentioned = sig
        .sorts
        .iter()
        .filter(|sort| sig.operations.iter().any(|op| op.domain.contains(&sort.name) || op.codomain == sort.name))
        .count();
    let fraction_sorts_mentioned = mentioned as f64 / sig.sorts.len() as f64;

    let fraction_ops_multi_sort = if sig.operations.is_empty() {
        0.0
    } else {
        let multi = sig
            .operations
            .iter()
            .filter(|op| {
                let mut touched: Vec<&String> = op.domain.iter().chain(std::iter::once(&op.codomain)).collect();
                touched.sort();
                touched.dedup();
                touched.len() > 1
            })
            .count();
        multi as f64 / sig.operations.len() as f64
    };

    (fraction_sorts_mentioned + fraction_ops_multi_sort) / 2.0
}

/// `r = |axioms| / max(|ops|, 1)`; score `exp(-(r-1)^2)` — peaks at one
/// axiom per operation, falls off on either side.
pub fn richness(sig: &Signature) -> f64 {
    let ops = (sig.operations.len() as f64).max(1.0);
    let r = sig.axioms.len() as f64 / ops;
    (-(r - 1.0).powi(2)).exp()
}

/// `min(|distinct axiom kinds| / 6, 1)`; 0 if there are no axioms at all.
pub fn tension(sig: &Signature) -> f64 {
    if sig.axioms.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&'static str> = sig.axioms.iter().map(|a| a.kind.name()).collect();
    (distinct.len() as f64 / 6.0).min(1.0)
}

/// A bell-shaped penalty over `s = |sorts| + |ops| + |axioms|`: too small
/// a signature is trivial, too large one is unwieldy.
pub fn economy(sig: &Signature) -> f64 {
    let s = (sig.sorts.len() + sig.operations.len() + sig.axioms.len()) as f64;
    if s <= 2.0 {
        0.4
    } else if s <= 12.0 {
        1.0 - (s - 5.0).max(0.0) * 0.08
    } else {
        (1.0 - s * 0.06).max(0.1)
    }
}

/// Mean of `min(|sorts|/3, 1)` and `min(|binary ops|/3, 1)` — how much
/// raw material a signature offers the move engine.
pub fn fertility(sig: &Signature) -> f64 {
    let binary_ops = sig.operations.iter().filter(|op| op.arity() == 2).count();
    let sorts_term = (sig.sorts.len() as f64 / 3.0).min(1.0);
    let binary_term = (binary_ops as f64 / 3.0).min(1.0);
    (sorts_term + binary_term) / 2.0
}

/// Per binary op, does its axiom-kind set show a known synergistic
/// pairing (both self-distributivity laws, or idempotence with
/// self-distributivity)? Dimension is the max over binary ops.
pub fn axiom_synergy(sig: &Signature) -> f64 {
    let mut best = 0.0f64;
    for op in sig.operations.iter().filter(|op| op.arity() == 2) {
        let kinds: HashSet<AxiomKind> = sig
            .axioms
            .iter()
            .filter(|axiom| axiom.operations.contains(&op.name))
            .map(|axiom| axiom.kind)
            .collect();
        let score = if kinds.contains(&AxiomKind::SelfDistributivity) && kinds.contains(&AxiomKind::RightSelfDistributivity) {
            1.0
        } else if kinds.contains(&AxiomKind::Idempotence) && kinds.contains(&AxiomKind::SelfDistributivity) {
            0.9
        } else {
            0.0
        };
        best = best.max(score);
    }
    best
}

/// Mean of `min(|derivation_chain|/5, 1)` and `|distinct move tags in
/// chain|/8` — how far and how variedly a signature has been derived
/// from its seed. A derivation entry is `"TAG: detail"`; the tag is
/// everything before the first `:`.
pub fn distance(sig: &Signature) -> f64 {
    let chain_term = (sig.derivation.len() as f64 / 5.0).min(1.0);
    let distinct_tags: HashSet<&str> = sig
        .derivation
        .iter()
        .map(|step| step.split(':').next().unwrap_or(step.as_str()).trim())
        .collect();
    let tag_term = distinct_tags.len() as f64 / 8.0;
    (chain_term + tag_term) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, Operation, Sort};

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms.push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn single_sorted_connectivity_is_half() {
        assert_eq!(connectivity(&semigroup()), 0.5);
    }

    #[test]
    fn multi_sorted_connectivity_rewards_cross_sort_operations() {
        let mut sig = semigroup();
        sig.sorts.push(Sort::new("T"));
        sig.operations.push(Operation::unary("embed", "S", "T"));
        let score = connectivity(&sig);
        assert!(score > 0.0 && score <= 1.0);
    }

    #[test]
    fn richness_peaks_at_one_axiom_per_operation() {
        assert_eq!(richness(&semigroup()), 1.0);
    }

    #[test]
    fn richness_falls_off_away_from_the_peak() {
        let mut sig = semigroup();
        sig.operations.push(Operation::binary("add", "S", "S", "S"));
        assert!(richness(&sig) < 1.0);
    }

    #[test]
    fn tension_is_zero_with_no_axioms() {
        assert_eq!(tension(&Signature::new("empty")), 0.0);
    }

    #[test]
    fn tension_grows_with_distinct_axiom_kinds() {
        let mut sig = semigroup();
        sig.axioms.push(Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "comm").unwrap());
        assert!(tension(&sig) > tension(&semigroup()));
    }

    #[test]
    fn economy_penalizes_trivial_signatures() {
        assert_eq!(economy(&Signature::new("empty")), 0.4);
    }

    #[test]
    fn economy_penalizes_oversized_signatures() {
        let mut sig = semigroup();
        for i in 0..30 {
            sig.operations.push(Operation::constant(format!("c{i}"), "S"));
        }
        assert!(economy(&sig) >= 0.1 && economy(&sig) < 0.5);
    }

    #[test]
    fn fertility_rewards_sorts_and_binary_ops() {
        assert!(fertility(&semigroup()) > 0.0);
        assert_eq!(fertility(&Signature::new("empty")), 0.0);
    }

    #[test]
    fn axiom_synergy_rewards_both_self_distrib_laws() {
        let mut sig = semigroup();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::SelfDistributivity, vec!["mul".to_string()], "sd").unwrap());
        sig.axioms
            .push(Axiom::canonical(AxiomKind::RightSelfDistributivity, vec!["mul".to_string()], "rsd").unwrap());
        assert_eq!(axiom_synergy(&sig), 1.0);
    }

    #[test]
    fn axiom_synergy_is_zero_with_no_binary_ops() {
        assert_eq!(axiom_synergy(&Signature::new("empty")), 0.0);
    }

    #[test]
    fn distance_grows_with_chain_length_and_tag_variety() {
        let sig = Signature::new("child").with_derivation_step("ABSTRACT: s").with_derivation_step("DUALIZE: mul");
        assert!(distance(&sig) > distance(&Signature::new("seed")));
    }
}
