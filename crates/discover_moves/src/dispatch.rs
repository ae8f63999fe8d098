//! Uniform entry point applying every allowed move kind over a frontier
//! of candidate signatures, in a fixed, deterministic order.

use discover_ast::Signature;

use crate::result::{MoveKind, MoveResult};
use crate::{abstract_, complete, deform, dualize, internalize, quotient, self_distrib, transfer};

/// Single-signature moves, dispatched for every signature in `frontier`,
/// in `frontier` order, then in [`MoveKind::ALL`] order among the single
/// moves.
fn apply_single(kind: MoveKind, sig: &Signature) -> Vec<MoveResult> {
    match kind {
        MoveKind::Dualize => dualize::apply(sig),
        MoveKind::Complete => complete::apply(sig),
        MoveKind::Quotient => quotient::apply(sig),
        MoveKind::Internalize => internalize::apply(sig),
        MoveKind::Deform => deform::apply(sig),
        MoveKind::SelfDistrib => self_distrib::apply(sig),
        MoveKind::Abstract | MoveKind::Transfer => Vec::new(),
    }
}

/// Pairwise moves, dispatched once per unordered pair `(frontier[i],
/// frontier[j])` with `i < j`.
fn apply_pairwise(kind: MoveKind, a: &Signature, b: &Signature) -> Vec<MoveResult> {
    match kind {
        MoveKind::Abstract => abstract_::apply(a, b),
        MoveKind::Transfer => transfer::apply(a, b),
        _ => Vec::new(),
    }
}

/// Is `kind` a pairwise (two-signature) move?
pub fn is_pairwise(kind: MoveKind) -> bool {
    matches!(kind, MoveKind::Abstract | MoveKind::Transfer)
}

/// Apply every move in `allowed` to `frontier`, returning every produced
/// [`MoveResult`] in a fixed, deterministic order: for each move kind (in
/// [`MoveKind::ALL`] order), single-signature moves run over every member
/// of `frontier` in order; pairwise moves run over every unordered pair
/// `(i, j)` with `i < j`, in index order.
///
/// A move that finds no applicable target on some input contributes no
/// entries for that input rather than failing the whole pass — §4.3's
/// "moves must not fail" edge-case policy.
pub fn apply_all(frontier: &[Signature], allowed: &[MoveKind]) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for &kind in MoveKind::ALL {
        if !allowed.contains(&kind) {
            continue;
        }
        if is_pairwise(kind) {
            for i in 0..frontier.len() {
                for j in (i + 1)..frontier.len() {
                    out.extend(apply_pairwise(kind, &frontier[i], &frontier[j]));
                }
            }
        } else {
            for sig in frontier {
                out.extend(apply_single(kind, sig));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "associativity").unwrap());
        sig
    }

    #[test]
    fn single_signature_moves_fire_for_each_allowed_kind() {
        let frontier = vec![semigroup()];
        let results = apply_all(&frontier, &[MoveKind::Dualize, MoveKind::Complete]);
        assert!(results.iter().any(|r| r.kind == MoveKind::Dualize));
        assert!(results.iter().any(|r| r.kind == MoveKind::Complete));
    }

    #[test]
    fn disallowed_kinds_are_never_dispatched() {
        let frontier = vec![semigroup()];
        let results = apply_all(&frontier, &[MoveKind::Quotient]);
        assert!(results.iter().all(|r| r.kind == MoveKind::Quotient));
    }

    #[test]
    fn pairwise_moves_run_once_per_unordered_pair() {
        let frontier = vec![semigroup(), semigroup(), semigroup()];
        let results = apply_all(&frontier, &[MoveKind::Abstract]);
        // C(3,2) = 3 pairs, each yields one ABSTRACT child (shared associativity).
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn empty_frontier_yields_no_results() {
        assert!(apply_all(&[], MoveKind::ALL).is_empty());
    }

    #[test]
    fn moves_finding_no_target_contribute_nothing_without_failing() {
        let trivial = Signature::new("empty");
        let frontier = vec![trivial];
        // No binary ops at all: dualize/quotient/internalize/self-distrib all no-op.
        let results = apply_all(&frontier, &[MoveKind::Dualize, MoveKind::Quotient, MoveKind::Internalize, MoveKind::SelfDistrib]);
        assert!(results.is_empty());
    }
}
