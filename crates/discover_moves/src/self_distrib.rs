//! SELF_DISTRIB — add left and/or right self-distributivity per binary
//! operation.

use discover_ast::{Axiom, AxiomKind, Signature};

use crate::common::{begin_child, binary_operation_names, has_axiom_kind_on};
use crate::result::{MoveKind, MoveResult};

/// For each binary operation, independently:
///
/// - a "left-only" child adding left self-distributivity
///   `a op (b op c) = (a op b) op (a op c)`, if absent;
/// - a "full" child adding whichever of left/right self-distributivity
///   were not already present, skipped entirely if both are present.
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for op in binary_operation_names(sig) {
        out.extend(left_only(sig, &op));
        out.extend(full(sig, &op));
    }
    out
}

fn left_only(sig: &Signature, op: &str) -> Vec<MoveResult> {
    if has_axiom_kind_on(sig, AxiomKind::SelfDistributivity, op) {
        return Vec::new();
    }
    let Some(axiom) = Axiom::canonical(
        AxiomKind::SelfDistributivity,
        vec![op.to_string()],
        format!("left self-distributivity of {op}"),
    ) else {
        return Vec::new();
    };
    let mut child = begin_child(
        sig,
        format!("sd({}, {op})", sig.name),
        format!("{}: left self-distributivity of {op}", MoveKind::SelfDistrib.tag()),
    );
    child.axioms.push(axiom);
    vec![MoveResult {
        description: format!("added left self-distributivity of '{op}' to '{}'", sig.name),
        signature: child,
        kind: MoveKind::SelfDistrib,
        parents: vec![sig.name.clone()],
    }]
}

fn full(sig: &Signature, op: &str) -> Vec<MoveResult> {
    let has_left = has_axiom_kind_on(sig, AxiomKind::SelfDistributivity, op);
    let has_right = has_axiom_kind_on(sig, AxiomKind::RightSelfDistributivity, op);
    if has_left && has_right {
        return Vec::new();
    }

    let mut child = begin_child(
        sig,
        format!("fsd({}, {op})", sig.name),
        format!("{}: full self-distributivity of {op}", MoveKind::SelfDistrib.tag()),
    );
    if !has_left {
        if let Some(axiom) = Axiom::canonical(
            AxiomKind::SelfDistributivity,
            vec![op.to_string()],
            format!("left self-distributivity of {op}"),
        ) {
            child.axioms.push(axiom);
        }
    }
    if !has_right {
        if let Some(axiom) = Axiom::canonical(
            AxiomKind::RightSelfDistributivity,
            vec![op.to_string()],
            format!("right self-distributivity of {op}"),
        ) {
            child.axioms.push(axiom);
        }
    }

    vec![MoveResult {
        description: format!("added full self-distributivity of '{op}' to '{}'", sig.name),
        signature: child,
        kind: MoveKind::SelfDistrib,
        parents: vec![sig.name.clone()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Operation, Sort};

    fn ring_like() -> Signature {
        let mut sig = Signature::new("ring");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("add", "S", "S", "S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig
    }

    #[test]
    fn fresh_operation_yields_left_only_and_full_children() {
        let results = left_only(&ring_like(), "add");
        assert_eq!(results.len(), 1);
        let full_results = full(&ring_like(), "add");
        assert_eq!(full_results.len(), 1);
        assert_eq!(full_results[0].signature.axioms.len(), 2);
    }

    #[test]
    fn two_binary_operations_yield_up_to_four_children() {
        let results = apply(&ring_like());
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn both_axioms_present_skips_full_child() {
        let mut sig = ring_like();
        sig.axioms.push(
            Axiom::canonical(AxiomKind::SelfDistributivity, vec!["add".to_string()], "left sd").unwrap(),
        );
        sig.axioms.push(
            Axiom::canonical(AxiomKind::RightSelfDistributivity, vec!["add".to_string()], "right sd").unwrap(),
        );
        assert!(full(&sig, "add").is_empty());
        assert!(left_only(&sig, "add").is_empty());
    }

    #[test]
    fn full_child_only_adds_the_missing_side() {
        let mut sig = ring_like();
        sig.axioms.push(
            Axiom::canonical(AxiomKind::SelfDistributivity, vec!["add".to_string()], "left sd").unwrap(),
        );
        let results = full(&sig, "add");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].signature.axioms.len(), 1);
        assert_eq!(results[0].signature.axioms[0].kind, AxiomKind::RightSelfDistributivity);
    }

    #[test]
    fn deformed_signature_still_validates() {
        for r in apply(&ring_like()) {
            assert!(r.signature.validate().is_ok());
        }
    }
}
