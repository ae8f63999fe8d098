//! QUOTIENT — append commutativity or idempotence per binary operation
//! that lacks it.

use discover_ast::{Axiom, AxiomKind, Signature};

use crate::common::{begin_child, binary_operation_names, has_axiom_kind_on};
use crate::result::{MoveKind, MoveResult};

const KINDS: &[AxiomKind] = &[AxiomKind::Commutativity, AxiomKind::Idempotence];

/// One child per (binary operation, kind) pair from `{COMMUTATIVITY,
/// IDEMPOTENCE}` not already carried by that operation.
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for op in binary_operation_names(sig) {
        for &kind in KINDS {
            if has_axiom_kind_on(sig, kind, &op) {
                continue;
            }
            let axiom = match Axiom::canonical(kind, vec![op.clone()], format!("{} of {op}", kind.name())) {
                Some(a) => a,
                None => continue,
            };
            let mut child = begin_child(
                sig,
                format!("quotient({}, {op}, {})", sig.name, kind.name()),
                format!("{}: {} of {op}", MoveKind::Quotient.tag(), kind.name()),
            );
            child.axioms.push(axiom);
            out.push(MoveResult {
                description: format!("added {} of '{op}' to '{}'", kind.name(), sig.name),
                signature: child,
                kind: MoveKind::Quotient,
                parents: vec![sig.name.clone()],
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Operation, Sort};

    fn magma() -> Signature {
        let mut sig = Signature::new("magma");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig
    }

    #[test]
    fn fresh_op_yields_both_children() {
        let results = apply(&magma());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn already_commutative_op_skips_that_kind_only() {
        let mut sig = magma();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "commutativity").unwrap());
        let results = apply(&sig);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].signature.axioms.last().unwrap().kind, AxiomKind::Idempotence);
    }

    #[test]
    fn fully_quotiented_op_yields_nothing() {
        let mut sig = magma();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "commutativity").unwrap());
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Idempotence, vec!["mul".to_string()], "idempotence").unwrap());
        assert!(apply(&sig).is_empty());
    }
}
