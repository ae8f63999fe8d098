//! DUALIZE — append commutativity for each binary operation that lacks it.

use discover_ast::{Axiom, AxiomKind, Signature};

use crate::common::{begin_child, binary_operation_names, has_axiom_kind_on};
use crate::result::{MoveKind, MoveResult};

/// One child per binary operation of `sig` not already tagged
/// `COMMUTATIVITY`, each with that axiom appended for just that operation.
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for op in binary_operation_names(sig) {
        if has_axiom_kind_on(sig, AxiomKind::Commutativity, &op) {
            continue;
        }
        let axiom = match Axiom::canonical(AxiomKind::Commutativity, vec![op.clone()], format!("commutativity of {op}")) {
            Some(a) => a,
            None => continue,
        };
        let mut child = begin_child(sig, format!("dual({}, {op})", sig.name), format!("{}: {op}", MoveKind::Dualize.tag()));
        child.axioms.push(axiom);
        out.push(MoveResult {
            description: format!("added commutativity of '{op}' to '{}'", sig.name),
            signature: child,
            kind: MoveKind::Dualize,
            parents: vec![sig.name.clone()],
        });
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
    fn non_commutative_binary_op_gets_a_child() {
        let results = apply(&magma());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].signature.axioms[0].kind, AxiomKind::Commutativity);
    }

    #[test]
    fn already_commutative_op_is_skipped() {
        let mut sig = magma();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "commutativity").unwrap());
        assert!(apply(&sig).is_empty());
    }

    #[test]
    fn multiple_binary_operations_each_get_their_own_child() {
        let mut sig = magma();
        sig.operations.push(Operation::binary("add", "S", "S", "S"));
        let results = apply(&sig);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn nullary_and_unary_operations_are_ignored() {
        let mut sig = Signature::new("seed");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::constant("e", "S"));
        sig.operations.push(Operation::unary("inv", "S", "S"));
        assert!(apply(&sig).is_empty());
    }
}
