//! INTERNALIZE — reify each binary operation as a curried evaluation map.

use discover_ast::{Axiom, Expression, Operation, Signature, Sort};

use crate::common::{begin_child, binary_operation_names, fresh_name};
use crate::result::{MoveKind, MoveResult};

/// One child per binary operation `f`, adding a fresh sort `Hom_f`, an
/// evaluation map `eval_f: Hom_f x S -> S`, a currying map
/// `curry_f: S -> Hom_f`, and the axiom
/// `eval_f(curry_f(a), b) = f(a, b)`.
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for f in binary_operation_names(sig) {
        let Some(op) = sig.operation(&f) else { continue };
        let s = op.domain[0].clone();

        let hom = fresh_name(sig, &format!("Hom_{f}"));
        let eval = fresh_name(sig, &format!("eval_{f}"));
        let curry = fresh_name(sig, &format!("curry_{f}"));

        let a = Expression::var("a");
        let b = Expression::var("b");
        let lhs = Expression::apply(&eval, vec![Expression::apply(&curry, vec![a.clone()]), b.clone()]);
        let rhs = Expression::apply(&f, vec![a, b]);
        let axiom = Axiom::custom(
            Expression::eq(lhs, rhs),
            vec![eval.clone(), curry.clone(), f.clone()],
            format!("{eval}(curry, b) internalizes {f}"),
        );

        let mut child = begin_child(
            sig,
            format!("internalize({}, {f})", sig.name),
            format!("{}: {f}", MoveKind::Internalize.tag()),
        );
        child.sorts.push(Sort::new(hom.clone()));
        child.operations.push(Operation::binary(eval.clone(), hom.clone(), s.clone(), s.clone()));
        child.operations.push(Operation::unary(curry.clone(), s, hom));
        child.axioms.push(axiom);

        out.push(MoveResult {
            description: format!("internalized '{f}' in '{}' as {eval}/{curry}", sig.name),
            signature: child,
            kind: MoveKind::Internalize,
            parents: vec![sig.name.clone()],
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magma() -> Signature {
        let mut sig = Signature::new("magma");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig
    }

    #[test]
    fn internalize_adds_hom_sort_and_two_operations() {
        let results = apply(&magma());
        assert_eq!(results.len(), 1);
        let child = &results[0].signature;
        assert!(child.sorts.iter().any(|s| s.name == "Hom_mul"));
        assert!(child.operations.iter().any(|o| o.name == "eval_mul"));
        assert!(child.operations.iter().any(|o| o.name == "curry_mul"));
        assert!(child.validate().is_ok());
    }

    #[test]
    fn nullary_and_unary_operations_produce_no_children() {
        let mut sig = Signature::new("seed");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::constant("e", "S"));
        assert!(apply(&sig).is_empty());
    }

    #[test]
    fn one_child_per_binary_operation() {
        let mut sig = magma();
        sig.operations.push(Operation::binary("add", "S", "S", "S"));
        assert_eq!(apply(&sig).len(), 2);
    }
}
