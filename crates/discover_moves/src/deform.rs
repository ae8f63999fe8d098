//! DEFORM — replace a single axiom with a parametrized, `CUSTOM`-tagged
//! variant.

use discover_ast::{Axiom, AxiomKind, Expression, Operation, Signature, Sort};

use crate::common::fresh_name;
use crate::result::{MoveKind, MoveResult};

/// One child per axiom not of kind `CUSTOM` or `POSITIVITY`: that axiom
/// is replaced by a deformed, `CUSTOM`-tagged variant; every other axiom
/// is left untouched.
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for (i, axiom) in sig.axioms.iter().enumerate() {
        if axiom.kind == AxiomKind::Custom || axiom.kind == AxiomKind::Positivity {
            continue;
        }
        let mut child = sig.clone();
        child.name = format!("deform({}, {})", sig.name, i);

        let param = fresh_name(&child, "Param");
        if child.sort(&param).is_none() {
            child.sorts.push(Sort::new(param.clone()));
        }

        let deformed = deform_axiom(&mut child, axiom, &param);
        child.axioms[i] = deformed;
        child
            .derivation
            .push(format!("{}: axiom #{i} ({})", MoveKind::Deform.tag(), axiom.kind.name()));

        out.push(MoveResult {
            description: format!("deformed axiom #{i} ({}) of '{}'", axiom.kind.name(), sig.name),
            signature: child,
            kind: MoveKind::Deform,
            parents: vec![sig.name.clone()],
        });
    }
    out
}

/// Rebuild `axiom`'s equation per its kind, adding the `q_op`/`q`
/// scaffolding to `child` as needed, and return the `CUSTOM`-tagged
/// replacement axiom.
fn deform_axiom(child: &mut Signature, axiom: &Axiom, param: &str) -> Axiom {
    match axiom.kind {
        AxiomKind::Associativity => {
            let op = axiom.operations[0].clone();
            let (q_op, q) = ensure_deform_scaffold(child, &op, param);
            let x = Expression::var("x");
            let y = Expression::var("y");
            let z = Expression::var("z");
            let lhs = Expression::apply(&op, vec![Expression::apply(&op, vec![x.clone(), y.clone()]), z.clone()]);
            let inner = Expression::apply(&op, vec![x, Expression::apply(&op, vec![y, z])]);
            let rhs = Expression::apply(&q_op, vec![Expression::constant(&q), inner]);
            Axiom::custom(
                Expression::eq(lhs, rhs),
                vec![op.clone(), q_op, q],
                format!("deformed associativity of {op}"),
            )
        }
        AxiomKind::Commutativity => {
            let op = axiom.operations[0].clone();
            let (q_op, q) = ensure_deform_scaffold(child, &op, param);
            let x = Expression::var("x");
            let y = Expression::var("y");
            let lhs = Expression::apply(&op, vec![x.clone(), y.clone()]);
            let inner = Expression::apply(&op, vec![y, x]);
            let rhs = Expression::apply(&q_op, vec![Expression::constant(&q), inner]);
            Axiom::custom(
                Expression::eq(lhs, rhs),
                vec![op.clone(), q_op, q],
                format!("deformed commutativity of {op}"),
            )
        }
        _ => Axiom::custom(
            axiom.equation.clone(),
            axiom.operations.clone(),
            format!("deformed (verbatim) {}", axiom.description),
        ),
    }
}

/// Make sure `q_{op}: Param x S -> S` and a `Param`-sorted constant `q`
/// exist on `child`, returning their (possibly already-present) names.
fn ensure_deform_scaffold(child: &mut Signature, op: &str, param: &str) -> (String, String) {
    let q_op = format!("q_{op}");
    let q = "q".to_string();
    let sort_name = child
        .operation(op)
        .map(|o| o.codomain.clone())
        .unwrap_or_else(|| "S".to_string());
    if child.operation(&q_op).is_none() {
        child
            .operations
            .push(Operation::binary(q_op.clone(), param.to_string(), sort_name.clone(), sort_name));
    }
    if child.operation(&q).is_none() {
        child.operations.push(Operation::constant(q.clone(), param.to_string()));
    }
    (q_op, q)
}
