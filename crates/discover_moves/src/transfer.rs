//! TRANSFER — merge two signatures' first sorts via a fresh transfer map.

use discover_ast::{Axiom, AxiomKind, Expression, Operation, Signature, Sort};

use crate::common::binary_operation_names;
use crate::result::{MoveKind, MoveResult};

/// Prefix every operation name occurring in `expr` (applications and
/// constants alike) with `prefix`. Variables are left untouched.
fn rename_ops(expr: &Expression, prefix: &str) -> Expression {
    match expr {
        Expression::Variable(name) => Expression::Variable(name.clone()),
        Expression::Constant(name) => Expression::Constant(format!("{prefix}{name}")),
        Expression::Application { operation, args } => Expression::Application {
            operation: format!("{prefix}{operation}"),
            args: args.iter().map(|a| rename_ops(a, prefix)).collect(),
        },
        Expression::Equation { lhs, rhs } => Expression::Equation {
            lhs: Box::new(rename_ops(lhs, prefix)),
            rhs: Box::new(rename_ops(rhs, prefix)),
        },
    }
}

fn copy_operations(sig: &Signature, prefix: &str, sort_name: &str) -> Vec<Operation> {
    sig.operations
        .iter()
        .map(|op| Operation {
            name: format!("{prefix}{}", op.name),
            domain: op.domain.iter().map(|_| sort_name.to_string()).collect(),
            codomain: sort_name.to_string(),
        })
        .collect()
}

fn copy_axioms(sig: &Signature, prefix: &str) -> Vec<Axiom> {
    sig.axioms
        .iter()
        .map(|axiom| Axiom {
            kind: axiom.kind,
            equation: rename_ops(&axiom.equation, prefix),
            operations: axiom.operations.iter().map(|o| format!("{prefix}{o}")).collect(),
            description: format!("{prefix}{}", axiom.description),
        })
        .collect()
}

/// Exactly one child: the first sorts of `sig_a` and `sig_b` (renamed on
/// collision), their operations copied under `a_`/`b_` prefixes, a fresh
/// unary `transfer` map between the two sorts, and — if both parents have
/// a binary operation — a functoriality axiom relating `transfer` to each
/// parent's first binary operation.
pub fn apply(sig_a: &Signature, sig_b: &Signature) -> Vec<MoveResult> {
    let (Some(sort_a0), Some(sort_b0)) = (sig_a.sorts.first(), sig_b.sorts.first()) else {
        return Vec::new();
    };

    let sort_a_name = sort_a0.name.clone();
    let sort_b_name = if sort_b0.name == sort_a_name {
        format!("{}_b", sort_b0.name)
    } else {
        sort_b0.name.clone()
    };

    let mut child = Signature::new(format!("transfer({}, {})", sig_a.name, sig_b.name));
    child.sorts.push(Sort::new(sort_a_name.clone()));
    child.sorts.push(Sort::new(sort_b_name.clone()));

    child.operations.extend(copy_operations(sig_a, "a_", &sort_a_name));
    child.operations.extend(copy_operations(sig_b, "b_", &sort_b_name));

    child.axioms.extend(copy_axioms(sig_a, "a_"));
    child.axioms.extend(copy_axioms(sig_b, "b_"));

    child
        .operations
        .push(Operation::unary("transfer", sort_a_name.clone(), sort_b_name.clone()));

    let binaries_a = binary_operation_names(sig_a);
    let binaries_b = binary_operation_names(sig_b);
    if let (Some(op_a), Some(op_b)) = (binaries_a.first(), binaries_b.first()) {
        let a_op = format!("a_{op_a}");
        let b_op = format!("b_{op_b}");
        if let Some(axiom) = Axiom::canonical(
            AxiomKind::Functoriality,
            vec!["transfer".to_string(), a_op.clone(), b_op.clone()],
            format!("transfer is functorial over {a_op}/{b_op}"),
        ) {
            child.axioms.push(axiom);
        }
    }

    child.derivation.push(format!("{}: {} x {}", MoveKind::Transfer.tag(), sig_a.name, sig_b.name));

    vec![MoveResult {
        description: format!("transferred '{}' and '{}' onto a shared transfer map", sig_a.name, sig_b.name),
        signature: child,
        kind: MoveKind::Transfer,
        parents: vec![sig_a.name.clone(), sig_b.name.clone()],
    }]
}
