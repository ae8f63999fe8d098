//! COMPLETE — fill in identities, inverses, a second distributing
//! operation, and a positivity marker.

use discover_ast::{Axiom, AxiomKind, Operation, Signature, Sort};

use crate::common::{begin_child, binary_operation_names, fresh_name, has_axiom_kind_on};
use crate::result::{MoveKind, MoveResult};

/// Four independent productions, described in full at [`apply`].
pub fn apply(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    out.extend(identities(sig));
    out.extend(inverses(sig));
    out.extend(second_distributing_operation(sig));
    out.extend(positivity_marker(sig));
    out
}

/// (a) For each binary operation without an `IDENTITY` axiom, add a
/// fresh nullary constant and the right-identity axiom over it.
fn identities(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for op in binary_operation_names(sig) {
        if has_axiom_kind_on(sig, AxiomKind::Identity, &op) {
            continue;
        }
        let e = fresh_name(sig, &format!("e_{op}"));
        let axiom = match Axiom::canonical(AxiomKind::Identity, vec![op.clone(), e.clone()], format!("identity of {op}")) {
            Some(a) => a,
            None => continue,
        };
        let mut child = begin_child(sig, format!("complete_id({}, {op})", sig.name), format!("{}: identity of {op}", MoveKind::Complete.tag()));
        let sort_name = sig
            .operation(&op)
            .map(|o| o.codomain.clone())
            .unwrap_or_else(|| "S".to_string());
        child.operations.push(Operation::constant(e.clone(), sort_name));
        child.axioms.push(axiom);
        out.push(MoveResult {
            description: format!("added identity '{e}' for '{op}' in '{}'", sig.name),
            signature: child,
            kind: MoveKind::Complete,
            parents: vec![sig.name.clone()],
        });
    }
    out
}

/// (b) For each binary operation that has an identity but no `INVERSE`
/// axiom, add a fresh unary operation and the right-inverse axiom,
/// reusing the identity constant named in the existing identity axiom.
fn inverses(sig: &Signature) -> Vec<MoveResult> {
    let mut out = Vec::new();
    for op in binary_operation_names(sig) {
        if has_axiom_kind_on(sig, AxiomKind::Inverse, &op) {
            continue;
        }
        let identity_axiom = sig
            .axioms
            .iter()
            .find(|a| a.kind == AxiomKind::Identity && a.operations.first().map(|s| s.as_str()) == Some(op.as_str()));
        let Some(identity_axiom) = identity_axiom else {
            continue;
        };
        let Some(e) = identity_axiom.operations.get(1).cloned() else {
            continue;
        };
        let inv = fresh_name(sig, &format!("inv_{op}"));
        let axiom = match Axiom::canonical(
            AxiomKind::Inverse,
            vec![op.clone(), inv.clone(), e.clone()],
            format!("inverse of {op}"),
        ) {
            Some(a) => a,
            None => continue,
        };
        let mut child = begin_child(sig, format!("complete_inv({}, {op})", sig.name), format!("{}: inverse of {op}", MoveKind::Complete.tag()));
        let sort_name = sig
            .operation(&op)
            .map(|o| o.codomain.clone())
            .unwrap_or_else(|| "S".to_string());
        child.operations.push(Operation::unary(inv.clone(), sort_name.clone(), sort_name));
        child.axioms.push(axiom);
        out.push(MoveResult {
            description: format!("added inverse '{inv}' for '{op}' in '{}'", sig.name),
            signature: child,
            kind: MoveKind::Complete,
            parents: vec![sig.name.clone()],
        });
    }
    out
}

/// (c) If `sig` has exactly one binary operation, add a second binary
/// operation left-distributing over it.
fn second_distributing_operation(sig: &Signature) -> Vec<MoveResult> {
    let binaries = binary_operation_names(sig);
    if binaries.len() != 1 {
        return Vec::new();
    }
    let op = &binaries[0];
    let op2 = fresh_name(sig, "op2");
    let axiom = match Axiom::canonical(
        AxiomKind::Distributivity,
        vec![op2.clone(), op.clone()],
        format!("{op2} distributes over {op}"),
    ) {
        Some(a) => a,
        None => return Vec::new(),
    };
    let sort_name = sig
        .operation(op)
        .map(|o| o.codomain.clone())
        .unwrap_or_else(|| "S".to_string());
    let mut child = begin_child(
        sig,
        format!("complete_distrib({})", sig.name),
        format!("{}: {op2} distributes over {op}", MoveKind::Complete.tag()),
    );
    child
        .operations
        .push(Operation::binary(op2.clone(), sort_name.clone(), sort_name.clone(), sort_name));
    child.axioms.push(axiom);
    vec![MoveResult {
        description: format!("added '{op2}' distributing over '{op}' in '{}'", sig.name),
        signature: child,
        kind: MoveKind::Complete,
        parents: vec![sig.name.clone()],
    }]
}

/// (d) Add a fresh unary `norm` operation with a `POSITIVITY`-tagged
/// marker axiom.
fn positivity_marker(sig: &Signature) -> Vec<MoveResult> {
    let Some(first_sort) = sig.sorts.first().map(|s| s.name.clone()) else {
        return Vec::new();
    };
    let norm = fresh_name(sig, "norm");
    let axiom = match Axiom::canonical(AxiomKind::Positivity, vec![norm.clone()], format!("positivity of {norm}")) {
        Some(a) => a,
        None => return Vec::new(),
    };
    let mut child = begin_child(sig, format!("complete_norm({})", sig.name), format!("{}: positivity marker {norm}", MoveKind::Complete.tag()));
    child
        .operations
        .push(Operation::unary(norm.clone(), first_sort.clone(), first_sort));
    child.axioms.push(axiom);
    vec![MoveResult {
        description: format!("added positivity marker '{norm}' to '{}'", sig.name),
        signature: child,
        kind: MoveKind::Complete,
        parents: vec![sig.name.clone()],
    }]
}
