//! ABSTRACT — lift axiom kinds shared by two signatures onto one fresh
//! abstract operation.

use std::collections::BTreeSet;

use discover_ast::{Axiom, AxiomKind, Operation, Signature, Sort};

use crate::result::{MoveKind, MoveResult};

/// Kinds whose canonical equation needs exactly one operation name —
/// the only kinds `ABSTRACT` can lift onto a single shared operation.
const LIFTABLE: &[AxiomKind] = &[
    AxiomKind::Associativity,
    AxiomKind::Commutativity,
    AxiomKind::Idempotence,
];

/// Produce a single child whose axioms are the canonical forms of every
/// axiom kind present in both `sig_a` and `sig_b` and liftable onto one
/// operation. Empty if no such kind survives.
pub fn apply(sig_a: &Signature, sig_b: &Signature) -> Vec<MoveResult> {
    let kinds_a: BTreeSet<AxiomKind> = sig_a.axioms.iter().map(|a| a.kind).collect();
    let kinds_b: BTreeSet<AxiomKind> = sig_b.axioms.iter().map(|a| a.kind).collect();

    let shared: Vec<AxiomKind> = LIFTABLE
        .iter()
        .copied()
        .filter(|k| kinds_a.contains(k) && kinds_b.contains(k))
        .collect();

    if shared.is_empty() {
        return Vec::new();
    }

    let mut child = Signature::new(format!("abstract({}, {})", sig_a.name, sig_b.name));
    child.sorts.push(Sort::new("S"));
    child.operations.push(Operation::binary("op", "S", "S", "S"));

    let mut kind_names = Vec::new();
    for kind in &shared {
        if let Some(axiom) = Axiom::canonical(*kind, vec!["op".to_string()], format!("{} of op", kind.name())) {
            child.axioms.push(axiom);
            kind_names.push(kind.name());
        }
    }
    child
        .derivation
        .push(format!("{}: shared kinds {}", MoveKind::Abstract.tag(), kind_names.join(",")));

    vec![MoveResult {
        description: format!(
            "abstracted shared axiom kinds [{}] of '{}' and '{}' onto a single operation",
            kind_names.join(", "),
            sig_a.name,
            sig_b.name
        ),
        signature: child,
        kind: MoveKind::Abstract,
        parents: vec![sig_a.name.clone(), sig_b.name.clone()],
    }]
}
