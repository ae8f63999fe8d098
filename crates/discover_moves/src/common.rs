//! Helpers shared by every move implementation.

use discover_ast::{Axiom, AxiomKind, Signature};

/// Does `sig` already carry an axiom of `kind` whose operations list
/// starts with `op`?
///
/// Moves use this to decide whether a canonical axiom still needs to be
/// added, per the "skip a child that would duplicate an existing axiom"
/// edge-case policy.
pub fn has_axiom_kind_on(sig: &Signature, kind: AxiomKind, op: &str) -> bool {
    sig.axioms
        .iter()
        .any(|a| a.kind == kind && a.operations.first().map(|s| s.as_str()) == Some(op))
}

/// Does `sig` carry any axiom of exactly this kind, regardless of which
/// operations it names?
pub fn has_axiom_kind(sig: &Signature, kind: AxiomKind) -> bool {
    sig.axioms.iter().any(|a| a.kind == kind)
}

/// All binary (arity-2) operation names in `sig`, in declaration order.
pub fn binary_operation_names(sig: &Signature) -> Vec<String> {
    sig.operations
        .iter()
        .filter(|op| op.arity() == 2)
        .map(|op| op.name.clone())
        .collect()
}

/// A name derived from `base` that does not collide with any existing
/// sort or operation name in `sig`.
pub fn fresh_name(sig: &Signature, base: &str) -> String {
    if !name_in_use(sig, base) {
        return base.to_string();
    }
    for suffix in 2.. {
        let candidate = format!("{base}{suffix}");
        if !name_in_use(sig, &candidate) {
            return candidate;
        }
    }
    unreachable!("suffix search over an unbounded range always terminates")
}

fn name_in_use(sig: &Signature, name: &str) -> bool {
    sig.sorts.iter().any(|s| s.name == name) || sig.operations.iter().any(|op| op.name == name)
}

/// Would appending `axiom` to `sig` duplicate an axiom already present
/// (same kind, same operations list)?
pub fn would_duplicate(sig: &Signature, axiom: &Axiom) -> bool {
    sig.axioms
        .iter()
        .any(|a| a.kind == axiom.kind && a.operations == axiom.operations)
}

/// Clone `sig`, rename it, and append one derivation-chain entry. The
/// returned signature still needs its new sorts/operations/axioms added
/// by the caller.
pub fn begin_child(sig: &Signature, new_name: impl Into<String>, step: impl Into<String>) -> Signature {
    let mut child = sig.clone();
    child.name = new_name.into();
    child.derivation.push(step.into());
    child
}
