//! Canonical fingerprints: a cheap, deliberately lossy novelty filter.
//!
//! A fingerprint is not an isomorphism oracle. Two signatures can have the
//! same fingerprint and not be isomorphic; a fingerprint collision is only
//! ever used to group candidates for the more expensive model-level
//! novelty check downstream, never to assert structures are equivalent.

use sha2::{Digest, Sha256};

use crate::signature::Signature;

/// A 16-hex-character digest over a signature's sort count, sorted
/// operation arities, and sorted axiom kind names.
pub fn fingerprint(signature: &Signature) -> String {
    let mut arities: Vec<usize> = signature.operations.iter().map(|op| op.arity()).collect();
    arities.sort_unstable();

    let mut axiom_kinds: Vec<&str> = signature.axioms.iter().map(|a| a.kind.name()).collect();
    axiom_kinds.sort_unstable();

    let canonical = format!(
        "{{\"sorts\":{},\"arities\":{:?},\"axioms\":{:?}}}",
        signature.sorts.len(),
        arities,
        axiom_kinds,
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();

    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axiom::{Axiom, AxiomKind};
    use crate::operation::Operation;
    use crate::sort::Sort;

    fn group_like() -> Signature {
        let mut sig = Signature::new("group-like");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.operations.push(Operation::constant("e", "S"));
        sig.axioms.push(
            Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "associativity").unwrap(),
        );
        sig
    }

    #[test]
    fn fingerprint_is_sixteen_hex_chars() {
        let fp = fingerprint(&group_like());
        assert_eq!(fp.len(), 16);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint(&group_like()), fingerprint(&group_like()));
    }

    #[test]
    fn renaming_operations_does_not_change_fingerprint() {
        let mut renamed = group_like();
        renamed.operations[0].name = "star".to_string();
        renamed.axioms[0].operations = vec!["star".to_string()];
        assert_eq!(fingerprint(&group_like()), fingerprint(&renamed));
    }

    #[test]
    fn different_axiom_kinds_change_fingerprint() {
        let mut other = group_like();
        other.axioms[0] = Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "commutativity")
            .unwrap();
        assert_ne!(fingerprint(&group_like()), fingerprint(&other));
    }

    #[test]
    fn extra_unrelated_operation_changes_fingerprint() {
        let mut extended = group_like();
        extended.operations.push(Operation::unary("inv", "S", "S"));
        assert_ne!(fingerprint(&group_like()), fingerprint(&extended));
    }
}
