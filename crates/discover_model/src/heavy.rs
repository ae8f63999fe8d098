//! The "heavy signature" predicate driving lex-leader symmetry breaking.

use discover_ast::{AxiomKind, Signature};

/// Axiom kinds whose ground instantiation is cubic (or worse) in the
/// domain size, per §4.4 — associativity-shaped laws over triples.
const HEAVY_KINDS: &[AxiomKind] = &[
    AxiomKind::SelfDistributivity,
    AxiomKind::RightSelfDistributivity,
    AxiomKind::Distributivity,
    AxiomKind::Jacobi,
];

/// Is `sig` "heavy": single-sorted, free of `CUSTOM` axioms, and carrying
/// at least one axiom of a [`HEAVY_KINDS`] kind?
///
/// Heavy signatures get the lex-leader symmetry-breaking constraint
/// (§4.4) on the first binary operation's table; this must be omitted on
/// quasigroup-like (Latin-square) signatures, which the "no CUSTOM
/// axioms" rule in practice covers since those are built via `CUSTOM`
/// axioms in this workspace's move set.
pub fn is_heavy(sig: &Signature) -> bool {
    if sig.sorts.len() != 1 {
        return false;
    }
    if sig.axioms.iter().any(|a| a.kind == AxiomKind::Custom) {
        return false;
    }
    sig.axioms.iter().any(|a| HEAVY_KINDS.contains(&a.kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, Operation, Sort};

    fn base() -> Signature {
        let mut sig = Signature::new("s");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig
    }

    #[test]
    fn self_distributive_signature_is_heavy() {
        let mut sig = base();
        sig.axioms.push(
            Axiom::canonical(AxiomKind::SelfDistributivity, vec!["mul".to_string()], "sd").unwrap(),
        );
        assert!(is_heavy(&sig));
    }

    #[test]
    fn plain_associative_signature_is_not_heavy() {
        let mut sig = base();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        assert!(!is_heavy(&sig));
    }

    #[test]
    fn multi_sorted_signature_is_never_heavy() {
        let mut sig = base();
        sig.sorts.push(Sort::new("T"));
        sig.axioms.push(
            Axiom::canonical(AxiomKind::SelfDistributivity, vec!["mul".to_string()], "sd").unwrap(),
        );
        assert!(!is_heavy(&sig));
    }

    #[test]
    fn custom_axiom_disqualifies_heaviness() {
        let mut sig = base();
        sig.axioms.push(
            Axiom::canonical(AxiomKind::SelfDistributivity, vec!["mul".to_string()], "sd").unwrap(),
        );
        sig.axioms.push(discover_ast::Axiom::custom(
            discover_ast::Expression::eq(discover_ast::Expression::var("x"), discover_ast::Expression::var("x")),
            vec!["mul".to_string()],
            "quasigroup marker",
        ));
        assert!(!is_heavy(&sig));
    }
}
