//! A small, hardcoded catalog of seed signatures.
//!
//! The known-structures library itself is an external-collaborator
//! concern (spec.md §6's "Environment / persistence"); this catalog only
//! exists so `list-structures` and `explore` have concrete seeds to work
//! with out of the box.

use discover_ast::{Axiom, AxiomKind, Operation, Signature, Sort};

fn semigroup() -> Signature {
    let mut sig = Signature::new("semigroup");
    sig.sorts.push(Sort::new("S"));
    sig.operations.push(Operation::binary("mul", "S", "S", "S"));
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "mul is associative").unwrap());
    sig
}

fn monoid() -> Signature {
    let mut sig = semigroup();
    sig.name = "monoid".to_string();
    sig.operations.push(Operation::constant("e", "S"));
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Identity, vec!["mul".to_string(), "e".to_string()], "e is a right identity for mul").unwrap());
    sig
}

fn group() -> Signature {
    let mut sig = monoid();
    sig.name = "group".to_string();
    sig.operations.push(Operation::unary("inv", "S", "S"));
    sig.axioms.push(
        Axiom::canonical(
            AxiomKind::Inverse,
            vec!["mul".to_string(), "inv".to_string(), "e".to_string()],
            "inv gives a right inverse for mul",
        )
        .unwrap(),
    );
    sig
}

fn abelian_group() -> Signature {
    let mut sig = group();
    sig.name = "abelian_group".to_string();
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Commutativity, vec!["mul".to_string()], "mul is commutative").unwrap());
    sig
}

fn ring() -> Signature {
    let mut sig = Signature::new("ring");
    sig.sorts.push(Sort::new("R"));
    sig.operations.push(Operation::binary("add", "R", "R", "R"));
    sig.operations.push(Operation::binary("mul", "R", "R", "R"));
    sig.operations.push(Operation::constant("zero", "R"));
    sig.operations.push(Operation::unary("neg", "R", "R"));
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Associativity, vec!["add".to_string()], "add is associative").unwrap());
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Commutativity, vec!["add".to_string()], "add is commutative").unwrap());
    sig.axioms.push(
        Axiom::canonical(AxiomKind::Identity, vec!["add".to_string(), "zero".to_string()], "zero is a right identity for add").unwrap(),
    );
    sig.axioms.push(
        Axiom::canonical(
            AxiomKind::Inverse,
            vec!["add".to_string(), "neg".to_string(), "zero".to_string()],
            "neg gives a right inverse for add",
        )
        .unwrap(),
    );
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "mul is associative").unwrap());
    sig.axioms.push(
        Axiom::canonical(AxiomKind::Distributivity, vec!["mul".to_string(), "add".to_string()], "mul distributes over add").unwrap(),
    );
    sig
}

fn lattice() -> Signature {
    let mut sig = Signature::new("lattice");
    sig.sorts.push(Sort::new("L"));
    sig.operations.push(Operation::binary("meet", "L", "L", "L"));
    sig.operations.push(Operation::binary("join", "L", "L", "L"));
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Commutativity, vec!["meet".to_string()], "meet is commutative").unwrap());
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Commutativity, vec!["join".to_string()], "join is commutative").unwrap());
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Associativity, vec!["meet".to_string()], "meet is associative").unwrap());
    sig.axioms
        .push(Axiom::canonical(AxiomKind::Associativity, vec!["join".to_string()], "join is associative").unwrap());
    sig.axioms.push(
        Axiom::canonical(AxiomKind::Absorption, vec!["meet".to_string(), "join".to_string()], "meet absorbs join").unwrap(),
    );
    sig
}

/// Every catalog entry, in a fixed order.
pub fn all() -> Vec<Signature> {
    vec![semigroup(), monoid(), group(), abelian_group(), ring(), lattice()]
}

/// Look a catalog entry up by name.
pub fn find(name: &str) -> Option<Signature> {
    all().into_iter().find(|sig| sig.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_validates() {
        for sig in all() {
            assert!(sig.validate().is_ok(), "{} failed validation", sig.name);
        }
    }

    #[test]
    fn find_looks_up_by_name() {
        assert!(find("group").is_some());
        assert!(find("nonexistent").is_none());
    }
}
