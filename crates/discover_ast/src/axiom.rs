//! Axiom kinds and the canonical equations they expand to.

use serde::{Deserialize, Serialize};

use crate::expr::Expression;

/// The closed set of equational-law shapes an axiom can be tagged with.
///
/// Dispatch on kind is exhaustive everywhere in this workspace; adding a
/// new law means adding a variant here and a canonical-equation case in
/// [`AxiomKind::canonical_equation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxiomKind {
    Associativity,
    Commutativity,
    Identity,
    Inverse,
    Distributivity,
    Anticommutativity,
    Idempotence,
    Nilpotence,
    Jacobi,
    Positivity,
    Bilinearity,
    Homomorphism,
    Functoriality,
    Absorption,
    Modularity,
    SelfDistributivity,
    RightSelfDistributivity,
    Custom,
}

impl AxiomKind {
    /// All non-`Custom` kinds, in a fixed order — used to drive exhaustive
    /// iteration in moves like QUOTIENT.
    pub const CANONICAL: &'static [AxiomKind] = &[
        AxiomKind::Associativity,
        AxiomKind::Commutativity,
        AxiomKind::Identity,
        AxiomKind::Inverse,
        AxiomKind::Distributivity,
        AxiomKind::Anticommutativity,
        AxiomKind::Idempotence,
        AxiomKind::Nilpotence,
        AxiomKind::Jacobi,
        AxiomKind::Positivity,
        AxiomKind::Bilinearity,
        AxiomKind::Homomorphism,
        AxiomKind::Functoriality,
        AxiomKind::Absorption,
        AxiomKind::Modularity,
        AxiomKind::SelfDistributivity,
        AxiomKind::RightSelfDistributivity,
    ];

    /// The spec's upper-case wire name for this kind, used in fingerprints
    /// and in the serialized `{kind, ...}` axiom representation.
    pub fn name(&self) -> &'static str {
        match self {
            AxiomKind::Associativity => "ASSOCIATIVITY",
            AxiomKind::Commutativity => "COMMUTATIVITY",
            AxiomKind::Identity => "IDENTITY",
            AxiomKind::Inverse => "INVERSE",
            AxiomKind::Distributivity => "DISTRIBUTIVITY",
            AxiomKind::Anticommutativity => "ANTICOMMUTATIVITY",
            AxiomKind::Idempotence => "IDEMPOTENCE",
            AxiomKind::Nilpotence => "NILPOTENCE",
            AxiomKind::Jacobi => "JACOBI",
            AxiomKind::Positivity => "POSITIVITY",
            AxiomKind::Bilinearity => "BILINEARITY",
            AxiomKind::Homomorphism => "HOMOMORPHISM",
            AxiomKind::Functoriality => "FUNCTORIALITY",
            AxiomKind::Absorption => "ABSORPTION",
            AxiomKind::Modularity => "MODULARITY",
            AxiomKind::SelfDistributivity => "SELF_DISTRIBUTIVITY",
            AxiomKind::RightSelfDistributivity => "RIGHT_SELF_DISTRIBUTIVITY",
            AxiomKind::Custom => "CUSTOM",
        }
    }

    /// How many operation names this kind's canonical equation needs.
    ///
    /// `ABSTRACT` (§4.3) relies on this to decide which shared axiom kinds
    /// it can lift onto a single abstract operation: only kinds whose
    /// canonical form needs exactly one operation survive that move.
    pub fn required_operations(&self) -> Option<usize> {
        match self {
            AxiomKind::Associativity
            | AxiomKind::Commutativity
            | AxiomKind::Idempotence
            | AxiomKind::Positivity
            | AxiomKind::SelfDistributivity
            | AxiomKind::RightSelfDistributivity => Some(1),
            AxiomKind::Identity
            | AxiomKind::Distributivity
            | AxiomKind::Anticommutativity
            | AxiomKind::Nilpotence
            | AxiomKind::Absorption
            | AxiomKind::Modularity => Some(2),
            AxiomKind::Inverse | AxiomKind::Jacobi | AxiomKind::Bilinearity => Some(3),
            AxiomKind::Homomorphism | AxiomKind::Functoriality => Some(3),
            AxiomKind::Custom => None,
        }
    }

    /// Build the canonical equation for this kind over the given operation
    /// names, or `None` if `ops` doesn't match [`required_operations`] (or
    /// the kind is `Custom`, which carries no canonical form at all).
    ///
    /// Open question, resolved (see DESIGN.md): `Identity`'s canonical form
    /// is one-sided right-identity (`x op e = x`), matching how `COMPLETE`
    /// (§4.3) and the spec's own Open Questions describe it, rather than
    /// the "left identity" wording in §4.1's summary list. `Inverse`
    /// follows the same one-sided convention (right-inverse).
    pub fn canonical_equation(&self, ops: &[String]) -> Option<Expression> {
        if self.required_operations() != Some(ops.len()) {
            return None;
        }
        let x = Expression::var("x");
        let y = Expression::var("y");
        let z = Expression::var("z");
        match self {
            AxiomKind::Associativity => {
                let op = &ops[0];
                let lhs = Expression::apply(op, vec![Expression::apply(op, vec![x.clone(), y.clone()]), z.clone()]);
                let rhs = Expression::apply(op, vec![x, Expression::apply(op, vec![y, z])]);
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Commutativity => {
                let op = &ops[0];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), y.clone()]),
                    Expression::apply(op, vec![y, x]),
                ))
            }
            AxiomKind::Idempotence => {
                let op = &ops[0];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), x.clone()]),
                    x,
                ))
            }
            AxiomKind::Positivity => {
                // A marker axiom: first-order equational logic has no native
                // inequalities, so positivity is recorded without semantic effect.
                let op = &ops[0];
                let app = Expression::apply(op, vec![x]);
                Some(Expression::eq(app.clone(), app))
            }
            AxiomKind::SelfDistributivity => {
                let op = &ops[0];
                let lhs = Expression::apply(op, vec![x.clone(), Expression::apply(op, vec![y.clone(), z.clone()])]);
                let rhs = Expression::apply(
                    op,
                    vec![
                        Expression::apply(op, vec![x.clone(), y.clone()]),
                        Expression::apply(op, vec![x, z]),
                    ],
                );
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::RightSelfDistributivity => {
                let op = &ops[0];
                let lhs = Expression::apply(op, vec![Expression::apply(op, vec![x.clone(), y.clone()]), z.clone()]);
                let rhs = Expression::apply(
                    op,
                    vec![
                        Expression::apply(op, vec![x.clone(), z.clone()]),
                        Expression::apply(op, vec![y, z]),
                    ],
                );
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Identity => {
                let op = &ops[0];
                let e = &ops[1];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), Expression::constant(e)]),
                    x,
                ))
            }
            AxiomKind::Distributivity => {
                // Left-distributivity of ops[0] over ops[1].
                let op2 = &ops[0];
                let op = &ops[1];
                let lhs = Expression::apply(op2, vec![x.clone(), Expression::apply(op, vec![y.clone(), z.clone()])]);
                let rhs = Expression::apply(
                    op,
                    vec![
                        Expression::apply(op2, vec![x.clone(), y]),
                        Expression::apply(op2, vec![x, z]),
                    ],
                );
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Anticommutativity => {
                let op = &ops[0];
                let neg = &ops[1];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), y.clone()]),
                    Expression::apply(neg, vec![Expression::apply(op, vec![y, x])]),
                ))
            }
            AxiomKind::Nilpotence => {
                let op = &ops[0];
                let zero = &ops[1];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), x]),
                    Expression::constant(zero),
                ))
            }
            AxiomKind::Absorption => {
                let op = &ops[0];
                let op2 = &ops[1];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), Expression::apply(op2, vec![x.clone(), y])]),
                    x,
                ))
            }
            AxiomKind::Modularity => {
                let op = &ops[0];
                let op2 = &ops[1];
                let lhs = Expression::apply(op, vec![x.clone(), Expression::apply(op2, vec![y.clone(), z.clone()])]);
                let rhs = Expression::apply(op2, vec![Expression::apply(op, vec![x, y]), z]);
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Inverse => {
                let op = &ops[0];
                let inv = &ops[1];
                let e = &ops[2];
                Some(Expression::eq(
                    Expression::apply(op, vec![x.clone(), Expression::apply(inv, vec![x])]),
                    Expression::constant(e),
                ))
            }
            AxiomKind::Jacobi => {
                let op = &ops[0];
                let add = &ops[1];
                let zero = &ops[2];
                let bracket = |a: Expression, b: Expression| Expression::apply(op, vec![a, b]);
                let sum = Expression::apply(
                    add,
                    vec![
                        Expression::apply(
                            add,
                            vec![
                                bracket(x.clone(), bracket(y.clone(), z.clone())),
                                bracket(y, bracket(z.clone(), x.clone())),
                            ],
                        ),
                        bracket(z, bracket(x, y.clone())),
                    ],
                );
                Some(Expression::eq(sum, Expression::constant(zero)))
            }
            AxiomKind::Bilinearity => {
                let op = &ops[0];
                let add = &ops[1];
                let _ = &ops[2]; // reserved for a scalar/second addition operation
                let lhs = Expression::apply(
                    op,
                    vec![Expression::apply(add, vec![x.clone(), y.clone()]), z.clone()],
                );
                let rhs = Expression::apply(
                    add,
                    vec![
                        Expression::apply(op, vec![x, z.clone()]),
                        Expression::apply(op, vec![y, z]),
                    ],
                );
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Homomorphism | AxiomKind::Functoriality => {
                let f = &ops[0];
                let op = &ops[1];
                let op2 = &ops[2];
                let lhs = Expression::apply(f, vec![Expression::apply(op, vec![x.clone(), y.clone()])]);
                let rhs = Expression::apply(
                    op2,
                    vec![
                        Expression::apply(f, vec![x]),
                        Expression::apply(f, vec![y]),
                    ],
                );
                Some(Expression::eq(lhs, rhs))
            }
            AxiomKind::Custom => None,
        }
    }
}

/// A single equational law: a kind tag, the ground equation it expands to,
/// the operations it constrains, and a human-readable description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axiom {
    /// The closed-set kind tag.
    pub kind: AxiomKind,
    /// The (implicitly universally closed) equation this axiom asserts.
    pub equation: Expression,
    /// The operations this axiom constrains, in a fixed order.
    pub operations: Vec<String>,
    /// A human-readable description.
    pub description: String,
}

impl Axiom {
    /// Build an axiom of a canonical (non-`Custom`) kind over the given
    /// operations, or `None` if the operation count doesn't match the
    /// kind's canonical form.
    pub fn canonical(
        kind: AxiomKind,
        operations: Vec<String>,
        description: impl Into<String>,
    ) -> Option<Axiom> {
        let equation = kind.canonical_equation(&operations)?;
        Some(Axiom {
            kind,
            equation,
            operations,
            description: description.into(),
        })
    }

    /// Build a `Custom`-tagged axiom with an explicit equation.
    pub fn custom(
        equation: Expression,
        operations: Vec<String>,
        description: impl Into<String>,
    ) -> Axiom {
        Axiom {
            kind: AxiomKind::Custom,
            equation,
            operations,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn associativity_canonical_form() {
        let axiom = Axiom::canonical(
            AxiomKind::Associativity,
            vec!["mul".to_string()],
            "associativity of mul",
        )
        .unwrap();
        assert_eq!(axiom.equation.to_string(), "((x mul y) mul z) = (x mul (y mul z))");
    }

    #[test]
    fn commutativity_canonical_form() {
        let axiom = Axiom::canonical(
            AxiomKind::Commutativity,
            vec!["mul".to_string()],
            "commutativity of mul",
        )
        .unwrap();
        assert_eq!(axiom.equation.to_string(), "(x mul y) = (y mul x)");
    }

    #[test]
    fn identity_is_right_identity() {
        let axiom = Axiom::canonical(
            AxiomKind::Identity,
            vec!["mul".to_string(), "e".to_string()],
            "identity of mul",
        )
        .unwrap();
        assert_eq!(axiom.equation.to_string(), "(x mul e) = x");
    }

    #[test]
    fn inverse_is_right_inverse() {
        let axiom = Axiom::canonical(
            AxiomKind::Inverse,
            vec!["mul".to_string(), "inv_mul".to_string(), "e".to_string()],
            "inverse of mul",
        )
        .unwrap();
        assert_eq!(axiom.equation.to_string(), "(x mul inv_mul(x)) = e");
    }

    #[test]
    fn wrong_operation_count_returns_none() {
        assert!(Axiom::canonical(AxiomKind::Associativity, vec![], "bad").is_none());
        assert!(Axiom::canonical(AxiomKind::Identity, vec!["mul".into()], "bad").is_none());
    }

    #[test]
    fn custom_has_no_canonical_form() {
        assert!(AxiomKind::Custom.canonical_equation(&[]).is_none());
    }

    #[test]
    fn kind_name_matches_spec_wire_format() {
        assert_eq!(AxiomKind::SelfDistributivity.name(), "SELF_DISTRIBUTIVITY");
        assert_eq!(AxiomKind::RightSelfDistributivity.name(), "RIGHT_SELF_DISTRIBUTIVITY");
    }
}
