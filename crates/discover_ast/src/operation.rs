//! Typed operations: nullary (constants), unary, and binary maps between sorts.

use serde::{Deserialize, Serialize};

/// A named operation with an ordered domain and a codomain sort.
///
/// - `domain.len() == 0` models a constant (`arity() == 0`).
/// - `domain.len() == 1` models a unary map, possibly endo (`domain[0] ==
///   codomain`).
/// - `domain.len() == 2` models a binary operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// The operation's name, unique within a signature.
    pub name: String,
    /// The ordered domain sort names.
    pub domain: Vec<String>,
    /// The codomain sort name.
    pub codomain: String,
}

impl Operation {
    /// A nullary operation (constant) of the given sort.
    pub fn constant(name: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: Vec::new(),
            codomain: sort.into(),
        }
    }

    /// A unary operation `domain -> codomain`.
    pub fn unary(name: impl Into<String>, domain: impl Into<String>, codomain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: vec![domain.into()],
            codomain: codomain.into(),
        }
    }

    /// A binary operation `domain x domain2 -> codomain`.
    pub fn binary(
        name: impl Into<String>,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
        codomain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: vec![lhs.into(), rhs.into()],
            codomain: codomain.into(),
        }
    }

    /// The number of arguments this operation takes.
    pub fn arity(&self) -> usize {
        self.domain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_has_arity_zero() {
        assert_eq!(Operation::constant("e", "S").arity(), 0);
    }

    #[test]
    fn unary_has_arity_one() {
        assert_eq!(Operation::unary("inv", "S", "S").arity(), 1);
    }

    #[test]
    fn binary_has_arity_two() {
        assert_eq!(Operation::binary("mul", "S", "S", "S").arity(), 2);
    }
}
