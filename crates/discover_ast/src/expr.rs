//! The expression tree shared by equations and their operands.
//!
//! Every expression in the discovery engine is one of four variants:
//!
//! - `Variable(name)` - universally quantified
//! - `Constant(name)` - a named nullary value
//! - `Application { operation, args }` - an operation applied to arguments
//! - `Equation { lhs, rhs }` - `lhs = rhs`
//!
//! Expressions are immutable and structurally hashable; trees are cloned
//! freely rather than shared via reference counting, since signatures are
//! deep-copied at every move.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable, structurally hashable expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    /// A universally quantified variable.
    Variable(String),
    /// A named constant.
    Constant(String),
    /// An operation applied to an ordered list of argument expressions.
    Application {
        /// The operation name.
        operation: String,
        /// The ordered arguments.
        args: Vec<Expression>,
    },
    /// An equation `lhs = rhs`.
    Equation {
        /// The left-hand side.
        lhs: Box<Expression>,
        /// The right-hand side.
        rhs: Box<Expression>,
    },
}

impl Expression {
    /// Build a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// Build a constant reference.
    pub fn constant(name: impl Into<String>) -> Self {
        Expression::Constant(name.into())
    }

    /// Build an operation application.
    pub fn apply(operation: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Application {
            operation: operation.into(),
            args,
        }
    }

    /// Build an equation `lhs = rhs`.
    pub fn eq(lhs: Expression, rhs: Expression) -> Self {
        Expression::Equation {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Total number of AST nodes in this expression, counting itself.
    pub fn size(&self) -> usize {
        match self {
            Expression::Variable(_) | Expression::Constant(_) => 1,
            Expression::Application { args, .. } => {
                1 + args.iter().map(Expression::size).sum::<usize>()
            }
            Expression::Equation { lhs, rhs } => 1 + lhs.size() + rhs.size(),
        }
    }

    /// The set of free variable names occurring in this expression.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Expression::Variable(name) => {
                out.insert(name.clone());
            }
            Expression::Constant(_) => {}
            Expression::Application { args, .. } => {
                for a in args {
                    a.collect_variables(out);
                }
            }
            Expression::Equation { lhs, rhs } => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }

    /// Substitute every variable whose name is a key in `map` with the
    /// mapped expression, recursing structurally through applications and
    /// equations. Because variables carry no binder in this AST, this is
    /// trivially capture-free.
    pub fn substitute(&self, map: &std::collections::HashMap<String, Expression>) -> Expression {
        match self {
            Expression::Variable(name) => match map.get(name) {
                Some(replacement) => replacement.clone(),
                None => self.clone(),
            },
            Expression::Constant(_) => self.clone(),
            Expression::Application { operation, args } => Expression::Application {
                operation: operation.clone(),
                args: args.iter().map(|a| a.substitute(map)).collect(),
            },
            Expression::Equation { lhs, rhs } => Expression::Equation {
                lhs: Box::new(lhs.substitute(map)),
                rhs: Box::new(rhs.substitute(map)),
            },
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{name}"),
            Expression::Constant(name) => write!(f, "{name}"),
            Expression::Application { operation, args } => match args.len() {
                2 => write!(f, "({} {} {})", args[0], operation, args[1]),
                1 => write!(f, "{}({})", operation, args[0]),
                _ => {
                    write!(f, "{operation}(")?;
                    for (i, a) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{a}")?;
                    }
                    write!(f, ")")
                }
            },
            Expression::Equation { lhs, rhs } => write!(f, "{lhs} = {rhs}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_counts_all_nodes() {
        // (x mul y) — 3 nodes: application + 2 variables
        let e = Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]);
        assert_eq!(e.size(), 3);
    }

    #[test]
    fn equation_size_includes_both_sides() {
        let lhs = Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]);
        let rhs = Expression::var("z");
        let eq = Expression::eq(lhs, rhs);
        assert_eq!(eq.size(), 1 + 3 + 1);
    }

    #[test]
    fn variables_collects_free_names() {
        let e = Expression::apply(
            "mul",
            vec![Expression::var("x"), Expression::apply("mul", vec![Expression::var("y"), Expression::var("x")])],
        );
        let vars = e.variables();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("x"));
        assert!(vars.contains("y"));
    }

    #[test]
    fn constants_are_not_variables() {
        let e = Expression::apply("mul", vec![Expression::var("x"), Expression::constant("e")]);
        assert_eq!(e.variables(), BTreeSet::from(["x".to_string()]));
    }

    #[test]
    fn substitute_replaces_named_variables() {
        let e = Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]);
        let mut map = std::collections::HashMap::new();
        map.insert("x".to_string(), Expression::constant("e"));
        let substituted = e.substitute(&map);
        assert_eq!(substituted.to_string(), "(e mul y)");
    }

    #[test]
    fn substitute_variables_subset_property() {
        // variables(e.substitute(sigma)) subseteq variables(e) union variables-of-images
        let e = Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]);
        let mut map = std::collections::HashMap::new();
        map.insert("x".to_string(), Expression::var("z"));
        let substituted = e.substitute(&map);
        let allowed: BTreeSet<String> = ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
        assert!(substituted.variables().is_subset(&allowed));
    }

    #[test]
    fn substitute_on_equation_rewrites_both_sides() {
        let eq = Expression::eq(Expression::var("x"), Expression::var("x"));
        let mut map = std::collections::HashMap::new();
        map.insert("x".to_string(), Expression::constant("e"));
        assert_eq!(eq.substitute(&map).to_string(), "e = e");
    }

    #[test]
    fn display_binary_application_is_infix() {
        let e = Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]);
        assert_eq!(e.to_string(), "(x mul y)");
    }

    #[test]
    fn display_unary_application_is_prefix() {
        let e = Expression::apply("inv", vec![Expression::var("x")]);
        assert_eq!(e.to_string(), "inv(x)");
    }

    #[test]
    fn display_nary_application_lists_args() {
        let e = Expression::apply(
            "f",
            vec![Expression::var("a"), Expression::var("b"), Expression::var("c")],
        );
        assert_eq!(e.to_string(), "f(a, b, c)");
    }

    #[test]
    fn display_equation() {
        let eq = Expression::eq(Expression::var("x"), Expression::constant("e"));
        assert_eq!(eq.to_string(), "x = e");
    }
}
