//! The `prove` boundary (§9 Design Notes): this crate cannot prove a goal
//! equation holds over every model of a signature — that needs an actual
//! theorem prover, which is an external collaborator's job. What it can
//! do is search for a finite counterexample, which is enough to report a
//! disproof or to say "no counterexample found up to this size", never
//! "proved".

use discover_ast::{Expression, Signature};
use discover_base::DiscoverError;
use discover_model::SolverBackend;

/// The outcome of one `prove` call. There is deliberately no `Proved`
/// variant: a finite-model search can only ever falsify a universally
/// quantified goal, never confirm it holds at every size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProveStatus {
    /// A finite model was found in which `goal` fails for some
    /// assignment of its free variables, at the given domain size.
    Disproved { size: usize },
    /// No counterexample exists at any size in the swept range.
    NoCounterexampleFound { max_size_checked: usize },
    /// Every size in the range timed out before a verdict was reached.
    Timeout,
    /// A solver error occurred before any size returned a result.
    Error(String),
}

/// Search `sig` for a finite counterexample to `goal`, sweeping
/// `min_size..=max_size` ascending and stopping at the first
/// disproof (§4.4's "ascending size sweep" convention, reused here).
pub fn prove(
    backend: &dyn SolverBackend,
    sig: &Signature,
    goal: &Expression,
    min_size: usize,
    max_size: usize,
    timeout_ms: u64,
) -> ProveStatus {
    let mut any_timeout = false;
    let mut last_error: Option<DiscoverError> = None;

    for n in min_size..=max_size {
        match backend.find_counterexample(sig, goal, n, timeout_ms) {
            Ok(Some(_)) => {
                tracing::info!(signature = %sig.name, size = n, "found a finite counterexample");
                return ProveStatus::Disproved { size: n };
            }
            Ok(None) => continue,
            Err(DiscoverError::SolverTimeout) => {
                tracing::warn!(signature = %sig.name, size = n, "solver timed out while searching for a counterexample");
                any_timeout = true;
            }
            Err(err) => {
                tracing::warn!(signature = %sig.name, size = n, error = %err, "solver error while searching for a counterexample");
                last_error = Some(err);
            }
        }
    }

    if let Some(err) = last_error {
        return ProveStatus::Error(err.to_string());
    }
    if any_timeout {
        return ProveStatus::Timeout;
    }
    ProveStatus::NoCounterexampleFound { max_size_checked: max_size }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};
    use discover_model::Z3Backend;

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn commutativity_is_disproved_for_a_plain_semigroup() {
        let goal = Expression::eq(
            Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]),
            Expression::apply("mul", vec![Expression::var("y"), Expression::var("x")]),
        );
        let status = prove(&Z3Backend, &semigroup(), &goal, 2, 4, 2000);
        assert!(matches!(status, ProveStatus::Disproved { .. }));
    }

    #[test]
    fn reflexivity_has_no_finite_counterexample() {
        let goal = Expression::eq(Expression::var("x"), Expression::var("x"));
        let status = prove(&Z3Backend, &semigroup(), &goal, 2, 3, 2000);
        assert_eq!(status, ProveStatus::NoCounterexampleFound { max_size_checked: 3 });
    }
}
