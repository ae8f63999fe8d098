//! Shared error taxonomy for the discover workspace.
//!
//! ## Error Categories
//!
//! | Category | Variants | Caller action |
//! |----------|----------|----------------|
//! | Signature | `UnresolvedSort`, `UnresolvedOperation`, `ArityMismatch`, `DuplicateName`, `EmptyAxiomOperations` | Fatal for the candidate signature; the move engine logs and moves to the next input |
//! | Solver | `SolverUnavailable`, `SolverTimeout`, `SolverError` | Not fatal; model-theoretic scores default to 0 or the spectrum records a timeout |

use std::fmt;

/// Result type used throughout the discover workspace.
pub type Result<T = ()> = std::result::Result<T, DiscoverError>;

/// The shared error type for malformed signatures and solver failures.
///
/// Every downstream crate (`discover-ast`, `discover-moves`,
/// `discover-model`, `discover-pipeline`) surfaces its failures through
/// this enum so callers can distinguish "this candidate is malformed"
/// (fatal for that candidate, not for the run) from "the solver couldn't
/// decide" (recorded, not fatal).
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoverError {
    /// An operation or axiom references a sort that isn't declared.
    UnresolvedSort {
        /// The sort name that could not be resolved.
        sort: String,
        /// Where the reference was found (e.g. an operation or axiom name).
        context: String,
    },
    /// An axiom equation references an operation that isn't declared.
    UnresolvedOperation {
        /// The operation name that could not be resolved.
        operation: String,
        /// Where the reference was found.
        context: String,
    },
    /// An operation is applied with the wrong number of arguments.
    ArityMismatch {
        /// The operation name.
        operation: String,
        /// The operation's declared arity.
        expected: usize,
        /// The number of arguments found at the call site.
        found: usize,
    },
    /// Two sorts, two operations, or two axioms share a name within one signature.
    DuplicateName {
        /// The name that was declared twice.
        name: String,
        /// What kind of thing was duplicated ("sort", "operation", ...).
        kind: String,
    },
    /// An axiom was declared with an empty operations list.
    EmptyAxiomOperations {
        /// The axiom kind with no operations attached.
        kind: String,
    },
    /// No finite-model backend is configured or reachable.
    SolverUnavailable,
    /// The solver returned "unknown" within its configured timeout.
    SolverTimeout,
    /// The solver encountered an internal failure (malformed encoding, etc).
    SolverError(String),
}

impl fmt::Display for DiscoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoverError::UnresolvedSort { sort, context } => {
                write!(f, "sort '{sort}' referenced by '{context}' is not declared")
            }
            DiscoverError::UnresolvedOperation { operation, context } => {
                write!(
                    f,
                    "operation '{operation}' referenced by '{context}' is not declared"
                )
            }
            DiscoverError::ArityMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "operation '{operation}' expects {expected} argument(s), found {found}"
            ),
            DiscoverError::DuplicateName { name, kind } => {
                write!(f, "duplicate {kind} name '{name}'")
            }
            DiscoverError::EmptyAxiomOperations { kind } => {
                write!(f, "axiom of kind '{kind}' has no associated operations")
            }
            DiscoverError::SolverUnavailable => write!(f, "no finite-model solver is available"),
            DiscoverError::SolverTimeout => write!(f, "solver timed out"),
            DiscoverError::SolverError(msg) => write!(f, "solver error: {msg}"),
        }
    }
}

impl std::error::Error for DiscoverError {}
