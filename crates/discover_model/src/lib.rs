//! The finite-model finder: given a signature and a domain size, searches
//! for all non-isomorphic finite Cayley-table models up to a count cap,
//! and assembles a spectrum over a size range. Backed by an embedded Z3
//! solver behind a swappable [`SolverBackend`] trait (§9's "solver
//! backend abstraction").
//!
//! [`cayley`] analyzes the models this crate finds: Latin-square,
//! commutativity, identity, associativity, entropy, symmetry, and
//! (brute-forced, small-`n`) automorphism/isomorphism predicates.

pub mod backend;
pub mod cayley;
pub mod encode;
pub mod heavy;
pub mod table;

pub use backend::{compute_spectrum, SolverBackend, Z3Backend};
pub use heavy::is_heavy;
pub use table::{CayleyTable, ModelSpectrum};
