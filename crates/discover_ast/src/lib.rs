//! The symbolic signature layer for the discovery engine.
//!
//! An [`Expression`] tree represents terms and equations; an [`Axiom`]
//! tags an equation with a closed-set [`AxiomKind`]; a [`Signature`]
//! bundles [`Sort`]s, [`Operation`]s, and axioms together with the
//! derivation chain of moves that produced it. [`fingerprint`] derives a
//! cheap structural digest used to fast-filter candidates before the
//! expensive model-checking pass.

pub mod axiom;
pub mod expr;
pub mod fingerprint;
pub mod operation;
pub mod signature;
pub mod sort;

pub use axiom::{Axiom, AxiomKind};
pub use expr::Expression;
pub use fingerprint::fingerprint;
pub use operation::Operation;
pub use signature::Signature;
pub use sort::Sort;
