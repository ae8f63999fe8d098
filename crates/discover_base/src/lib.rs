#![cfg_attr(docsrs, feature(doc_cfg))]

//! # discover-base
//!
//! Pure structural atoms for the discover workspace.
//!
//! This crate provides the foundational types used throughout discover:
//!
//! - [`Interner`]/[`Symbol`] — string interning for O(1) equality
//! - [`DiscoverError`]/[`Result`] — errors shared across every downstream crate
//!
//! # Design Principles
//!
//! This crate has **no knowledge of signatures, axioms, or solvers**. It
//! provides only generic, reusable infrastructure that higher-level crates
//! build upon.
//!
//! # Example
//!
//! ```
//! use discover_base::Interner;
//!
//! let mut interner = Interner::new();
//! let mul = interner.intern("mul");
//! let mul2 = interner.intern("mul");
//! assert_eq!(mul, mul2);
//! ```

pub mod error;
pub mod intern;

pub use error::{DiscoverError, Result};
pub use intern::{Interner, Symbol};
