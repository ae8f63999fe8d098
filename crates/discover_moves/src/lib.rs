//! The move engine: eight typed structural transformations over
//! [`discover_ast::Signature`]s, composable to arbitrary depth.
//!
//! Each move is a pure function — [`abstract_::apply`], [`dualize::apply`],
//! [`complete::apply`], [`quotient::apply`], [`internalize::apply`],
//! [`transfer::apply`], [`deform::apply`], [`self_distrib::apply`] — from
//! one or two parent signatures to a list of [`MoveResult`]. [`dispatch`]
//! drives all eight over a frontier of candidates in the fixed order given
//! by [`MoveKind::ALL`].

pub mod abstract_;
pub mod common;
pub mod complete;
pub mod deform;
pub mod dispatch;
pub mod dualize;
pub mod internalize;
pub mod quotient;
pub mod result;
pub mod self_distrib;
pub mod transfer;

pub use result::{MoveKind, MoveResult};
