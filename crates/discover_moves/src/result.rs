//! The move-kind tag and the uniform result every move produces.

use serde::{Deserialize, Serialize};

use discover_ast::Signature;

/// The closed set of structural transformations in the move engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKind {
    Abstract,
    Dualize,
    Complete,
    Quotient,
    Internalize,
    Transfer,
    Deform,
    SelfDistrib,
}

impl MoveKind {
    /// All move kinds, in the fixed order `dispatch::apply_all` iterates.
    pub const ALL: &'static [MoveKind] = &[
        MoveKind::Abstract,
        MoveKind::Dualize,
        MoveKind::Complete,
        MoveKind::Quotient,
        MoveKind::Internalize,
        MoveKind::Transfer,
        MoveKind::Deform,
        MoveKind::SelfDistrib,
    ];

    /// The derivation-chain tag used when recording this move's effect.
    pub fn tag(&self) -> &'static str {
        match self {
            MoveKind::Abstract => "ABSTRACT",
            MoveKind::Dualize => "DUALIZE",
            MoveKind::Complete => "COMPLETE",
            MoveKind::Quotient => "QUOTIENT",
            MoveKind::Internalize => "INTERNALIZE",
            MoveKind::Transfer => "TRANSFER",
            MoveKind::Deform => "DEFORM",
            MoveKind::SelfDistrib => "SELF_DISTRIB",
        }
    }
}

/// A signature produced by a move, with enough provenance to reconstruct
/// why it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The produced child signature.
    pub signature: Signature,
    /// Which move produced it.
    pub kind: MoveKind,
    /// The name(s) of the parent signature(s): one for single-signature
    /// moves, two for pairwise moves.
    pub parents: Vec<String>,
    /// A human-readable description of what this move did.
    pub description: String,
}
