//! The persisted-discovery shape (spec.md §6): everything a caller needs
//! to serialize a ranked candidate to JSON, reproduce it, or re-derive it
//! independently. Persistence to disk is explicitly out of scope here —
//! this crate only guarantees the shape; callers serialize with
//! `serde_json` themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use discover_ast::Signature;
use discover_score::ScoreBreakdown;

/// One ranked candidate, ready to hand to an external persistence
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    /// A stable identifier: `"{signature name}-{fingerprint}"`, so a
    /// caller can reconstruct it from the signature alone.
    pub id: String,
    /// The signature's name.
    pub name: String,
    /// The full signature (sorts, operations, axioms, derivation chain).
    pub signature: Signature,
    /// The chain of move descriptions that produced this signature from
    /// its seed. Mirrors `signature.derivation` — kept as its own field
    /// per §6's serialization contract, which names it independently of
    /// the nested signature.
    pub derivation_chain: Vec<String>,
    /// The weighted total score.
    pub score: f64,
    /// Every scoring dimension, individually.
    pub score_breakdown: ScoreBreakdown,
    /// The 16-hex-character fingerprint.
    pub fingerprint: String,
    /// Free-form notes a caller (agent, CLI) may attach.
    #[serde(default)]
    pub notes: String,
}

impl Discovery {
    /// Build a `Discovery` from a scored signature.
    pub fn new(signature: Signature, fingerprint: String, score_breakdown: ScoreBreakdown, score: f64) -> Self {
        let id = format!("{}-{fingerprint}", signature.name);
        Self {
            id,
            name: signature.name.clone(),
            derivation_chain: signature.derivation.clone(),
            signature,
            score,
            score_breakdown,
            fingerprint,
            notes: String::new(),
        }
    }

    /// The §6 canonical JSON representation.
    pub fn to_dict(&self) -> Value {
        serde_json::to_value(self).expect("Discovery serializes without error")
    }

    /// The inverse of [`to_dict`](Self::to_dict). Per §8's round-trip
    /// property, `from_dict(to_dict(d)) == d` field-wise.
    pub fn from_dict(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
