//! Signatures: a bundle of sorts, operations, and axioms plus the move
//! history that produced them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use discover_base::DiscoverError;

use crate::axiom::Axiom;
use crate::operation::Operation;
use crate::sort::Sort;

/// A candidate algebraic structure: sorts, typed operations over them,
/// the axioms they're expected to satisfy, and the chain of moves that
/// derived this signature from its seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// A human-readable name, not required to be unique across a run.
    pub name: String,
    /// The sorts this signature is indexed over.
    pub sorts: Vec<Sort>,
    /// The typed operations over those sorts.
    pub operations: Vec<Operation>,
    /// The equational axioms this signature is expected to satisfy.
    pub axioms: Vec<Axiom>,
    /// A human-readable description, e.g. of what this structure models.
    #[serde(default)]
    pub description: String,
    /// The names of the moves applied, in order, to reach this signature
    /// from its seed. Empty for a hand-authored seed signature.
    pub derivation: Vec<String>,
    /// Free-form metadata attached by producers (moves, seed catalog,
    /// pipeline) that the core itself does not interpret.
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl Signature {
    /// An empty, unnamed signature with no sorts, operations, or axioms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sorts: Vec::new(),
            operations: Vec::new(),
            axioms: Vec::new(),
            description: String::new(),
            derivation: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Check this signature against its four structural invariants:
    ///
    /// 1. Sort names are unique.
    /// 2. Operation names are unique.
    /// 3. Every operation's domain and codomain refer to declared sorts.
    /// 4. Every axiom's operations refer to declared operations.
    pub fn validate(&self) -> Result<(), DiscoverError> {
        let mut seen_sorts = std::collections::HashSet::new();
        for sort in &self.sorts {
            if !seen_sorts.insert(sort.name.as_str()) {
                return Err(DiscoverError::DuplicateName {
                    name: sort.name.clone(),
                    kind: "sort".to_string(),
                });
            }
        }

        let mut seen_ops = std::collections::HashSet::new();
        for op in &self.operations {
            if !seen_ops.insert(op.name.as_str()) {
                return Err(DiscoverError::DuplicateName {
                    name: op.name.clone(),
                    kind: "operation".to_string(),
                });
            }
            for sort_name in op.domain.iter().chain(std::iter::once(&op.codomain)) {
                if !seen_sorts.contains(sort_name.as_str()) {
                    return Err(DiscoverError::UnresolvedSort {
                        sort: sort_name.clone(),
                        context: op.name.clone(),
                    });
                }
            }
        }

        for axiom in &self.axioms {
            if axiom.operations.is_empty() {
                return Err(DiscoverError::EmptyAxiomOperations {
                    kind: axiom.kind.name().to_string(),
                });
            }
            for op_name in &axiom.operations {
                if !seen_ops.contains(op_name.as_str()) {
                    return Err(DiscoverError::UnresolvedOperation {
                        operation: op_name.clone(),
                        context: axiom.kind.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Look up a sort by name.
    pub fn sort(&self, name: &str) -> Option<&Sort> {
        self.sorts.iter().find(|s| s.name == name)
    }

    /// Append a move name to this signature's derivation chain, returning
    /// the signature by value for chaining inside move implementations.
    pub fn with_derivation_step(mut self, step: impl Into<String>) -> Self {
        self.derivation.push(step.into());
        self
    }
}
