//! Sorts: the named types that operations and axioms are indexed over.

use serde::{Deserialize, Serialize};

/// A named type, with an optional human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// The sort's name, unique within a signature.
    pub name: String,
    /// An optional human-readable description.
    pub description: Option<String>,
}

impl Sort {
    /// A sort with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// A sort carrying a human-readable description.
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }
}
