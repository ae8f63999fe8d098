//! Concrete finite models: Cayley tables and spectra over a size range.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A single finite model of a signature: every sort collapses to the
/// integer interval `[0, domain_size)` per §4.4; operation tables are
/// keyed by operation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CayleyTable {
    /// The domain size `n`.
    pub domain_size: usize,
    /// Binary operations: `n x n` matrices of indices in `[0, n)`.
    pub binary: BTreeMap<String, Vec<Vec<usize>>>,
    /// Unary operations: length-`n` vectors of indices in `[0, n)`.
    pub unary: BTreeMap<String, Vec<usize>>,
    /// Nullary operations (constants): a single index in `[0, n)`.
    pub constants: BTreeMap<String, usize>,
}

impl CayleyTable {
    /// An empty table of the given domain size, with no operations filled
    /// in yet.
    pub fn new(domain_size: usize) -> Self {
        Self {
            domain_size,
            binary: BTreeMap::new(),
            unary: BTreeMap::new(),
            constants: BTreeMap::new(),
        }
    }

    /// The value of binary operation `name` at `(a, b)`, or `None` if the
    /// operation isn't present in this table.
    pub fn binary_at(&self, name: &str, a: usize, b: usize) -> Option<usize> {
        self.binary.get(name).map(|t| t[a][b])
    }
}

/// A mapping from domain size to the models found at that size, over a
/// range swept by [`crate::compute_spectrum`], plus the sizes where the
/// solver could not decide within its timeout (distinct from sizes proven
/// to have zero models) and sizes where the solver itself errored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSpectrum {
    /// Models found at each size, in discovery order. A size present here
    /// with an empty `Vec` and absent from `timed_out_sizes`/
    /// `errored_sizes` means the solver proved no model exists.
    pub models_by_size: BTreeMap<usize, Vec<CayleyTable>>,
    /// Sizes where the solver returned "unknown" before exhausting the
    /// model count — inconclusive, not a proof of emptiness.
    pub timed_out_sizes: BTreeSet<usize>,
    /// Sizes where the solver failed outright (malformed encoding,
    /// internal error), with the error message. Per §7, callers may treat
    /// these like timeouts for scoring purposes.
    pub errored_sizes: BTreeMap<usize, String>,
}

impl ModelSpectrum {
    /// An empty spectrum with no sizes recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every size in `[min, max]` that was checked at all (has an entry in
    /// `models_by_size`, `timed_out_sizes`, or `errored_sizes`).
    pub fn sizes_checked(&self) -> BTreeSet<usize> {
        let mut sizes: BTreeSet<usize> = self.models_by_size.keys().copied().collect();
        sizes.extend(self.timed_out_sizes.iter().copied());
        sizes.extend(self.errored_sizes.keys().copied());
        sizes
    }

    /// Does this spectrum contain at least one model at any size?
    pub fn has_any_model(&self) -> bool {
        self.models_by_size.values().any(|models| !models.is_empty())
    }

    /// Sizes where at least one model was found, ascending.
    pub fn sizes_with_models(&self) -> BTreeSet<usize> {
        self.models_by_size
            .iter()
            .filter(|(_, models)| !models.is_empty())
            .map(|(size, _)| *size)
            .collect()
    }

    /// Total number of models found across all sizes.
    pub fn total_models(&self) -> usize {
        self.models_by_size.values().map(Vec::len).sum()
    }

    /// Sizes treated as inconclusive for scoring: timed out or errored.
    pub fn inconclusive_sizes(&self) -> BTreeSet<usize> {
        let mut sizes: BTreeSet<usize> = self.timed_out_sizes.iter().copied().collect();
        sizes.extend(self.errored_sizes.keys().copied());
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spectrum_has_no_models() {
        let spectrum = ModelSpectrum::new();
        assert!(!spectrum.has_any_model());
        assert_eq!(spectrum.total_models(), 0);
    }

    #[test]
    fn sizes_checked_merges_all_three_maps() {
        let mut spectrum = ModelSpectrum::new();
        spectrum.models_by_size.insert(2, vec![CayleyTable::new(2)]);
        spectrum.timed_out_sizes.insert(3);
        spectrum.errored_sizes.insert(4, "boom".to_string());
        assert_eq!(spectrum.sizes_checked(), BTreeSet::from([2, 3, 4]));
    }

    #[test]
    fn sizes_with_models_excludes_empty_entries() {
        let mut spectrum = ModelSpectrum::new();
        spectrum.models_by_size.insert(2, vec![CayleyTable::new(2)]);
        spectrum.models_by_size.insert(3, vec![]);
        assert_eq!(spectrum.sizes_with_models(), BTreeSet::from([2]));
    }
}
