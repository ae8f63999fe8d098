//! The four model-theoretic dimensions: computed from a
//! [`ModelSpectrum`], spec.md §4.6. All four are exactly `0.0` when no
//! spectrum is supplied — a signature that hasn't been through the
//! model finder yet gets no credit for model-theoretic properties.

use discover_model::ModelSpectrum;

const PRIME_SIZES: &[usize] = &[2, 3, 5, 7, 11, 13, 17, 19, 23];
const POWER_OF_TWO_SIZES: &[usize] = &[1, 2, 4, 8, 16, 32];

/// 1.0 if the spectrum contains any model, 0.5 if it is empty but at
/// least one size was inconclusive (timed out or errored), 0.0 if
/// proven empty at every tested size.
pub fn has_models(spectrum: Option<&ModelSpectrum>) -> f64 {
    let Some(spectrum) = spectrum else { return 0.0 };
    if spectrum.has_any_model() {
        1.0
    } else if !spectrum.inconclusive_sizes().is_empty() {
        0.5
    } else {
        0.0
    }
}

/// Mean of size-coverage (how dense the model-bearing sizes are within
/// their own range) and a saturating function of the average model
/// count per size.
pub fn model_diversity(spectrum: Option<&ModelSpectrum>) -> f64 {
    let Some(spectrum) = spectrum else { return 0.0 };
    let sizes = spectrum.sizes_with_models();
    if sizes.is_empty() {
        return 0.0;
    }

    let min = *sizes.iter().next().expect("sizes is non-empty");
    let max = *sizes.iter().next_back().expect("sizes is non-empty");
    let coverage = sizes.len() as f64 / (max - min + 1) as f64;

    let total: usize = sizes.iter().map(|n| spectrum.models_by_size[n].len()).sum();
    let avg = total as f64 / sizes.len() as f64;
    let count_score = 1.0 - (-avg / 3.0).exp();

    (coverage + count_score) / 2.0
}

fn is_arithmetic(sizes: &[usize]) -> bool {
    if sizes.len() < 2 {
        return false;
    }
    let diff = sizes[1] as i64 - sizes[0] as i64;
    sizes.windows(2).all(|pair| pair[1] as i64 - pair[0] as i64 == diff)
}

fn is_geometric(sizes: &[usize]) -> bool {
    if sizes.len() < 2 || sizes[0] == 0 {
        return false;
    }
    let ratio = sizes[1] as f64 / sizes[0] as f64;
    sizes
        .windows(2)
        .all(|pair| pair[0] != 0 && (pair[1] as f64 / pair[0] as f64 - ratio).abs() < 1e-9)
}

fn is_strictly_increasing_model_counts(spectrum: &ModelSpectrum, sizes: &[usize]) -> bool {
    sizes.windows(2).all(|pair| spectrum.models_by_size[&pair[0]].len() < spectrum.models_by_size[&pair[1]].len())
}

/// Needs at least two sizes with models; otherwise 0. Rewards sparse,
/// recognizable patterns in which sizes admit models over an unstructured
/// spread.
pub fn spectrum_pattern(spectrum: Option<&ModelSpectrum>) -> f64 {
    let Some(spectrum) = spectrum else { return 0.0 };
    let sizes: Vec<usize> = spectrum.sizes_with_models().into_iter().collect();
    if sizes.len() < 2 {
        return 0.0;
    }

    if sizes.iter().all(|n| PRIME_SIZES.contains(n)) {
        0.9
    } else if sizes.iter().all(|n| POWER_OF_TWO_SIZES.contains(n)) {
        0.8
    } else if is_arithmetic(&sizes) || is_geometric(&sizes) {
        0.7
    } else if is_strictly_increasing_model_counts(spectrum, &sizes) {
        0.5
    } else {
        0.0
    }
}

/// `penalty_timeout = 1 - timeout_ratio` times a flat 0.7 penalty when
/// three or more sizes yield the same non-zero model count (suggesting
/// the solver is just re-finding the same shape, not exploring).
pub fn solver_difficulty(spectrum: Option<&ModelSpectrum>) -> f64 {
    let Some(spectrum) = spectrum else { return 0.0 };
    let checked = spectrum.sizes_checked();
    if checked.is_empty() {
        return 0.0;
    }

    let timeout_ratio = spectrum.inconclusive_sizes().len() as f64 / checked.len() as f64;
    let penalty_timeout = 1.0 - timeout_ratio;

    let counts: Vec<usize> = spectrum.sizes_with_models().into_iter().map(|n| spectrum.models_by_size[&n].len()).collect();
    let penalty_flat = if counts.len() >= 3 && counts.iter().all(|&c| c == counts[0]) {
        0.7
    } else {
        1.0
    };

    penalty_timeout * penalty_flat
}
