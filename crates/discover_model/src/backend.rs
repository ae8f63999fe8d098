//! The solver-backend seam (§9 "Solver backend abstraction") and its
//! default Z3-backed implementation.

use z3::ast::{Ast, Bool, Int};
use z3::{Config, Context, SatResult, Solver};

use discover_ast::Signature;
use discover_base::DiscoverError;

use discover_ast::Expression;

use crate::encode::{encode_signature, encode_signature_with_negated_goal, Tables};
use crate::table::{CayleyTable, ModelSpectrum};

/// A single capability set: find finite models of a signature, and
/// report whether the implementation is reachable at all. Exposing this
/// trait (rather than calling Z3 directly everywhere) is the seam an
/// external router can use to send heavy signatures (§4.4) to a stronger
/// backend; this crate only ships the SMT path.
pub trait SolverBackend: Send + Sync {
    /// Search for up to `max_models` distinct Cayley-table models of
    /// `sig` at domain size `n`, each solver call bounded by
    /// `timeout_ms`. Returns the models found and whether the search was
    /// cut short by a solver timeout (partial results are still valid).
    fn find_models(
        &self,
        sig: &Signature,
        n: usize,
        max_models: usize,
        timeout_ms: u64,
    ) -> Result<(Vec<CayleyTable>, bool), DiscoverError>;

    /// Is this backend reachable right now?
    fn is_available(&self) -> bool;

    /// Search for a single finite model of `sig` at size `n` in which
    /// `goal` (an equation) fails to hold for some assignment of its free
    /// variables — a finite counterexample. `Ok(None)` means the solver
    /// proved none exists at this size (not that `goal` holds at every
    /// size); `Ok(Some(_))` is a genuine disproof.
    fn find_counterexample(
        &self,
        sig: &Signature,
        goal: &Expression,
        n: usize,
        timeout_ms: u64,
    ) -> Result<Option<CayleyTable>, DiscoverError>;
}

/// The default backend: an embedded Z3 solver, one fresh `Context` per
/// call (matching the teacher's `Verifier::new()` / per-check `Context`
/// lifecycle rather than a long-lived shared solver).
#[derive(Debug, Default, Clone, Copy)]
pub struct Z3Backend;

impl SolverBackend for Z3Backend {
    fn find_models(
        &self,
        sig: &Signature,
        n: usize,
        max_models: usize,
        timeout_ms: u64,
    ) -> Result<(Vec<CayleyTable>, bool), DiscoverError> {
        sig.validate().map_err(|_| DiscoverError::SolverError("signature failed validation before encoding".to_string()))?;

        let mut cfg = Config::new();
        cfg.set_param_value("timeout", &timeout_ms.to_string());
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);

        let tables = encode_signature(&ctx, &solver, sig, n);

        let mut models = Vec::new();
        let mut timed_out = false;
        while models.len() < max_models {
            match solver.check() {
                SatResult::Sat => {
                    let model = solver.get_model().ok_or_else(|| {
                        DiscoverError::SolverError("solver reported sat but returned no model".to_string())
                    })?;
                    let table = extract_table(&ctx, &model, &tables, n)?;
                    let blocking = blocking_clause(&ctx, &tables, &table);
                    solver.assert(&blocking);
                    models.push(table);
                }
                SatResult::Unsat => break,
                SatResult::Unknown => {
                    timed_out = true;
                    break;
                }
            }
        }

        Ok((models, timed_out))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn find_counterexample(
        &self,
        sig: &Signature,
        goal: &Expression,
        n: usize,
        timeout_ms: u64,
    ) -> Result<Option<CayleyTable>, DiscoverError> {
        sig.validate()
            .map_err(|_| DiscoverError::SolverError("signature failed validation before encoding".to_string()))?;

        let mut cfg = Config::new();
        cfg.set_param_value("timeout", &timeout_ms.to_string());
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);

        let tables = encode_signature_with_negated_goal(&ctx, &solver, sig, goal, n);

        match solver.check() {
            SatResult::Sat => {
                let model = solver.get_model().ok_or_else(|| {
                    DiscoverError::SolverError("solver reported sat but returned no model".to_string())
                })?;
                Ok(Some(extract_table(&ctx, &model, &tables, n)?))
            }
            SatResult::Unsat => Ok(None),
            SatResult::Unknown => Err(DiscoverError::SolverTimeout),
        }
    }
}

fn extract_table<'ctx>(
    ctx: &'ctx Context,
    model: &z3::Model<'ctx>,
    tables: &Tables<'ctx>,
    n: usize,
) -> Result<CayleyTable, DiscoverError> {
    let mut table = CayleyTable::new(n);

    for (name, cell) in &tables.nullary {
        table.constants.insert(name.clone(), eval_to_usize(model, cell)?);
    }
    for (name, row) in &tables.unary {
        let values = row.iter().map(|cell| eval_to_usize(model, cell)).collect::<Result<Vec<_>, _>>()?;
        table.unary.insert(name.clone(), values);
    }
    for (name, matrix) in &tables.binary {
        let values = matrix
            .iter()
            .map(|row| row.iter().map(|cell| eval_to_usize(model, cell)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        table.binary.insert(name.clone(), values);
    }
    let _ = ctx;
    Ok(table)
}

fn eval_to_usize(model: &z3::Model, cell: &Int) -> Result<usize, DiscoverError> {
    let evaluated = model
        .eval(cell, true)
        .ok_or_else(|| DiscoverError::SolverError("model evaluation did not assign a value to a table cell".to_string()))?;
    let value = evaluated
        .as_i64()
        .ok_or_else(|| DiscoverError::SolverError("table cell evaluated to a non-integer value".to_string()))?;
    Ok(value as usize)
}

/// A disjunction over every table cell asserting it differs from the
/// model just found, used to rule that exact model out on the next
/// `solver.check()` (§4.4's "enumerating multiple models").
fn blocking_clause<'ctx>(ctx: &'ctx Context, tables: &Tables<'ctx>, model: &CayleyTable) -> Bool<'ctx> {
    let mut diffs = Vec::new();
    for (name, cell) in &tables.nullary {
        let v = model.constants[name];
        diffs.push(cell._eq(&Int::from_i64(ctx, v as i64)).not());
    }
    for (name, row) in &tables.unary {
        let values = &model.unary[name];
        for (cell, v) in row.iter().zip(values) {
            diffs.push(cell._eq(&Int::from_i64(ctx, *v as i64)).not());
        }
    }
    for (name, matrix) in &tables.binary {
        let values = &model.binary[name];
        for (row, value_row) in matrix.iter().zip(values) {
            for (cell, v) in row.iter().zip(value_row) {
                diffs.push(cell._eq(&Int::from_i64(ctx, *v as i64)).not());
            }
        }
    }
    let refs: Vec<&Bool> = diffs.iter().collect();
    Bool::or(ctx, &refs)
}

/// Sweep `[min_size, max_size]` inclusive, calling [`SolverBackend::find_models`]
/// at each size and assembling the results into a [`ModelSpectrum`], per
/// §4.4's "spectrum assembly" — sizes are visited strictly ascending.
pub fn compute_spectrum(
    backend: &dyn SolverBackend,
    sig: &Signature,
    min_size: usize,
    max_size: usize,
    max_per_size: usize,
    timeout_per_call_ms: u64,
) -> Result<ModelSpectrum, DiscoverError> {
    sig.validate().map_err(|_| DiscoverError::SolverError("signature failed validation before model search".to_string()))?;

    let mut spectrum = ModelSpectrum::new();
    for n in min_size..=max_size {
        tracing::debug!(signature = %sig.name, size = n, "solving for finite models");
        match backend.find_models(sig, n, max_per_size, timeout_per_call_ms) {
            Ok((models, timed_out)) => {
                if timed_out {
                    tracing::warn!(signature = %sig.name, size = n, "solver timed out");
                    spectrum.timed_out_sizes.insert(n);
                }
                spectrum.models_by_size.insert(n, models);
            }
            Err(err) => {
                tracing::warn!(signature = %sig.name, size = n, error = %err, "solver error");
                spectrum.errored_sizes.insert(n, err.to_string());
            }
        }
    }
    Ok(spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn z3_backend_is_always_available() {
        assert!(Z3Backend.is_available());
    }

    #[test]
    fn find_models_returns_at_least_one_model_for_a_semigroup() {
        let backend = Z3Backend;
        let (models, timed_out) = backend.find_models(&semigroup(), 2, 5, 2000).unwrap();
        assert!(!models.is_empty());
        assert!(!timed_out);
        for model in &models {
            assert_eq!(model.domain_size, 2);
        }
    }

    #[test]
    fn find_models_respects_max_models_cap() {
        let backend = Z3Backend;
        let (models, _) = backend.find_models(&semigroup(), 2, 1, 2000).unwrap();
        assert!(models.len() <= 1);
    }

    #[test]
    fn blocking_clause_rules_out_duplicate_models() {
        let backend = Z3Backend;
        let (models, _) = backend.find_models(&semigroup(), 2, 10, 2000).unwrap();
        for i in 0..models.len() {
            for j in (i + 1)..models.len() {
                assert_ne!(models[i], models[j], "find_models must not return the same model twice");
            }
        }
    }

    #[test]
    fn find_counterexample_detects_a_non_commutative_model() {
        use discover_ast::Expression;
        let backend = Z3Backend;
        let goal = Expression::eq(
            Expression::apply("mul", vec![Expression::var("x"), Expression::var("y")]),
            Expression::apply("mul", vec![Expression::var("y"), Expression::var("x")]),
        );
        // A semigroup need not be commutative; some size should falsify it.
        let found = (2..=4).any(|n| {
            backend
                .find_counterexample(&semigroup(), &goal, n, 2000)
                .unwrap()
                .is_some()
        });
        assert!(found, "expected a non-commutative semigroup model at some size in 2..=4");
    }

    #[test]
    fn compute_spectrum_sweeps_every_size_ascending() {
        let backend = Z3Backend;
        let spectrum = compute_spectrum(&backend, &semigroup(), 2, 4, 3, 2000).unwrap();
        assert_eq!(spectrum.sizes_checked(), std::collections::BTreeSet::from([2, 3, 4]));
        assert!(spectrum.has_any_model());
    }
}
