//! Signature -> ground SMT encoding, per spec.md §4.4.
//!
//! Every sort collapses to the integer interval `[0, n)`; every operation
//! becomes a table of bounded `Int` constants (one cell for arity 0, `n`
//! cells for arity 1, `n * n` cells for arity 2). Every axiom equation is
//! universally closed over its free variables and expanded into `n^k`
//! ground instances. Because a nested application's argument is itself an
//! unbound table cell rather than a known index, composing applications
//! requires an explicit `ite`-cascade lookup rather than native indexing.

use std::collections::HashMap;

use z3::ast::{Ast, Int};
use z3::{Context, Solver};

use discover_ast::{Expression, Signature};

use crate::heavy::is_heavy;

/// Every operation's table of Z3 `Int` constants, keyed by operation name.
pub struct Tables<'ctx> {
    pub nullary: HashMap<String, Int<'ctx>>,
    pub unary: HashMap<String, Vec<Int<'ctx>>>,
    pub binary: HashMap<String, Vec<Vec<Int<'ctx>>>>,
}

/// A value produced while evaluating an expression against ground
/// variable assignments: either a known literal index (a variable bound
/// by the enclosing ground instance) or a symbolic table cell (the result
/// of applying an operation, whose value the solver has yet to decide).
#[derive(Clone)]
enum Val<'ctx> {
    Literal(usize),
    Symbolic(Int<'ctx>),
}

impl<'ctx> Val<'ctx> {
    fn to_ast(&self, ctx: &'ctx Context) -> Int<'ctx> {
        match self {
            Val::Literal(v) => Int::from_i64(ctx, *v as i64),
            Val::Symbolic(ast) => ast.clone(),
        }
    }
}

/// Declare one bounded `Int` constant per table cell and return the
/// assembled [`Tables`]. Bounds (`0 <= cell < n`) are asserted on `solver`
/// immediately, matching every operation's declared finite codomain.
pub fn build_tables<'ctx>(ctx: &'ctx Context, solver: &Solver<'ctx>, sig: &Signature, n: usize) -> Tables<'ctx> {
    let mut nullary = HashMap::new();
    let mut unary = HashMap::new();
    let mut binary = HashMap::new();

    for op in &sig.operations {
        match op.arity() {
            0 => {
                let cell = Int::new_const(ctx, op.name.as_str());
                assert_bounded(ctx, solver, &cell, n);
                nullary.insert(op.name.clone(), cell);
            }
            1 => {
                let row: Vec<Int<'ctx>> = (0..n)
                    .map(|i| {
                        let cell = Int::new_const(ctx, format!("{}_{i}", op.name));
                        assert_bounded(ctx, solver, &cell, n);
                        cell
                    })
                    .collect();
                unary.insert(op.name.clone(), row);
            }
            2 => {
                let table: Vec<Vec<Int<'ctx>>> = (0..n)
                    .map(|i| {
                        (0..n)
                            .map(|j| {
                                let cell = Int::new_const(ctx, format!("{}_{i}_{j}", op.name));
                                assert_bounded(ctx, solver, &cell, n);
                                cell
                            })
                            .collect()
                    })
                    .collect();
                binary.insert(op.name.clone(), table);
            }
            other => unreachable!("discover signatures only declare operations of arity 0, 1, or 2 (got {other})"),
        }
    }

    Tables { nullary, unary, binary }
}

fn assert_bounded<'ctx>(ctx: &'ctx Context, solver: &Solver<'ctx>, cell: &Int<'ctx>, n: usize) {
    let zero = Int::from_i64(ctx, 0);
    let bound = Int::from_i64(ctx, n as i64);
    solver.assert(&cell.ge(&zero));
    solver.assert(&cell.lt(&bound));
}

/// `table[index]`, resolving `index` via an `n`-arm `ite` cascade when it
/// is itself a symbolic cell rather than a literal.
fn lookup_unary<'ctx>(ctx: &'ctx Context, table: &[Int<'ctx>], index: &Val<'ctx>) -> Val<'ctx> {
    match index {
        Val::Literal(i) => Val::Symbolic(table[*i].clone()),
        Val::Symbolic(index_ast) => {
            let n = table.len();
            let mut acc = table[n - 1].clone();
            for i in (0..n - 1).rev() {
                let cond = index_ast._eq(&Int::from_i64(ctx, i as i64));
                acc = cond.ite(&table[i], &acc);
            }
            Val::Symbolic(acc)
        }
    }
}

/// `table[row][col]`: a row-index `ite` cascade wrapping a per-row
/// [`lookup_unary`], per §4.4's "2-D" lookup rule.
fn lookup_binary<'ctx>(ctx: &'ctx Context, table: &[Vec<Int<'ctx>>], row: &Val<'ctx>, col: &Val<'ctx>) -> Val<'ctx> {
    match row {
        Val::Literal(i) => lookup_unary(ctx, &table[*i], col),
        Val::Symbolic(row_ast) => {
            let n = table.len();
            let row_vals: Vec<Int<'ctx>> = table.iter().map(|r| lookup_unary(ctx, r, col).to_ast(ctx)).collect();
            let mut acc = row_vals[n - 1].clone();
            for i in (0..n - 1).rev() {
                let cond = row_ast._eq(&Int::from_i64(ctx, i as i64));
                acc = cond.ite(&row_vals[i], &acc);
            }
            Val::Symbolic(acc)
        }
    }
}

fn eval_expr<'ctx>(ctx: &'ctx Context, tables: &Tables<'ctx>, env: &HashMap<String, Val<'ctx>>, expr: &Expression) -> Val<'ctx> {
    match expr {
        Expression::Variable(name) => env
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("ground instantiation left variable '{name}' unbound")),
        Expression::Constant(name) => Val::Symbolic(
            tables
                .nullary
                .get(name)
                .unwrap_or_else(|| panic!("constant '{name}' has no declared nullary operation"))
                .clone(),
        ),
        Expression::Application { operation, args } => match args.len() {
            1 => {
                let a = eval_expr(ctx, tables, env, &args[0]);
                let table = tables
                    .unary
                    .get(operation)
                    .unwrap_or_else(|| panic!("'{operation}' has no declared unary table"));
                lookup_unary(ctx, table, &a)
            }
            2 => {
                let a = eval_expr(ctx, tables, env, &args[0]);
                let b = eval_expr(ctx, tables, env, &args[1]);
                let table = tables
                    .binary
                    .get(operation)
                    .unwrap_or_else(|| panic!("'{operation}' has no declared binary table"));
                lookup_binary(ctx, table, &a, &b)
            }
            other => unreachable!("axiom applications only use unary/binary operations (got arity {other})"),
        },
        Expression::Equation { .. } => unreachable!("equations are asserted, never evaluated as a value"),
    }
}

/// All assignments of `vars` to `[0, n)`, in lexicographic (odometer)
/// order — `n^{|vars|}` total, per §4.4's ground-instantiation rule.
pub(crate) fn enumerate_assignments(vars: &[String], n: usize) -> Vec<HashMap<String, usize>> {
    if vars.is_empty() {
        return vec![HashMap::new()];
    }
    let mut out = vec![HashMap::new()];
    for var in vars {
        let mut next = Vec::with_capacity(out.len() * n);
        for env in &out {
            for v in 0..n {
                let mut extended = env.clone();
                extended.insert(var.clone(), v);
                next.push(extended);
            }
        }
        out = next;
    }
    out
}

fn literal_env<'ctx>(env: &HashMap<String, usize>) -> HashMap<String, Val<'ctx>> {
    env.iter().map(|(k, &v)| (k.clone(), Val::Literal(v))).collect()
}

fn assert_ground_equation<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    tables: &Tables<'ctx>,
    env: &HashMap<String, usize>,
    equation: &Expression,
) {
    let Expression::Equation { lhs, rhs } = equation else {
        panic!("axiom equations must be Expression::Equation");
    };
    let env = literal_env(env);
    let l = eval_expr(ctx, tables, &env, lhs).to_ast(ctx);
    let r = eval_expr(ctx, tables, &env, rhs).to_ast(ctx);
    solver.assert(&l._eq(&r));
}

/// Append the lex-leader symmetry-breaking constraint for `sig`'s first
/// binary operation, if `sig` is [`is_heavy`]: the first row of its table
/// must be non-decreasing.
fn assert_symmetry_breaking<'ctx>(ctx: &'ctx Context, solver: &Solver<'ctx>, sig: &Signature, tables: &Tables<'ctx>) {
    if !is_heavy(sig) {
        return;
    }
    let Some(first_binary) = sig.operations.iter().find(|op| op.arity() == 2) else {
        return;
    };
    let Some(table) = tables.binary.get(&first_binary.name) else {
        return;
    };
    let row0 = &table[0];
    for pair in row0.windows(2) {
        solver.assert(&pair[0].le(&pair[1]));
    }
    let _ = ctx;
}

/// Build every table cell, bound constraint, axiom ground instance, and
/// (when applicable) symmetry-breaking constraint for `sig` at domain
/// size `n`, asserting them all on `solver`.
pub fn encode_signature<'ctx>(ctx: &'ctx Context, solver: &Solver<'ctx>, sig: &Signature, n: usize) -> Tables<'ctx> {
    let tables = build_tables(ctx, solver, sig, n);
    for axiom in &sig.axioms {
        let vars: Vec<String> = axiom.equation.variables().into_iter().collect();
        for env in enumerate_assignments(&vars, n) {
            assert_ground_equation(ctx, solver, &tables, &env, &axiom.equation);
        }
    }
    assert_symmetry_breaking(ctx, solver, sig, &tables);
    tables
}

/// Encode `sig` as usual, then assert the *negation* of `goal` over
/// fresh, existentially-quantified bounded `Int` constants for its free
/// variables — one set of decision variables for the solver to pick,
/// rather than the `n^k` universal ground instances axioms get. A model
/// satisfying the combined assertion is a finite counterexample to
/// `goal` at size `n`, which is how [`crate::backend`]'s `prove`-support
/// delegates a conjecture to the model finder per §9's Design Notes
/// ("callers needing a counter-model must call the model finder with
/// the negated conjecture").
pub fn encode_signature_with_negated_goal<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    sig: &Signature,
    goal: &Expression,
    n: usize,
) -> Tables<'ctx> {
    let tables = encode_signature(ctx, solver, sig, n);
    let Expression::Equation { lhs, rhs } = goal else {
        panic!("goal must be an Expression::Equation");
    };
    let vars: Vec<String> = goal.variables().into_iter().collect();
    let mut env: HashMap<String, Val<'ctx>> = HashMap::new();
    for var in &vars {
        let cell = Int::new_const(ctx, format!("goal_{var}"));
        assert_bounded(ctx, solver, &cell, n);
        env.insert(var.clone(), Val::Symbolic(cell));
    }
    let l = eval_expr(ctx, &tables, &env, lhs).to_ast(ctx);
    let r = eval_expr(ctx, &tables, &env, rhs).to_ast(ctx);
    solver.assert(&l._eq(&r).not());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_ast::{Axiom, AxiomKind, Operation, Sort};
    use z3::{Config, SatResult};

    fn semigroup() -> Signature {
        let mut sig = Signature::new("semigroup");
        sig.sorts.push(Sort::new("S"));
        sig.operations.push(Operation::binary("mul", "S", "S", "S"));
        sig.axioms
            .push(Axiom::canonical(AxiomKind::Associativity, vec!["mul".to_string()], "assoc").unwrap());
        sig
    }

    #[test]
    fn associative_signature_is_satisfiable_at_size_two() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);
        let sig = semigroup();
        encode_signature(&ctx, &solver, &sig, 2);
        assert_eq!(solver.check(), SatResult::Sat);
    }

    #[test]
    fn enumerate_assignments_counts_n_to_the_k() {
        let vars = vec!["x".to_string(), "y".to_string()];
        assert_eq!(enumerate_assignments(&vars, 3).len(), 9);
    }

    #[test]
    fn enumerate_assignments_with_no_vars_yields_one_empty_env() {
        assert_eq!(enumerate_assignments(&[], 5).len(), 1);
    }

    #[test]
    fn heavy_signature_gets_symmetry_breaking_row() {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let solver = Solver::new(&ctx);
        let mut sig = semigroup();
        sig.axioms
            .push(Axiom::canonical(AxiomKind::SelfDistributivity, vec!["mul".to_string()], "sd").unwrap());
        let tables = encode_signature(&ctx, &solver, &sig, 3);
        assert!(tables.binary.contains_key("mul"));
        assert_eq!(solver.check(), SatResult::Sat);
    }
}
