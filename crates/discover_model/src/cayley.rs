//! Cayley-table analysis: per-model structural predicates, spec.md §4.5.
//!
//! Every predicate here operates on a single binary operation's `n x n`
//! table of indices in `[0, n)`, plus a post-hoc [`verify_model`] that
//! checks a whole [`CayleyTable`] against a [`Signature`]'s axioms by
//! direct ground evaluation (no solver involved) — the §8 "post-hoc
//! verifier" testable property.

use std::collections::HashMap;

use discover_ast::{Expression, Signature};

use crate::encode::enumerate_assignments;
use crate::table::CayleyTable;

/// Is every row and every column of `table` a permutation of `0..n`
/// (the quasigroup / Latin-square property)?
pub fn is_latin_square(table: &[Vec<usize>]) -> bool {
    let n = table.len();
    (0..n).all(|i| is_permutation(&table[i], n)) && (0..n).all(|j| is_permutation(&column(table, j), n))
}

fn column(table: &[Vec<usize>], j: usize) -> Vec<usize> {
    table.iter().map(|row| row[j]).collect()
}

fn is_permutation(row: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    for &v in row {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Is `table` its own transpose?
pub fn is_commutative(table: &[Vec<usize>]) -> bool {
    let n = table.len();
    (0..n).all(|i| (0..n).all(|j| table[i][j] == table[j][i]))
}

/// The first index `e` with `table[e][x] = x` and `table[x][e] = x` for
/// every `x`, or `None` if no such index exists.
pub fn identity(table: &[Vec<usize>]) -> Option<usize> {
    let n = table.len();
    (0..n).find(|&e| (0..n).all(|x| table[e][x] == x && table[x][e] == x))
}

/// Does `table[table[a][b]][c] = table[a][table[b][c]]` for every triple?
pub fn is_associative(table: &[Vec<usize>]) -> bool {
    let n = table.len();
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                if table[table[a][b]][c] != table[a][table[b][c]] {
                    return false;
                }
            }
        }
    }
    true
}

fn shannon_entropy(values: &[usize], n: usize) -> f64 {
    let mut counts = vec![0usize; n];
    for &v in values {
        counts[v] += 1;
    }
    let total = values.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Mean Shannon entropy (base-2) of each row's value distribution.
pub fn row_entropy(table: &[Vec<usize>]) -> f64 {
    let n = table.len();
    if n == 0 {
        return 0.0;
    }
    table.iter().map(|row| shannon_entropy(row, n)).sum::<f64>() / n as f64
}

/// Mean of (distinct elements per row) and (distinct elements per
/// column), each normalized by `n`.
pub fn symmetry_score(table: &[Vec<usize>]) -> f64 {
    let n = table.len();
    if n == 0 {
        return 0.0;
    }
    let row_distinct: f64 = table
        .iter()
        .map(|row| row.iter().collect::<std::collections::HashSet<_>>().len() as f64 / n as f64)
        .sum::<f64>()
        / n as f64;
    let col_distinct: f64 = (0..n)
        .map(|j| column(table, j).iter().collect::<std::collections::HashSet<_>>().len() as f64 / n as f64)
        .sum::<f64>()
        / n as f64;
    (row_distinct + col_distinct) / 2.0
}

const AUTOMORPHISM_MAX_N: usize = 8;
const ISOMORPHISM_MAX_N: usize = 10;

/// Every permutation of `0..n`, via Heap's algorithm.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut items: Vec<usize> = (0..n).collect();
    let mut out = vec![items.clone()];
    let mut c = vec![0usize; n];
    let mut i = 0;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(c[i], i);
            }
            out.push(items.clone());
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    out
}

/// The number of permutations `pi` of `0..n` with
/// `pi(table[a][b]) = table[pi(a)][pi(b)]` for every `a, b`, brute-forced
/// for `n <= 8` per §4.5; `None` above that size (not computed).
pub fn automorphism_count(table: &[Vec<usize>]) -> Option<usize> {
    let n = table.len();
    if n > AUTOMORPHISM_MAX_N {
        return None;
    }
    let count = permutations(n)
        .into_iter()
        .filter(|perm| (0..n).all(|a| (0..n).all(|b| perm[table[a][b]] == table[perm[a]][perm[b]])))
        .count();
    Some(count)
}

/// Is there a permutation `pi` of `0..n` with
/// `pi(t1[a][b]) = t2[pi(a)][pi(b)]` for every `a, b`? Brute-forced for
/// `n <= 10` per §4.5; `None` above that size (not computed). Both
/// tables must be the same size to be isomorphic.
pub fn is_isomorphic(t1: &[Vec<usize>], t2: &[Vec<usize>]) -> Option<bool> {
    let n = t1.len();
    if t2.len() != n {
        return Some(false);
    }
    if n > ISOMORPHISM_MAX_N {
        return None;
    }
    Some(
        permutations(n)
            .into_iter()
            .any(|perm| (0..n).all(|a| (0..n).all(|b| perm[t1[a][b]] == t2[perm[a]][perm[b]]))),
    )
}

fn eval_ground(table: &CayleyTable, env: &HashMap<String, usize>, expr: &Expression) -> usize {
    match expr {
        Expression::Variable(name) => env[name],
        Expression::Constant(name) => table.constants[name],
        Expression::Application { operation, args } => match args.len() {
            1 => {
                let a = eval_ground(table, env, &args[0]);
                table.unary[operation][a]
            }
            2 => {
                let a = eval_ground(table, env, &args[0]);
                let b = eval_ground(table, env, &args[1]);
                table.binary[operation][a][b]
            }
            other => unreachable!("axiom applications only use unary/binary operations (got arity {other})"),
        },
        Expression::Equation { .. } => unreachable!("equations are asserted, never evaluated as a value"),
    }
}

/// Check every axiom of `sig` against its ground instantiation over
/// `table`'s domain, by direct evaluation — no solver involved. Used both
/// by this crate's own tests and as the §8 "post-hoc verifier must
/// accept" property for any model [`crate::compute_spectrum`] reports.
pub fn verify_model(sig: &Signature, table: &CayleyTable) -> bool {
    let n = table.domain_size;
    for axiom in &sig.axioms {
        let Expression::Equation { lhs, rhs } = &axiom.equation else {
            continue;
        };
        let vars: Vec<String> = axiom.equation.variables().into_iter().collect();
        for env in enumerate_assignments(&vars, n) {
            if eval_ground(table, &env, lhs) != eval_ground(table, &env, rhs) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z3_table() -> Vec<Vec<usize>> {
        // Z/3Z addition table.
        vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]
    }

    #[test]
    fn z3_addition_is_a_latin_square() {
        assert!(is_latin_square(&z3_table()));
    }

    #[test]
    fn non_latin_table_is_rejected() {
        let table = vec![vec![0, 0], vec![1, 1]];
        assert!(!is_latin_square(&table));
    }

    #[test]
    fn z3_addition_is_commutative() {
        assert!(is_commutative(&z3_table()));
    }

    #[test]
    fn non_symmetric_table_is_not_commutative() {
        let table = vec![vec![0, 1], vec![0, 1]];
        assert!(!is_commutative(&table));
    }

    #[test]
    fn z3_addition_has_identity_zero() {
        assert_eq!(identity(&z3_table()), Some(0));
    }

    #[test]
    fn table_with_no_identity_returns_none() {
        let table = vec![vec![1, 0], vec![0, 1]];
        assert_eq!(identity(&table), None);
    }

    #[test]
    fn z3_addition_is_associative() {
        assert!(is_associative(&z3_table()));
    }

    #[test]
    fn non_associative_table_is_detected() {
        // Subtraction mod 3: (0 - 1) - 1 = 1, but 0 - (1 - 1) = 0.
        let table = vec![vec![0, 2, 1], vec![1, 0, 2], vec![2, 1, 0]];
        assert!(!is_associative(&table));
    }

    #[test]
    fn row_entropy_of_latin_square_is_maximal() {
        let entropy = row_entropy(&z3_table());
        assert!((entropy - 3f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn row_entropy_of_constant_table_is_zero() {
        let table = vec![vec![0, 0], vec![0, 0]];
        assert_eq!(row_entropy(&table), 0.0);
    }

    #[test]
    fn symmetry_score_of_latin_square_is_one() {
        assert_eq!(symmetry_score(&z3_table()), 1.0);
    }

    #[test]
    fn z3_automorphism_count_is_two() {
        // Z/3Z has Aut(Z/3Z) = {id, x -> 2x}, size 2.
        assert_eq!(automorphism_count(&z3_table()), Some(2));
    }

    #[test]
    fn automorphism_count_above_size_eight_is_not_computed() {
        let table = vec![vec![0; 9]; 9];
        assert_eq!(automorphism_count(&table), None);
    }

    #[test]
    fn isomorphic_tables_with_relabeled_elements_are_detected() {
        // Swap elements 1 and 2 in the Z/3Z table.
        let relabeled = vec![vec![0, 2, 1], vec![2, 1, 0], vec![1, 0, 2]];
        assert_eq!(is_isomorphic(&z3_table(), &relabeled), Some(true));
    }

    #[test]
    fn tables_of_different_size_are_not_isomorphic() {
        let small = vec![vec![0]];
        assert_eq!(is_isomorphic(&z3_table(), &small), Some(false));
    }

    #[test]
    fn isomorphism_above_size_ten_is_not_computed() {
        let table = vec![vec![0; 11]; 11];
        assert_eq!(is_isomorphic(&table, &table), None);
    }
}
