//! Submodule providing the [`CostMatrix`] value used throughout the
//! branch-and-bound search.

use crate::algorithms::assignment;
use crate::errors::AssignmentError;

/// A square cost matrix over `0..m+n` paired with an optimal assignment
/// and that assignment's cost — a lower bound on the cost of any
/// completion consistent with the sub-problem the matrix represents.
///
/// `C` is laid out, for a sub-problem of `m` "left" elements (vertices or
/// edges of `G1`) and `n` "right" elements (of `G2`), as four blocks:
/// top-left `m×n` substitution costs, top-right `m×m` deletion costs (on
/// the diagonal, a large sentinel elsewhere), bottom-left `n×n` insertion
/// costs (diagonal), bottom-right `n×m` zeros. See
/// [`super::initial_matrix`] for how the blocks are populated.
///
/// After [`CostMatrix::construct`], every "dummy" pairing `(k, l)` with
/// `row_ind[k] >= m` and `col_ind[k] >= n` is canonicalised against the
/// unique substitution pairing `(k', l')` it is paired with, such that
/// `row_ind[k] = col_ind[k'] + m` and `col_ind[k] = row_ind[k'] + n`. This
/// is what lets [`CostMatrix::reduce_committed`] avoid re-solving the
/// LSAP when the committed pair is the one the assignment already
/// recommends.
#[derive(Debug, Clone)]
pub(crate) struct CostMatrix {
    /// The `(m+n) x (m+n)` cost matrix.
    pub(crate) c: Vec<Vec<f64>>,
    /// `row_ind[k]` is the row of the `k`-th pairing in the optimal
    /// assignment.
    pub(crate) row_ind: Vec<usize>,
    /// `col_ind[k]` is the column of the `k`-th pairing in the optimal
    /// assignment.
    pub(crate) col_ind: Vec<usize>,
    /// Sum of `c[row_ind[k]][col_ind[k]]` over all `k` — the lower bound
    /// this sub-problem contributes to any completion's cost.
    pub(crate) ls: f64,
}

impl CostMatrix {
    /// Solves the LSAP on `c` and canonicalises the dummy pairings,
    /// given the sub-problem's `(m, n)` split.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying [`assignment::solve`].
    pub(crate) fn construct(c: Vec<Vec<f64>>, m: usize, n: usize) -> Result<Self, AssignmentError> {
        let size = c.len();
        let col_of_row = assignment::solve(&c)?;

        let mut row_ind: Vec<usize> = (0..size).collect();
        let mut col_ind: Vec<usize> = col_of_row;

        let subst_ind: Vec<usize> =
            (0..size).filter(|&k| row_ind[k] < m && col_ind[k] < n).collect();
        let dummy_ind: Vec<usize> =
            (0..size).filter(|&k| row_ind[k] >= m && col_ind[k] >= n).collect();
        debug_assert_eq!(
            subst_ind.len(),
            dummy_ind.len(),
            "the number of substitution pairings always equals the number of dummy pairings"
        );

        for (&s, &d) in subst_ind.iter().zip(dummy_ind.iter()) {
            row_ind[d] = col_ind[s] + m;
            col_ind[d] = row_ind[s] + n;
        }

        let ls = row_ind.iter().zip(col_ind.iter()).map(|(&r, &cc)| c[r][cc]).sum();

        Ok(Self { c, row_ind, col_ind, ls })
    }

    /// Builds the submatrix of `self.c` keeping row `k` iff `k ∈ rows` or
    /// `k - m ∈ cols`, and column `k` iff `k ∈ cols` or `k - n ∈ rows`.
    ///
    /// Used to form the LSAP input for an edge-match subproblem.
    #[must_use]
    pub(crate) fn extract_sub(&self, rows: &[usize], cols: &[usize], m: usize, n: usize) -> Vec<Vec<f64>> {
        let size = self.c.len();
        let keep_row = |k: usize| rows.contains(&k) || (k >= m && cols.contains(&(k - m)));
        let keep_col = |k: usize| cols.contains(&k) || (k >= n && rows.contains(&(k - n)));

        let row_indices: Vec<usize> = (0..size).filter(|&k| keep_row(k)).collect();
        let col_indices: Vec<usize> = (0..size).filter(|&k| keep_col(k)).collect();

        row_indices
            .iter()
            .map(|&r| col_indices.iter().map(|&cc| self.c[r][cc]).collect())
            .collect()
    }

    /// Builds the complementary submatrix of `self.c`: keeps row `k` iff
    /// `k ∉ rows` and `k - m ∉ cols`, and column `k` iff `k ∉ cols` and
    /// `k - n ∉ rows`.
    ///
    /// Used to shrink `Cv`/`Ce` after committing an assignment.
    #[must_use]
    pub(crate) fn reduce_sub(&self, rows: &[usize], cols: &[usize], m: usize, n: usize) -> Vec<Vec<f64>> {
        let size = self.c.len();
        let drop_row = |k: usize| rows.contains(&k) || (k >= m && cols.contains(&(k - m)));
        let drop_col = |k: usize| cols.contains(&k) || (k >= n && rows.contains(&(k - n)));

        let row_indices: Vec<usize> = (0..size).filter(|&k| !drop_row(k)).collect();
        let col_indices: Vec<usize> = (0..size).filter(|&k| !drop_col(k)).collect();

        row_indices
            .iter()
            .map(|&r| col_indices.iter().map(|&cc| self.c[r][cc]).collect())
            .collect()
    }

    /// Reindexes an assignment permutation after removing the given
    /// values, so that the remaining values are contiguous again.
    ///
    /// Every value of `ind` that is in `removed` is dropped; every
    /// surviving value is shifted down by the number of removed values
    /// that are less than or equal to it.
    #[must_use]
    pub(crate) fn reduce_ind(ind: &[usize], removed: &[usize]) -> Vec<usize> {
        ind.iter()
            .filter(|value| !removed.contains(value))
            .map(|&value| value - removed.iter().filter(|&&r| r <= value).count())
            .collect()
    }

    /// Fast-path reduction after committing the LSAP-recommended pair
    /// `(i, j)` of a sub-problem of size `(m, n)`: drops row `i` and its
    /// companion dummy row `m + j`, drops column `j` and its companion
    /// dummy column `n + i`, and computes the new lower bound as
    /// `self.ls - self.c[i][j]` without re-solving the LSAP.
    ///
    /// Only valid when `(i, j)` is the pairing [`CostMatrix::construct`]
    /// already recommended; see [`CostMatrix::reduce_general`] otherwise.
    #[must_use]
    pub(crate) fn reduce_committed(&self, i: usize, j: usize, m: usize, n: usize) -> CostMatrix {
        let c = self.reduce_sub(&[i], &[j], m, n);
        let row_ind = Self::reduce_ind(&self.row_ind, &[i, m + j]);
        let col_ind = Self::reduce_ind(&self.col_ind, &[j, n + i]);
        let ls = self.ls - self.c[i][j];
        CostMatrix { c, row_ind, col_ind, ls }
    }

    /// Reduction after committing an arbitrary set of `(row, col)`
    /// pairings at once, re-solving the LSAP on the reduced matrix.
    ///
    /// Used to shrink `Ce` by every edge pairing an edge-match subproblem
    /// selected. Returns `self` unchanged, cloned, if `pairs` is empty.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CostMatrix::construct`].
    pub(crate) fn reduce_multi(
        &self,
        pairs: &[(usize, usize)],
        m: usize,
        n: usize,
    ) -> Result<CostMatrix, AssignmentError> {
        if pairs.is_empty() {
            return Ok(self.clone());
        }
        let rows: Vec<usize> = pairs.iter().map(|&(r, _)| r).collect();
        let cols: Vec<usize> = pairs.iter().map(|&(_, c)| c).collect();
        let new_m = m - rows.iter().filter(|&&r| r < m).count();
        let new_n = n - cols.iter().filter(|&&c| c < n).count();
        CostMatrix::construct(self.reduce_sub(&rows, &cols, m, n), new_m, new_n)
    }

    /// General-path reduction after committing a pair `(i, j)` that is
    /// *not* the LSAP-recommended one: re-solves the LSAP on the reduced
    /// matrix from scratch.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CostMatrix::construct`].
    pub(crate) fn reduce_general(
        &self,
        i: usize,
        j: usize,
        m: usize,
        n: usize,
    ) -> Result<CostMatrix, AssignmentError> {
        let c = self.reduce_sub(&[i], &[j], m, n);
        let new_m = if i < m { m - 1 } else { m };
        let new_n = if j < n { n - 1 } else { n };
        CostMatrix::construct(c, new_m, new_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_canonicalises_dummy_pairings() {
        // m = n = 1: a single substitution is cheaper than del+ins.
        let c = vec![vec![0.5, 1.0, f64::MAX / 4.0], vec![1.0, f64::MAX / 4.0, 0.0], vec![
            f64::MAX / 4.0,
            0.0,
            0.0,
        ]];
        let cm = CostMatrix::construct(c, 1, 1).unwrap();
        assert!((cm.ls - 0.5).abs() < 1e-9);
        // The substitution pairing (0, 0) must exist.
        let subst =
            cm.row_ind.iter().zip(cm.col_ind.iter()).find(|&(&r, &cc)| r < 1 && cc < 1).unwrap();
        assert_eq!(*subst.0, 0);
        assert_eq!(*subst.1, 0);
    }

    #[test]
    fn reduce_ind_drops_and_reindexes() {
        let ind = vec![0, 1, 3, 4, 6, 7];
        let reduced = CostMatrix::reduce_ind(&ind, &[2, 5]);
        assert_eq!(reduced, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn reduce_ind_is_order_independent_in_removed_set() {
        let ind = vec![0, 4, 5];
        let a = CostMatrix::reduce_ind(&ind, &[1, 3]);
        let b = CostMatrix::reduce_ind(&ind, &[3, 1]);
        assert_eq!(a, b);
    }

    #[test]
    fn reduce_committed_matches_slow_ls_delta() {
        let c = vec![
            vec![0.0, 1.0, 5.0, 100.0],
            vec![1.0, 0.0, 100.0, 5.0],
            vec![5.0, 100.0, 0.0, 0.0],
            vec![100.0, 5.0, 0.0, 0.0],
        ];
        let cm = CostMatrix::construct(c, 2, 2).unwrap();
        let (&i, &j) =
            cm.row_ind.iter().zip(cm.col_ind.iter()).find(|&(&r, &cc)| r < 2 && cc < 2).unwrap();
        let reduced = cm.reduce_committed(i, j, 2, 2);
        let expected = CostMatrix::construct(cm.reduce_sub(&[i], &[j], 2, 2), 1, 1).unwrap();
        assert!((reduced.ls - expected.ls).abs() < 1e-9);
    }
}
