//! Submodule solving the small edge-assignment subproblem induced by a
//! proposed vertex pairing.

use crate::algorithms::cost_matrix::CostMatrix;
use crate::errors::AssignmentError;

/// Result of matching the edges made pending by a vertex pairing `(u,
/// v)`: the chosen edge-index pairs and the local `CostMatrix` over
/// them.
pub(crate) struct EdgeMatch {
    /// `(x, y)` index pairs into the combined `pending_g`/`pending_h`
    /// index space (an index `>= pending_g.len()` on the `x` side, or
    /// `>= pending_h.len()` on the `y` side, denotes a dummy partner and
    /// is resolved by the caller into a deletion or insertion).
    pub(crate) xy: Vec<(usize, usize)>,
    /// The local `CostMatrix` solved over the induced edge subproblem.
    pub(crate) local_ce: CostMatrix,
}

/// Returns whether `edge` equals the ordered pair `(a, b)`, where either
/// side of `edge` may be compared against an absent endpoint (`None`,
/// meaning "this is a deletion/insertion, never equal to a real node").
fn edge_eq<N: Copy + Eq>(edge: (N, N), a: Option<N>, b: Option<N>) -> bool {
    Some(edge.0) == a && Some(edge.1) == b
}

/// Selects, out of `pending`, the indices of edges incident to `anchor`
/// itself or to an already-matched endpoint from `matched`, where
/// `matched` pairs an edge endpoint with the side of the vertex pairing
/// relevant to `pending`.
fn induced_indices<N: Copy + Eq>(pending: &[(N, N)], anchor: Option<N>, matched: &[Option<N>]) -> Vec<usize> {
    pending
        .iter()
        .enumerate()
        .filter(|&(_, &edge)| {
            edge_eq(edge, anchor, anchor)
                || matched.iter().any(|&p| edge_eq(edge, p, anchor) || edge_eq(edge, anchor, p))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Solves the edge-match subproblem for the proposed vertex pairing `(u,
/// v)` against the partial vertex path `matched_uv`.
///
/// # Errors
///
/// Propagates any error from the underlying LSAP solve.
#[allow(clippy::too_many_arguments)]
pub(crate) fn match_edges<N1: Copy + Eq, N2: Copy + Eq>(
    u: Option<N1>,
    v: Option<N2>,
    pending_g: &[(N1, N1)],
    pending_h: &[(N2, N2)],
    ce: &CostMatrix,
    matched_uv: &[(Option<N1>, Option<N2>)],
    directed: bool,
) -> Result<EdgeMatch, AssignmentError> {
    let big_m = pending_g.len();
    let big_n = pending_h.len();

    let matched_g_side: Vec<Option<N1>> = matched_uv.iter().map(|&(p, _)| p).collect();
    let matched_h_side: Vec<Option<N2>> = matched_uv.iter().map(|&(_, q)| q).collect();

    let g_ind = induced_indices(pending_g, u, &matched_g_side);
    let h_ind = induced_indices(pending_h, v, &matched_h_side);
    let m = g_ind.len();
    let n = h_ind.len();

    if m == 0 && n == 0 {
        return Ok(EdgeMatch {
            xy: Vec::new(),
            local_ce: CostMatrix { c: Vec::new(), row_ind: Vec::new(), col_ind: Vec::new(), ls: 0.0 },
        });
    }

    let mut c = ce.extract_sub(&g_ind, &h_ind, big_m, big_n);
    let sentinel = c.iter().flatten().sum::<f64>() + 1.0;

    for (k, &gi) in g_ind.iter().enumerate() {
        let g = pending_g[gi];
        for (l, &hj) in h_ind.iter().enumerate() {
            let h = pending_h[hj];

            let orientation_valid = matched_uv.iter().any(|&(p, q)| {
                if directed {
                    edge_eq(g, p, u) && edge_eq(h, q, v)
                } else {
                    (edge_eq(g, p, u) || edge_eq(g, u, p)) && (edge_eq(h, q, v) || edge_eq(h, v, q))
                }
            });
            let both_self_loops = edge_eq(g, u, u) && edge_eq(h, v, v);

            if !(orientation_valid || both_self_loops) {
                c[k][l] = sentinel;
            }
        }
    }

    let local_ce = CostMatrix::construct(c, m, n)?;

    let xy: Vec<(usize, usize)> = local_ce
        .row_ind
        .iter()
        .zip(local_ce.col_ind.iter())
        .filter(|&(&k, &l)| k < m || l < n)
        .map(|(&k, &l)| {
            let x = if k < m { g_ind[k] } else { big_m + h_ind[l] };
            let y = if l < n { h_ind[l] } else { big_n + g_ind[k] };
            (x, y)
        })
        .collect();

    Ok(EdgeMatch { xy, local_ce })
}

/// Reduces `ce` by every edge pairing chosen in `xy`, given the full
/// `pending_g`/`pending_h` lengths.
///
/// # Errors
///
/// Propagates any error from the underlying LSAP solve.
pub(crate) fn reduce_ce(ce: &CostMatrix, xy: &[(usize, usize)], m: usize, n: usize) -> Result<CostMatrix, AssignmentError> {
    ce.reduce_multi(xy, m, n)
}
