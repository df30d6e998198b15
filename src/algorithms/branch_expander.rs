//! Submodule generating, for a partial vertex-match state, the ordered
//! sequence of candidate next vertex operations the search driver should
//! recurse into.

use crate::algorithms::cost_matrix::CostMatrix;
use crate::algorithms::edge_matcher::{match_edges, reduce_ce};
use crate::errors::AssignmentError;

/// A single candidate vertex operation: commit `ij` (an index pair into
/// the current `Cv`, where a value `>= m`/`>= n` denotes deletion or
/// insertion), along with the reduced `Cv`/`Ce` this commitment implies
/// and the edit cost it contributes.
#[derive(Clone)]
pub(crate) struct Candidate {
    /// `(i, j)` indices into the current `Cv`.
    pub(crate) ij: (usize, usize),
    /// `Cv` reduced by committing `ij`.
    pub(crate) cv_reduced: CostMatrix,
    /// Edge-index pairs committed alongside `ij`.
    pub(crate) xy: Vec<(usize, usize)>,
    /// `Ce` reduced by committing every pair in `xy`.
    pub(crate) ce_reduced: CostMatrix,
    /// `Cv.c[ij.0][ij.1] + ce_local.ls`: this candidate's direct cost
    /// contribution, excluding the lower bounds carried by
    /// `cv_reduced`/`ce_reduced`.
    pub(crate) edit_cost: f64,
}

/// Generates the ordered candidate list for the current partial state.
///
/// The LSAP-recommended pairing is tried first (cheapest single
/// extension); alternatives are generated by fixing the minority axis of
/// `Cv` at its LSAP-recommended index and varying the other, each put
/// through an increasingly expensive cascade of prune checks, and the
/// survivors are sorted ascending by estimated total cost.
///
/// # Errors
///
/// Propagates any error from the underlying LSAP solves.
#[allow(clippy::too_many_arguments)]
pub(crate) fn expand<N1: Copy + Eq, N2: Copy + Eq>(
    pending_u: &[N1],
    pending_v: &[N2],
    cv: &CostMatrix,
    pending_g: &[(N1, N1)],
    pending_h: &[(N2, N2)],
    ce: &CostMatrix,
    matched_uv: &[(Option<N1>, Option<N2>)],
    directed: bool,
    matched_cost: f64,
    prune: &impl Fn(f64) -> bool,
) -> Result<Vec<Candidate>, AssignmentError> {
    let m = pending_u.len();
    let n = pending_v.len();

    let (i_star, j_star) = cv
        .row_ind
        .iter()
        .zip(cv.col_ind.iter())
        .filter(|&(&k, &l)| k < m || l < n)
        .map(|(&k, &l)| (k, l))
        .min()
        .expect("Cv always carries a non-dummy-dummy pairing while vertices remain pending");

    let mut candidates = Vec::new();

    let recommended = resolve_candidate(
        i_star, j_star, pending_u, pending_v, cv, pending_g, pending_h, ce, matched_uv, directed, matched_cost,
        prune, true,
    )?;
    if let Some(candidate) = recommended {
        candidates.push(candidate);
    }

    let size = m + n;
    let alternative_indices: Vec<(usize, usize)> = if m <= n {
        (0..size).filter(|&t| t != i_star && (t < m || t == m + j_star)).map(|t| (t, j_star)).collect()
    } else {
        (0..size).filter(|&t| t != j_star && (t < n || t == n + i_star)).map(|t| (i_star, t)).collect()
    };

    let mut other = Vec::new();
    for (i, j) in alternative_indices {
        if let Some(candidate) = resolve_candidate(
            i, j, pending_u, pending_v, cv, pending_g, pending_h, ce, matched_uv, directed, matched_cost, prune,
            false,
        )? {
            other.push(candidate);
        }
    }
    other.sort_by(|a, b| {
        let cost_a = a.edit_cost + a.cv_reduced.ls + a.ce_reduced.ls;
        let cost_b = b.edit_cost + b.cv_reduced.ls + b.ce_reduced.ls;
        cost_a.total_cmp(&cost_b)
    });
    candidates.extend(other);

    Ok(candidates)
}

/// Resolves a single `(i, j)` candidate, applying the prune cascade
/// appropriate to whether it is the LSAP-recommended pairing (fast path,
/// `Cv` reduction is free) or an alternative (general path, `Cv`
/// reduction re-solves the LSAP).
#[allow(clippy::too_many_arguments)]
fn resolve_candidate<N1: Copy + Eq, N2: Copy + Eq>(
    i: usize,
    j: usize,
    pending_u: &[N1],
    pending_v: &[N2],
    cv: &CostMatrix,
    pending_g: &[(N1, N1)],
    pending_h: &[(N2, N2)],
    ce: &CostMatrix,
    matched_uv: &[(Option<N1>, Option<N2>)],
    directed: bool,
    matched_cost: f64,
    prune: &impl Fn(f64) -> bool,
    is_recommended: bool,
) -> Result<Option<Candidate>, AssignmentError> {
    let m = pending_u.len();
    let n = pending_v.len();

    if !is_recommended && prune(matched_cost + cv.c[i][j] + ce.ls) {
        return Ok(None);
    }

    let cv_reduced =
        if is_recommended { cv.reduce_committed(i, j, m, n) } else { cv.reduce_general(i, j, m, n)? };

    if !is_recommended && prune(matched_cost + cv.c[i][j] + cv_reduced.ls + ce.ls) {
        return Ok(None);
    }

    let u_opt = if i < m { Some(pending_u[i]) } else { None };
    let v_opt = if j < n { Some(pending_v[j]) } else { None };
    let edge_match = match_edges(u_opt, v_opt, pending_g, pending_h, ce, matched_uv, directed)?;

    if is_recommended {
        let ce_reduced = reduce_ce(ce, &edge_match.xy, pending_g.len(), pending_h.len())?;
        if prune(matched_cost + cv.ls + edge_match.local_ce.ls + ce_reduced.ls) {
            return Ok(None);
        }
        let edit_cost = cv.c[i][j] + edge_match.local_ce.ls;
        return Ok(Some(Candidate { ij: (i, j), cv_reduced, xy: edge_match.xy, ce_reduced, edit_cost }));
    }

    if prune(matched_cost + cv.c[i][j] + cv_reduced.ls + edge_match.local_ce.ls) {
        return Ok(None);
    }
    let ce_reduced = reduce_ce(ce, &edge_match.xy, pending_g.len(), pending_h.len())?;
    if prune(matched_cost + cv.c[i][j] + cv_reduced.ls + edge_match.local_ce.ls + ce_reduced.ls) {
        return Ok(None);
    }
    let edit_cost = cv.c[i][j] + edge_match.local_ce.ls;
    Ok(Some(Candidate { ij: (i, j), cv_reduced, xy: edge_match.xy, ce_reduced, edit_cost }))
}
