//! Submodule providing the depth-first search driver: an [`Iterator`]
//! enumerating complete edit paths in order of non-increasing (or, in
//! strictly-decreasing mode, strictly-decreasing) cost.
//!
//! The original algorithm this is grounded on is a recursive generator,
//! with the branch expander itself a nested generator consulting a
//! shared `maxcost` cell. Rust has no stable generators, so the
//! recursion is reified here as an explicit stack of [`Frame`] values:
//! each frame owns the `Cv`/`Ce` sub-problem at its depth and an index
//! into its (eagerly computed) candidate list, and pushing/popping the
//! stack plays the role of recursing/returning. The `maxcost` bound
//! lives in a [`Cell`], the one piece of interior mutability the search
//! needs, exactly as in the source design.
//!
//! One behavioural difference from the recursive source follows from
//! computing each frame's candidate list eagerly instead of lazily: the
//! source's alternative-candidate generation can observe a `maxcost`
//! already tightened by having fully explored the LSAP-recommended
//! child first, pruning some alternatives before they are ever built.
//! Here all candidates at a level are built against one `maxcost`
//! snapshot, then re-checked against the (possibly tighter) current
//! bound right before each is entered. This costs some pruning
//! opportunity, never correctness: the lower bounds remain admissible
//! either way.

use core::cell::Cell;

use crate::algorithms::branch_expander::{self, Candidate};
use crate::algorithms::cost_matrix::CostMatrix;
use crate::errors::GedError;

/// A complete vertex edit path: one entry per `G1`/`G2` node, `None` on
/// the absent side for a deletion or insertion.
pub type VertexPath<N1, N2> = Vec<(Option<N1>, Option<N2>)>;
/// A complete edge edit path, analogous to [`VertexPath`].
pub type EdgePath<N1, N2> = Vec<(Option<(N1, N1)>, Option<(N2, N2)>)>;

fn prune_check(upper_bound: Option<f64>, maxcost: f64, strictly_decreasing: bool, cost: f64) -> bool {
    if let Some(bound) = upper_bound {
        if cost > bound {
            return true;
        }
    }
    if cost > maxcost {
        return true;
    }
    strictly_decreasing && cost >= maxcost
}

struct UndoInfo<N1, N2> {
    i: usize,
    j: usize,
    u: Option<N1>,
    v: Option<N2>,
    removed_g: Vec<(usize, (N1, N1))>,
    removed_h: Vec<(usize, (N2, N2))>,
    edge_count: usize,
    matched_cost_before: f64,
}

struct Frame<N1, N2> {
    cv: CostMatrix,
    ce: CostMatrix,
    candidates: Vec<Candidate>,
    idx: usize,
    initialized: bool,
    undo: Option<UndoInfo<N1, N2>>,
}

/// Removes every index in `sorted_indices` (ascending, deduplicated)
/// from `list`, returning the removed `(index, value)` pairs in
/// ascending order so the removal can be undone by re-inserting them in
/// the same order.
fn remove_sorted<T: Copy>(list: &mut Vec<T>, sorted_indices: &[usize]) -> Vec<(usize, T)> {
    let mut removed = Vec::with_capacity(sorted_indices.len());
    for &idx in sorted_indices.iter().rev() {
        removed.push((idx, list.remove(idx)));
    }
    removed.reverse();
    removed
}

/// Enumerates complete edit paths via depth-first search over the joint
/// vertex/edge assignment tree, pruned by the LSAP lower bound.
///
/// Yields `Result`s so that an error from a cost callback or from the
/// underlying LSAP solver closes the search and surfaces to the caller,
/// per the propagation model: the search has no retries.
pub struct OptimizeEditPaths<N1: Copy + Eq, N2: Copy + Eq> {
    directed: bool,
    upper_bound: Option<f64>,
    strictly_decreasing: bool,
    maxcost: Cell<f64>,
    matched_uv: VertexPath<N1, N2>,
    matched_gh: EdgePath<N1, N2>,
    pending_u: Vec<N1>,
    pending_v: Vec<N2>,
    pending_g: Vec<(N1, N1)>,
    pending_h: Vec<(N2, N2)>,
    matched_cost: f64,
    stack: Vec<Frame<N1, N2>>,
    failed: bool,
}

impl<N1: Copy + Eq, N2: Copy + Eq> OptimizeEditPaths<N1, N2> {
    /// Builds the search over the initial `Cv`/`Ce` matrices and pending
    /// node/edge lists.
    ///
    /// `maxcost` is initialised to `Cv.C.sum() + Ce.C.sum() + 1`, a safe
    /// over-estimate that the first complete path tightens.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        pending_u: Vec<N1>,
        pending_v: Vec<N2>,
        cv: CostMatrix,
        pending_g: Vec<(N1, N1)>,
        pending_h: Vec<(N2, N2)>,
        ce: CostMatrix,
        directed: bool,
        upper_bound: Option<f64>,
        strictly_decreasing: bool,
    ) -> Self {
        let maxcost = cv.c.iter().flatten().sum::<f64>() + ce.c.iter().flatten().sum::<f64>() + 1.0;
        let root = Frame { cv, ce, candidates: Vec::new(), idx: 0, initialized: false, undo: None };
        Self {
            directed,
            upper_bound,
            strictly_decreasing,
            maxcost: Cell::new(maxcost),
            matched_uv: Vec::new(),
            matched_gh: Vec::new(),
            pending_u,
            pending_v,
            pending_g,
            pending_h,
            matched_cost: 0.0,
            stack: vec![root],
            failed: false,
        }
    }

    fn prune(&self, cost: f64) -> bool {
        prune_check(self.upper_bound, self.maxcost.get(), self.strictly_decreasing, cost)
    }

    fn apply_move(&mut self, candidate: &Candidate) -> UndoInfo<N1, N2> {
        let (i, j) = candidate.ij;
        let m = self.pending_u.len();
        let n = self.pending_v.len();

        let u = if i < m { Some(self.pending_u.remove(i)) } else { None };
        let v = if j < n { Some(self.pending_v.remove(j)) } else { None };
        self.matched_uv.push((u, v));

        let len_g = self.pending_g.len();
        let len_h = self.pending_h.len();
        for &(x, y) in &candidate.xy {
            let g_item = if x < len_g { Some(self.pending_g[x]) } else { None };
            let h_item = if y < len_h { Some(self.pending_h[y]) } else { None };
            self.matched_gh.push((g_item, h_item));
        }

        let mut xs: Vec<usize> = candidate.xy.iter().map(|&(x, _)| x).filter(|&x| x < len_g).collect();
        xs.sort_unstable();
        xs.dedup();
        let removed_g = remove_sorted(&mut self.pending_g, &xs);

        let mut ys: Vec<usize> = candidate.xy.iter().map(|&(_, y)| y).filter(|&y| y < len_h).collect();
        ys.sort_unstable();
        ys.dedup();
        let removed_h = remove_sorted(&mut self.pending_h, &ys);

        let matched_cost_before = self.matched_cost;
        self.matched_cost += candidate.edit_cost;

        UndoInfo { i, j, u, v, removed_g, removed_h, edge_count: candidate.xy.len(), matched_cost_before }
    }

    fn undo_move(&mut self, undo: UndoInfo<N1, N2>) {
        if let Some(u) = undo.u {
            self.pending_u.insert(undo.i, u);
        }
        if let Some(v) = undo.v {
            self.pending_v.insert(undo.j, v);
        }
        self.matched_uv.pop();
        for (idx, item) in undo.removed_g {
            self.pending_g.insert(idx, item);
        }
        for (idx, item) in undo.removed_h {
            self.pending_h.insert(idx, item);
        }
        for _ in 0..undo.edge_count {
            self.matched_gh.pop();
        }
        self.matched_cost = undo.matched_cost_before;
    }
}

impl<N1: Copy + Eq, N2: Copy + Eq> Iterator for OptimizeEditPaths<N1, N2> {
    type Item = Result<(VertexPath<N1, N2>, EdgePath<N1, N2>, f64), GedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if self.stack.is_empty() {
                return None;
            }

            let needs_init = !self.stack.last().expect("non-empty stack").initialized;
            if needs_init {
                let (cv_ls, ce_ls) = {
                    let top = self.stack.last().expect("non-empty stack");
                    (top.cv.ls, top.ce.ls)
                };
                if self.prune(self.matched_cost + cv_ls + ce_ls) {
                    self.stack.last_mut().expect("non-empty stack").initialized = true;
                    continue;
                }

                if self.pending_u.is_empty() && self.pending_v.is_empty() {
                    let cost = self.matched_cost;
                    self.maxcost.set(self.maxcost.get().min(cost));
                    self.stack.last_mut().expect("non-empty stack").initialized = true;
                    return Some(Ok((self.matched_uv.clone(), self.matched_gh.clone(), cost)));
                }

                let (upper_bound, maxcost_snapshot, strictly_decreasing) =
                    (self.upper_bound, self.maxcost.get(), self.strictly_decreasing);
                let expansion = {
                    let top = self.stack.last().expect("non-empty stack");
                    branch_expander::expand(
                        &self.pending_u,
                        &self.pending_v,
                        &top.cv,
                        &self.pending_g,
                        &self.pending_h,
                        &top.ce,
                        &self.matched_uv,
                        self.directed,
                        self.matched_cost,
                        &|cost| prune_check(upper_bound, maxcost_snapshot, strictly_decreasing, cost),
                    )
                };
                match expansion {
                    Ok(candidates) => {
                        let top = self.stack.last_mut().expect("non-empty stack");
                        top.candidates = candidates;
                        top.initialized = true;
                    }
                    Err(err) => {
                        self.failed = true;
                        self.stack.clear();
                        return Some(Err(GedError::from(err)));
                    }
                }
                continue;
            }

            let idx = self.stack.last().expect("non-empty stack").idx;
            let len = self.stack.last().expect("non-empty stack").candidates.len();
            if idx >= len {
                let frame = self.stack.pop().expect("non-empty stack");
                if let Some(undo) = frame.undo {
                    self.undo_move(undo);
                }
                continue;
            }

            let candidate = self.stack.last().expect("non-empty stack").candidates[idx].clone();
            self.stack.last_mut().expect("non-empty stack").idx += 1;

            let lookahead =
                self.matched_cost + candidate.edit_cost + candidate.cv_reduced.ls + candidate.ce_reduced.ls;
            if self.prune(lookahead) {
                continue;
            }

            let undo = self.apply_move(&candidate);
            self.stack.push(Frame {
                cv: candidate.cv_reduced,
                ce: candidate.ce_reduced,
                candidates: Vec::new(),
                idx: 0,
                initialized: false,
                undo: Some(undo),
            });
        }
    }
}
