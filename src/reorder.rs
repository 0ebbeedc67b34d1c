//! Curve-fitting playlist reordering.
//!
//! Rearranges a scored sequence so that position order follows the rank
//! order of a target [`CurveSelector`]: the lowest score goes to the position
//! with the lowest curve value, the second-lowest score to the position with
//! the second-lowest curve value, and so on.
//!
//! ## Algorithm
//!
//! 1. Evaluate the curve at `t = (x + 1) / n` for every position `x`.
//! 2. Rank positions by target value (stable, ties by position).
//! 3. Rank items by score (stable, ties by original index).
//! 4. Rank slot `i` of the targets receives rank slot `i` of the scores.
//!
//! Within a run of equal scores, the target slots claimed by that run are
//! handed out in ascending position order, so tied items never swap places
//! relative to each other. Scores at each output position are unaffected.
//!
//! Everything here is pure: no I/O, no shared state, `O(n log n)`.

use crate::curve::CurveSelector;
use crate::error::{ReorderError, Result};
use log::{debug, trace};
use std::cmp::Ordering;

/// An opaque payload paired with the score used to place it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<T> {
    pub payload: T,
    pub score: f64,
}

impl<T> ScoredItem<T> {
    #[must_use]
    pub const fn new(payload: T, score: f64) -> Self {
        Self { payload, score }
    }
}

/// Reorders sequences toward one fixed curve.
///
/// Holds nothing but the curve choice; every call is independent.
///
/// # Examples
///
/// ```
/// use upcurve::curve::CurveSelector;
/// use upcurve::reorder::CurveReorderer;
///
/// let reorderer = CurveReorderer::new(CurveSelector::PositiveLinear);
/// let order = reorderer.permutation(&[10.0, 30.0, 20.0])?;
/// assert_eq!(order, vec![0, 2, 1]);
/// # Ok::<(), upcurve::error::ReorderError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurveReorderer {
    curve: CurveSelector,
}

impl CurveReorderer {
    #[must_use]
    pub const fn new(curve: CurveSelector) -> Self {
        Self { curve }
    }

    #[must_use]
    pub const fn curve(&self) -> CurveSelector {
        self.curve
    }

    /// See [`permutation`].
    ///
    /// # Errors
    ///
    /// Fails on empty input or a non-finite score.
    pub fn permutation(&self, scores: &[f64]) -> Result<Vec<usize>> {
        permutation(scores, self.curve)
    }

    /// See [`reorder`].
    ///
    /// # Errors
    ///
    /// Fails on empty input or a non-finite score.
    pub fn reorder<T>(&self, items: Vec<ScoredItem<T>>) -> Result<Vec<ScoredItem<T>>> {
        reorder(items, self.curve)
    }
}

/// Compute the output order for `scores` under `curve`.
///
/// Element `p` of the result is the original index of the item that ends up
/// at position `p`. The result is always a permutation of `0..scores.len()`.
///
/// # Errors
///
/// * [`ReorderError::EmptyInput`] if `scores` is empty
/// * [`ReorderError::NonFiniteScore`] for the first NaN or infinite score
pub fn permutation(scores: &[f64], curve: CurveSelector) -> Result<Vec<usize>> {
    validate_scores(scores)?;

    let n = scores.len();
    debug!("Reordering {n} items toward {curve}");

    let mut target_rank = target_rank(&curve.rank_keys(n));
    let score_rank = stable_rank(scores);

    // Equal scores share their slots in position order.
    let mut start = 0;
    while start < n {
        let group_score = scores[score_rank[start]];
        let end = score_rank[start..]
            .iter()
            .position(|&idx| scores[idx] != group_score)
            .map_or(n, |offset| start + offset);
        if end - start > 1 {
            target_rank[start..end].sort_unstable();
        }
        start = end;
    }

    let mut order = vec![0; n];
    for (&slot, &item) in target_rank.iter().zip(&score_rank) {
        order[slot] = item;
    }

    trace!("Permutation for {curve}: {order:?}");
    Ok(order)
}

/// Reorder scored items toward `curve`.
///
/// Consumes the input and returns every item exactly once; only positions
/// change.
///
/// # Errors
///
/// Same as [`permutation`]. No partial result is produced.
pub fn reorder<T>(items: Vec<ScoredItem<T>>, curve: CurveSelector) -> Result<Vec<ScoredItem<T>>> {
    let scores: Vec<f64> = items.iter().map(|item| item.score).collect();
    let order = permutation(&scores, curve)?;
    Ok(apply_permutation(items, &order))
}

/// Reorder arbitrary payloads, reading each score through `score`.
///
/// # Errors
///
/// Same as [`permutation`].
pub fn reorder_by<T, F>(items: Vec<T>, score: F, curve: CurveSelector) -> Result<Vec<T>>
where
    F: Fn(&T) -> f64,
{
    let scores: Vec<f64> = items.iter().map(score).collect();
    let order = permutation(&scores, curve)?;
    Ok(apply_permutation(items, &order))
}

fn validate_scores(scores: &[f64]) -> Result<()> {
    if scores.is_empty() {
        return Err(ReorderError::EmptyInput);
    }
    match scores.iter().position(|score| !score.is_finite()) {
        Some(position) => Err(ReorderError::NonFiniteScore {
            position,
            score: scores[position],
        }),
        None => Ok(()),
    }
}

/// Positions in ascending target order. Equal keys keep position order.
fn target_rank(keys: &[i128]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by_key(|&idx| keys[idx]);
    indices
}

/// Indices of `values` in ascending value order; equal values keep index order.
fn stable_rank(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    // Callers only pass finite values.
    indices.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    indices
}

/// Move `items` into the order given by `order` (a permutation of their indices).
fn apply_permutation<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&idx| slots[idx].take())
        .collect()
}
