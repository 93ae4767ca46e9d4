//! Implements the knot vector defining the [spline basis functions][super::basis].
//!
//! The knot vector of a degree `p` curve over `n` data points is composed of `n+p+1` scalar
//! values in ascending order, called 'knots'. The head and tail consist of `p+1` knots of
//! value `0` and `1`, respectively, clamping the curve to its first and last control point.
//! This leaves `n-p-1` internal knots in the center.
//!
//! The internal knots are [generated][methods] from the data point parameters.

use thiserror::Error;

use crate::types::{VecD, VecDView};

pub mod methods;

#[derive(Debug, Clone, PartialEq)]
pub struct Knots {
    pub(crate) U: VecD,
    pub(crate) p: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum KnotError {
    #[error("Degree `p = {p}` is too low. A spline must have at least degree one.")]
    DegreeTooLow { p: usize },

    #[error(
        "Cannot generate a clamped knot vector of degree `p = {degree}` over `{count}` \
        data points. At least `p + 1` points are needed."
    )]
    InsufficientPoints { count: usize, degree: usize },
}

impl Knots {
    pub fn new(degree: usize, knots: VecD) -> Self {
        Knots { U: knots, p: degree }
    }

    pub fn vector(&self) -> &VecD {
        &self.U
    }

    pub fn degree(&self) -> usize {
        self.p
    }

    pub fn len(&self) -> usize {
        self.U.len()
    }

    /// Returns the number of basis functions, and thereby control points, the vector spans.
    pub fn count(&self) -> usize {
        self.len() - self.p - 1
    }

    pub fn internal_count(&self) -> usize {
        self.count() - self.p - 1
    }

    pub fn internal(&self) -> VecDView {
        self.U.rows(self.p + 1, self.internal_count())
    }

    /// Returns the index `l` of the knot span `[u_l, u_{l+1})` containing `u`,
    /// with the last non-empty span treated as closed at the end parameter.
    ///
    /// The returned index satisfies `p <= l <= n-1` for `u ∈ [0, 1]`.
    pub fn find_span(&self, u: f64) -> usize {
        let n = self.count();
        let U = &self.U;

        if u >= U[n] {
            return n - 1;
        }
        if u <= U[self.p] {
            return self.p;
        }

        let mut low = self.p;
        let mut high = n;
        let mut mid = (low + high) / 2;

        while u < U[mid] || u >= U[mid + 1] {
            if u < U[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        mid
    }
}

pub fn is_clamped(knots: &Knots) -> bool {
    let U = knots.vector();
    let clamp_size = knots.p + 1;

    let is_head_clamped = U.iter().take(clamp_size).all(|&u| u == 0.0);
    let is_tail_clamped = U.iter().rev().take(clamp_size).all(|&u| u == 1.0);

    is_head_clamped && is_tail_clamped
}

pub fn is_sorted(knots: &Knots) -> bool {
    let mut it = knots.U.iter();
    match it.next() {
        None => true,
        Some(first) => it
            .scan(first, |state, next| {
                let cmp = *state <= next;
                *state = next;
                Some(cmp)
            })
            .all(|b| b),
    }
}
