//! Implements the B-spline curve.
//!
//! A B-spline curve is defined by
//!
//! ```text
//! C(u) = Σ_{i=0}^{n-1} N_{i,p}(u) P_i
//! ```
//!
//! with the
//! - parameter `u ∈ [0,1]` defining a point on the curve,
//! - spline degree `p`,
//! - clamped [knot vector][knots] `U` of `n+p+1` knots,
//! - `n` [spline basis functions][basis] `N` of degree `p` defined by the knot vector, and
//! - `n`, `N`-dimensional [control points][points] `P`.
//!
//! Two evaluation algorithms are provided: [Curve::evaluate] runs de Boor's algorithm on the
//! `p+1` control points supporting the parameter, while [Curve::evaluate_direct] sums the full
//! basis and serves as an independent reference.

use thiserror::Error;

use crate::{
    curve::{
        knots::Knots,
        points::{ControlPoints, Points},
    },
    types::{MatD, VecD},
};

pub mod basis;
pub mod generation;
pub mod knots;
pub mod parameters;
pub mod points;

#[derive(Debug, Clone)]
pub struct Curve {
    pub knots: Knots,
    pub points: ControlPoints,
}

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error(
        "The number of control points `n = {n}` of a degree `p = {p}` curve must be \
        at least `p + 1`."
    )]
    DegreeAndPointsMismatch { p: usize, n: usize },

    #[error(
        "A degree `p = {p}` curve over `n = {n}` control points requires `n + p + 1 = {expected}` \
        knots, but `{actual}` are given."
    )]
    KnotCountMismatch { p: usize, n: usize, expected: usize, actual: usize },
}

impl Curve {
    /// Returns a B-spline curve over the given knot vector and control points.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::dmatrix;
    /// use splinterp::curve::generation::interpolate;
    /// use splinterp::curve::parameters::Method::ChordLength;
    /// use splinterp::curve::points::DataPoints;
    ///
    /// // A coordinate matrix containing five 2D points.
    /// let points = DataPoints::new(dmatrix![
    /// // 1    2    3    4    5
    ///  -2.0,-2.0,-1.0, 0.5, 1.5; // x
    ///  -1.0, 0.0, 1.0, 1.0, 2.0; // y
    /// ]);
    /// let curve = interpolate(&points, 3, ChordLength).unwrap();
    /// println!("{:?}", curve.evaluate(0.5));
    /// ```
    pub fn new(knots: Knots, points: ControlPoints) -> Result<Self, CurveError> {
        match (knots.degree(), points.count(), knots.len()) {
            (p, n, _) if n < p + 1 => Err(CurveError::DegreeAndPointsMismatch { p, n }),
            (p, n, len) if len != n + p + 1 => {
                Err(CurveError::KnotCountMismatch { p, n, expected: n + p + 1, actual: len })
            }
            _ => Ok(Self { knots, points }),
        }
    }

    pub fn degree(&self) -> usize {
        self.knots.degree()
    }

    pub fn segments(&self) -> usize {
        self.points.segments()
    }

    /// Returns the dimension of the curve.
    pub fn dimension(&self) -> usize {
        self.points.dimension()
    }

    /// Evaluates the curve point at `u` with de Boor's algorithm.
    ///
    /// The parameter is clamped to the domain `[0, 1]`, so sampling loops may run over the
    /// boundary without failing. The triangular recurrence blends the `p+1` control points
    /// supporting the knot span of `u` and is numerically stable; see `DeBoor1972`.
    pub fn evaluate(&self, u: f64) -> VecD {
        let u = u.clamp(0.0, 1.0);
        let p = self.degree();
        let U = self.knots.vector();
        let l = self.knots.find_span(u);

        // Working copies of the control points supporting the span.
        let mut d: Vec<VecD> = (0..=p).map(|j| self.points.get(l - p + j).clone_owned()).collect();

        for r in 1..=p {
            for j in (r..=p).rev() {
                let i = l - p + j;
                let denominator = U[i + p - r + 1] - U[i];
                let alpha = if denominator.abs() < f64::EPSILON { 0.0 } else { (u - U[i]) / denominator };

                let blended = (1.0 - alpha) * &d[j - 1] + alpha * &d[j];
                d[j] = blended;
            }
        }

        d[p].clone()
    }

    /// Evaluates the curve point at `u` by summing over the full basis.
    ///
    /// Linear in the number of control points where [Curve::evaluate] is not, which makes
    /// this the reference implementation the fast path is verified against.
    pub fn evaluate_direct(&self, u: f64) -> VecD {
        let u = u.clamp(0.0, 1.0);
        let p = self.degree();
        let U = self.knots.vector();

        let mut value = VecD::zeros(self.dimension());
        for i in 0..self.points.count() {
            value += basis::evaluate(U, i, p, u) * self.points.get(i);
        }
        value
    }

    /// Samples the curve at every parameter in `u_values`, one column per sample.
    pub fn sample(&self, u_values: &[f64]) -> MatD {
        let mut samples = MatD::zeros(self.dimension(), u_values.len());
        for (g, &u) in u_values.iter().enumerate() {
            samples.column_mut(g).copy_from(&self.evaluate(u));
        }
        samples
    }

    /// Samples the curve like [Curve::sample], evaluating through the full basis.
    pub fn sample_direct(&self, u_values: &[f64]) -> MatD {
        let mut samples = MatD::zeros(self.dimension(), u_values.len());
        for (g, &u) in u_values.iter().enumerate() {
            samples.column_mut(g).copy_from(&self.evaluate_direct(u));
        }
        samples
    }
}
