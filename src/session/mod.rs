//! Incremental interpolation over a growing point set.
//!
//! A [Session] collects 2D data points one at a time and keeps an interpolating
//! [Curve] in sync with every change. It is the model behind an interactive editor:
//! clicks push points, undo pops them, and a degree control refits the curve in place.
//!
//! Fewer than `degree + 1` points cannot be interpolated. Instead of failing, the
//! session parks in [State::Insufficient] and fits as soon as enough points arrive.
//! Degree changes work the same way in reverse: raising the degree above the current
//! point count withdraws the curve until the points catch up.
//!
//! ```
//! use splinterp::session::{Session, State};
//!
//! let mut session = Session::new();
//! session.push(0.0, 0.0).unwrap();
//! session.push(3.0, 4.0).unwrap();
//! session.push(-1.0, 4.0).unwrap();
//! assert_eq!(session.push(-4.0, 0.0).unwrap(), State::Fitted);
//!
//! let curve = session.curve().unwrap();
//! println!("{:?}", curve.evaluate(0.5));
//! ```

use nalgebra::dvector;

use crate::{
    curve::{
        generation::{interpolate, FitError},
        knots::KnotError,
        parameters::{Method, ParameterError},
        points::{DataPoints, Points},
        Curve,
    },
    types::MatD,
};

/// Degree of a fresh [Session].
pub const DEFAULT_DEGREE: usize = 3;

/// Polyline samples per curve segment.
const SAMPLES_PER_SEGMENT: usize = 10;

/// Lifecycle of a [Session], derived from its point count and degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No points are stored.
    Empty,
    /// Points are stored, but fewer than the `degree + 1` an interpolation needs.
    Insufficient,
    /// A curve through all stored points is available.
    Fitted,
}

/// A stateful fitting loop over 2D data points.
///
/// The session owns the data points. Every mutation refits the curve eagerly, so
/// [Session::curve] and [Session::polyline] are plain cache reads afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    points: DataPoints,
    degree: usize,
    curve: Option<Curve>,
    polyline: Option<MatD>,
}

impl Session {
    pub fn new() -> Self {
        Session { points: DataPoints::empty(2), degree: DEFAULT_DEGREE, curve: None, polyline: None }
    }

    /// Appends the point `(x, y)` and refits the curve.
    ///
    /// A point identical to the current last one is dropped, so a doubled input event
    /// collapses to a single point. Returns the state after the refit.
    pub fn push(&mut self, x: f64, y: f64) -> Result<State, FitError> {
        if self.is_last_point(x, y) {
            return Ok(self.state());
        }

        self.points.push(&dvector![x, y]);
        self.refit()
    }

    /// Removes the last point and refits the curve. Popping an empty session is a no-op.
    pub fn pop(&mut self) -> Result<State, FitError> {
        if self.points.pop().is_none() {
            return Ok(State::Empty);
        }

        self.refit()
    }

    /// Changes the spline degree and refits the curve.
    ///
    /// The degree is kept even when it exceeds the stored point count. The session then
    /// reports [State::Insufficient] until enough points are pushed. Degree zero is
    /// rejected and leaves the session unchanged.
    pub fn set_degree(&mut self, degree: usize) -> Result<State, FitError> {
        // Checked here: with fewer than two points a refit never reaches knot generation.
        if degree == 0 {
            return Err(FitError::Knots(KnotError::DegreeTooLow { p: degree }));
        }

        self.degree = degree;
        self.refit()
    }

    /// Fits a curve over the stored points plus the transient point `(x, y)`.
    ///
    /// The session itself is left untouched, which makes this suitable for live cursor
    /// tracking: the result matches what [Session::push] with the same point would
    /// produce. Returns `None` while too few points are stored. When `(x, y)` repeats
    /// the last stored point, the current curve is returned instead of a refit.
    pub fn preview(&self, x: f64, y: f64) -> Result<Option<Curve>, FitError> {
        if self.is_last_point(x, y) {
            return Ok(self.curve.clone());
        }

        let mut points = self.points.clone();
        points.push(&dvector![x, y]);

        match interpolate(&points, self.degree, Method::ChordLength) {
            Ok(curve) => Ok(Some(curve)),
            Err(FitError::Parameters(ParameterError::TooFewPoints { .. }))
            | Err(FitError::Knots(KnotError::InsufficientPoints { .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Discards all points and the curve and restores [DEFAULT_DEGREE].
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    pub fn state(&self) -> State {
        if self.points.is_empty() {
            State::Empty
        } else if self.curve.is_some() {
            State::Fitted
        } else {
            State::Insufficient
        }
    }

    pub fn points(&self) -> &DataPoints {
        &self.points
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    /// Returns the cached dense sampling of the curve, one column per polyline point.
    pub fn polyline(&self) -> Option<&MatD> {
        self.polyline.as_ref()
    }

    /// Compares exactly. A nearby but distinct point is a new point.
    fn is_last_point(&self, x: f64, y: f64) -> bool {
        match self.points.last() {
            Some(point) => point[0] == x && point[1] == y,
            None => false,
        }
    }

    fn refit(&mut self) -> Result<State, FitError> {
        self.curve = None;
        self.polyline = None;

        match interpolate(&self.points, self.degree, Method::ChordLength) {
            Ok(curve) => {
                self.polyline = Some(curve.sample(&sample_parameters(self.points.segments())));
                self.curve = Some(curve);
            }
            // Too few points is a resting state, not an error.
            Err(FitError::Parameters(ParameterError::TooFewPoints { .. }))
            | Err(FitError::Knots(KnotError::InsufficientPoints { .. })) => {}
            Err(err) => return Err(err),
        }

        Ok(self.state())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Equally spaced parameters over `[0, 1]`, ten per segment.
fn sample_parameters(segments: usize) -> Vec<f64> {
    let count = (segments * SAMPLES_PER_SEGMENT).max(2);
    (0..count).map(|g| g as f64 / (count - 1) as f64).collect()
}
