//! Generates an interpolating curve from raw data points.
//!
//! The pipeline has four stages, each of which can reject its input:
//!
//! 1. Parametrize the data points (see [`parameters`]).
//! 2. Derive a clamped knot vector by knot averaging (see [`knots::methods::averaging`]).
//! 3. Solve the collocation system for the control points (see [`interpolation`]).
//! 4. Assemble and validate the [`Curve`].
//!
//! The stage errors are collected in [`FitError`].

use thiserror::Error;

use crate::curve::{
    knots,
    parameters::{self, Method, ParameterError},
    points::{methods::interpolation, ControlPoints, DataPoints},
    Curve, CurveError,
};

#[derive(Error, Debug, PartialEq)]
pub enum FitError {
    #[error("Parametrizing the data points failed with error.")]
    Parameters(#[from] ParameterError),

    #[error("Generating the knot vector failed with error.")]
    Knots(#[from] knots::KnotError),

    #[error("Solving the interpolation system failed with error.")]
    Solve(#[from] interpolation::SolveError),

    #[error("Curve generation failed with error.")]
    Curve(#[from] CurveError),
}

/// Returns a B-Spline curve of the given `degree` that passes through all `points`.
///
/// The curve interpolates the points in their column order and reaches the first and
/// last point exactly at the parameters `u = 0` and `u = 1`.
///
/// # Arguments
///
/// * `points` - The data points to interpolate. At least `degree + 1` are needed.
/// * `degree` - The degree of the curve.
/// * `method` - The parametrization assigning a parameter to every data point.
///
/// # Examples
/// ```
/// use nalgebra::dmatrix;
/// use splinterp::curve::generation::interpolate;
/// use splinterp::curve::parameters::Method::ChordLength;
/// use splinterp::curve::points::DataPoints;
///
/// // Create a coordinate matrix containing five 2D points.
/// let points = DataPoints::new(dmatrix![
/// // 1    2    3    4    5
///  -2.0,-2.0,-1.0, 0.5, 1.5; // x
///  -1.0, 0.0, 1.0, 1.0, 2.0; // y
/// ]);
/// let curve = interpolate(&points, 2, ChordLength).unwrap();
/// println!("{:?}", curve.evaluate(0.5));
/// ```
pub fn interpolate(points: &DataPoints, degree: usize, method: Method) -> Result<Curve, FitError> {
    let params = parameters::generate(points, method)?;
    let knots = knots::methods::averaging(degree, &params)?;
    let coordinates = interpolation::interpolate(&knots, points, &params)?;

    Ok(Curve::new(knots, ControlPoints::new(coordinates))?)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};
    use rstest::rstest;

    use super::*;
    use crate::curve::{knots::KnotError, points::Points};

    /// Six data points tracing a hook-shaped path through all four quadrants.
    fn data() -> DataPoints {
        DataPoints::new(dmatrix![
            0., 3., -1., -4., -4., -3.;
            0., 4.,  4.,  0., -3., -3.;
        ])
    }

    #[test]
    fn cubic_curve_shape() {
        let points = data();
        let curve = interpolate(&points, 3, Method::ChordLength).unwrap();

        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.points.count(), points.count());
        assert_eq!(curve.knots.len(), 10);
    }

    #[test]
    fn cubic_curve_ends() {
        let curve = interpolate(&data(), 3, Method::ChordLength).unwrap();

        assert_relative_eq!(curve.evaluate(0.0), dvector![0., 0.], epsilon = 1e-9);
        assert_relative_eq!(curve.evaluate(1.0), dvector![-3., -3.], epsilon = 1e-9);
    }

    /// The defining property: the curve passes through every data point at its parameter.
    #[rstest]
    #[case(Method::ChordLength)]
    #[case(Method::Centripetal)]
    #[case(Method::EquallySpaced)]
    fn curve_interpolates_data(#[case] method: Method) {
        let points = data();
        let params = parameters::generate(&points, method).unwrap();
        let curve = interpolate(&points, 3, method).unwrap();

        for g in 0..points.count() {
            let u = params.vector()[g];
            assert_relative_eq!(curve.evaluate(u).column(0), points.get(g), epsilon = 1e-9);
            assert_relative_eq!(curve.evaluate_direct(u).column(0), points.get(g), epsilon = 1e-9);
        }
    }

    /// A degree-1 curve is the polyline through the data points.
    #[test]
    fn linear_curve_midpoints() {
        let points = DataPoints::new(dmatrix![
            0., 1., 1.;
            0., 0., 2.;
        ]);
        let curve = interpolate(&points, 1, Method::ChordLength).unwrap();

        // Chord lengths 1 and 2 place the parameters at [0, 1/3, 1].
        assert_relative_eq!(curve.evaluate(1.0 / 6.0), dvector![0.5, 0.], epsilon = 1e-9);
        assert_relative_eq!(curve.evaluate(2.0 / 3.0), dvector![1., 1.], epsilon = 1e-9);
    }

    #[test]
    fn insufficient_points() {
        let points = DataPoints::new(dmatrix![
            0., 1.;
            0., 1.;
        ]);

        assert_eq!(
            interpolate(&points, 3, Method::ChordLength).unwrap_err(),
            FitError::Knots(KnotError::InsufficientPoints { count: 2, degree: 3 })
        );
    }

    #[test]
    fn coincident_points() {
        let points = DataPoints::new(dmatrix![
            0., 1., 1., 2.;
            0., 1., 1., 2.;
        ]);

        assert_eq!(
            interpolate(&points, 2, Method::ChordLength).unwrap_err(),
            FitError::Parameters(ParameterError::DegenerateSegment { segment: 1 })
        );
    }
}
