use thiserror::Error;

use crate::{
    curve::{
        basis,
        knots::Knots,
        parameters::Parameters,
        points::{DataPoints, Points},
    },
    types::MatD,
};

#[derive(Error, Debug, PartialEq)]
pub enum SolveError {
    #[error("The `{n} x {n}` collocation matrix of the interpolation system is singular.")]
    SingularSystem { n: usize },
}

/// Solves the interpolation system for the control point coordinates.
///
/// Builds the collocation matrix `N` with `N[(g, i)] = N_{i,p}(ū_g)` and solves
///
/// ```text
/// N * P = Q
/// ```
///
/// where the columns of the right-hand side `Q` hold one data point coordinate axis each.
/// The matrix is LU-factorized once and back-substituted for all axes together, yielding a
/// curve with `C(ū_g) = Q_g` for every data point. See eq. (9.7) in `Piegl1997`.
///
/// A singular system cannot arise from strictly increasing parameters combined with
/// [averaged knots][crate::curve::knots::methods::averaging]; the error therefore signals
/// an inconsistent combination of knots and parameters.
pub fn interpolate(knots: &Knots, points: &DataPoints, params: &Parameters) -> Result<MatD, SolveError> {
    let p = knots.degree();
    let n = points.count();

    let Ubar = params.vector();

    let mut Nmat = MatD::zeros(n, n);
    for i in 0..n {
        for g in 0..n {
            Nmat[(g, i)] = basis::evaluate(knots.vector(), i, p, Ubar[g]);
        }
    }

    let lu = Nmat.lu();
    let rhs = points.matrix().transpose();

    match lu.solve(&rhs) {
        Some(coordinates) => Ok(coordinates.transpose()),
        None => Err(SolveError::SingularSystem { n }),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    use crate::curve::{knots::methods::averaging, parameters, parameters::Method::ChordLength};

    use super::*;

    #[test]
    fn linear() {
        let points = DataPoints::new(dmatrix![
            1., 2., 3., 4.;
            1., 2., 3., 4.;
        ]);

        let params = parameters::generate(&points, ChordLength).unwrap();
        let knots = averaging(1, &params).unwrap();

        // A degree-one curve interpolates with the data points as control points.
        assert_relative_eq!(
            interpolate(&knots, &points, &params).unwrap(),
            points.matrix,
            epsilon = f64::EPSILON.sqrt()
        );
    }

    #[test]
    fn cubic_end_conditions() {
        let points = DataPoints::new(dmatrix![
            0., 3., -1., -4., -4., -3.;
            0., 4., 4., 0., -3., -3.;
        ]);

        let params = parameters::generate(&points, ChordLength).unwrap();
        let knots = averaging(3, &params).unwrap();

        let control = interpolate(&knots, &points, &params).unwrap();

        assert_eq!(control.ncols(), points.count());
        // Clamping pins the outermost control points onto the data.
        assert_relative_eq!(control.column(0), points.get(0), epsilon = f64::EPSILON.sqrt());
        assert_relative_eq!(control.column(5), points.get(5), epsilon = f64::EPSILON.sqrt());
    }
}
