use crate::{
    curve::{
        parameters::{ParameterError, Parameters},
        points::{DataPoints, Points},
    },
    types::VecD,
};

/// Creates a parameter for every data point and distributes them equally ranging from 0 to 1.
/// This method ignores the point geometry entirely and can produce erratic shapes (such as
/// loops) when the data is unevenly spaced.
/// See eq. (9.3) in `Piegl1997`.
pub fn equally_spaced(segments: usize) -> Parameters {
    let m = segments;
    let mut u_bar = VecD::zeros(m + 1);

    for g in 1..m {
        u_bar[g] = g as f64 / m as f64;
    }
    u_bar[m] = 1f64;

    Parameters { vector: u_bar, segments }
}

/// Distributes the parameters proportionally to the chord length of each segment, so that the
/// parameter speed approximates arc length.
/// See eq. (9.5) in `Piegl1997`.
pub fn chord_length(points: &DataPoints) -> Result<Parameters, ParameterError> {
    let m = points.segments();

    let mut sum = 0f64;

    for g in 1..=m {
        sum += segment_length(points, g)?;
    }

    let mut u_bar = VecD::zeros(m + 1);
    for g in 1..m {
        let diff = points.get(g) - points.get(g - 1);
        u_bar[g] = u_bar[g - 1] + diff.norm() / sum;
    }

    u_bar[m] = 1f64;

    Ok(Parameters { vector: u_bar, segments: m })
}

/// Distributes the parameters proportionally to the square root of each chord length, damping
/// the influence of long segments. Yields better shapes than [chord_length] when the data
/// takes sharp turns.
/// See eqs. (9.4) and (9.5) in `Piegl1997` and `Lee1989`.
pub fn centripetal(points: &DataPoints) -> Result<Parameters, ParameterError> {
    let m = points.segments();

    let mut sum = 0f64;

    for g in 1..=m {
        sum += segment_length(points, g)?.sqrt();
    }

    let mut u_bar = VecD::zeros(m + 1);
    for g in 1..m {
        let diff = points.get(g) - points.get(g - 1);
        u_bar[g] = u_bar[g - 1] + diff.norm().sqrt() / sum;
    }

    u_bar[m] = 1f64;

    Ok(Parameters { vector: u_bar, segments: m })
}

/// Chord length of segment `g`, connecting points `g-1` and `g`.
fn segment_length(points: &DataPoints, g: usize) -> Result<f64, ParameterError> {
    let diff = points.get(g) - points.get(g - 1);
    let length = diff.norm();

    if length == 0.0 {
        return Err(ParameterError::DegenerateSegment { segment: g - 1 });
    }
    Ok(length)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    use super::*;

    mod equally_spaced {
        use super::*;

        #[test]
        fn test() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = equally_spaced(points.segments());
            assert_eq!(params.vector, dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn tolerates_coincident_points() {
            let points = DataPoints::new(dmatrix![1.0, 1.0, 2.0;]);
            let params = equally_spaced(points.segments());
            assert_eq!(params.vector, dvector![0., 0.5, 1.]);
        }
    }

    mod chord_length {
        use super::*;

        #[test]
        fn linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = chord_length(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 3.0, 5.0;]);
            let params = chord_length(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.5, 1.]);
        }

        #[test]
        fn non_linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 5.0;]);
            let params = chord_length(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.25, 1.]);
        }

        #[test]
        fn non_linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 4.0, 5.0;]);
            let params = chord_length(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.75, 1.]);
        }

        #[test]
        fn two_dimensional() {
            // Segment lengths 5, 13, 17 and 25 by Pythagorean triples.
            let points = DataPoints::new(dmatrix![
                0., 3., 8., 16., 23.;
                0., 4., 16., 31., 7.;
            ]);
            let params = chord_length(&points).unwrap();
            assert_relative_eq!(
                params.vector,
                dvector![0., 5. / 60., 18. / 60., 35. / 60., 1.],
                epsilon = f64::EPSILON.sqrt()
            );
        }

        #[test]
        fn degenerate_segment() {
            let points = DataPoints::new(dmatrix![
                1.0, 2.0, 2.0, 3.0;
                1.0, 2.0, 2.0, 3.0;
            ]);
            assert_eq!(chord_length(&points), Err(ParameterError::DegenerateSegment { segment: 1 }));
        }
    }

    mod centripetal {
        use super::*;

        #[test]
        fn linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 3.0, 4.0, 5.0;]);
            let params = centripetal(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.25, 0.5, 0.75, 1.]);
        }

        #[test]
        fn non_linear_1() {
            let points = DataPoints::new(dmatrix![1.0, 2.0, 11.0;]);
            let params = centripetal(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.25, 1.]);
        }

        #[test]
        fn non_linear_2() {
            let points = DataPoints::new(dmatrix![1.0, 10.0, 11.0;]);
            let params = centripetal(&points).unwrap();
            assert_eq!(params.vector, dvector![0., 0.75, 1.]);
        }

        /// Squared chord lengths 25, 169, 289 and 625 reduce to the 5-13-17-25 progression
        /// under the square root.
        #[test]
        fn two_dimensional() {
            let points = DataPoints::new(dmatrix![
                0., 15., 171., 307., 907.;
                0., 20., 85., 340., 515.;
            ]);
            let params = centripetal(&points).unwrap();
            assert_relative_eq!(
                params.vector,
                dvector![0., 5. / 60., 18. / 60., 35. / 60., 1.],
                epsilon = f64::EPSILON.sqrt()
            );
        }

        #[test]
        fn degenerate_segment() {
            let points = DataPoints::new(dmatrix![
                1.0, 1.0;
                2.0, 2.0;
            ]);
            assert_eq!(centripetal(&points), Err(ParameterError::DegenerateSegment { segment: 0 }));
        }
    }
}
