use crate::{
    curve::{
        knots::{KnotError, Knots},
        parameters::Parameters,
    },
    types::VecD,
};

/// Generates a clamped knot vector of the given `degree` by averaging the data point parameters.
///
/// Averaging places every internal knot at the mean of `p` consecutive parameters,
///
/// ```text
/// u_{p+j} = (ū_j + ... + ū_{j+p-1}) / p,    j = 1, ..., n-p-1
/// ```
///
/// which guarantees a collocation matrix with full support for the subsequent interpolation
/// solve. See eq. (9.8) in `Piegl1997`.
pub fn averaging(degree: usize, params: &Parameters) -> Result<Knots, KnotError> {
    let p = degree;
    let n = params.count();

    if p == 0 {
        return Err(KnotError::DegreeTooLow { p });
    }
    if n < p + 1 {
        return Err(KnotError::InsufficientPoints { count: n, degree: p });
    }

    let u_bar = params.vector();

    let mut U = VecD::zeros(n + p + 1);
    U.rows_mut(n, p + 1).fill(1.0);

    for j in 1..=(n - p - 1) {
        U[p + j] = u_bar.rows(j, p).sum() / p as f64;
    }

    Ok(Knots::new(p, U))
}
