//! Evaluates the basis spline functions using the Cox-de Boor-Mansfield recurrence relation
//!
//! ```text
//! N_{i,p}(u) = (u - U_i)/(U_{i+p} - U_i) N_{i,p-1}(u)
//!            + (U_{i+p+1} - u)/(U_{i+p+1} - U_{i+1}) N_{i+1,p-1}(u)
//! ```
//!
//! with the basis functions of degree `p = 0`
//!
//! ```text
//! N_{i,0}(u) = 1 if u ∈ [U_i, U_{i+1}) ⋁ (i = n-1 ⋀ u = U_n), else 0
//! ```
//!
//! where the conditional `⋁ (i = n-1 ⋀ u = U_n)` closes the last interval so that the
//! curve is defined at the end parameter, and any quotient over a zero-width knot span
//! counts as zero.

use crate::types::VecD;

/// Evaluates the `i`-th basis spline function of degree `p` at `u`.
///
/// ## Arguments
///
/// - `U` the knot vector
/// - `i` the index with `i ∈ {0, 1, ..., n-1}` where `n` is the number of basis functions
///   spanned by `U`
/// - `p` the spline degree
/// - `u` the parameter
pub fn evaluate(U: &VecD, i: usize, p: usize, u: f64) -> f64 {
    let n = U.len() - p - 1;
    basis(U, i, p, n, u)
}

/// `n` is carried through the recursion unchanged so that the closing rule of the
/// degree-zero seed refers to the basis count of the original degree `p`.
pub(crate) fn basis(U: &VecD, i: usize, p: usize, n: usize, u: f64) -> f64 {
    if p == 0 {
        if (U[i] <= u && u < U[i + 1]) || (i == n - 1 && u == U[n]) {
            return 1.0;
        }
        return 0.0;
    }

    let summand1 = if U[i + p] == U[i] {
        0.0
    } else {
        let g = i;
        let h = p - 1;
        (u - U[g]) / (U[g + h + 1] - U[g]) * basis(U, g, h, n, u)
    };

    let summand2 = if U[i + 1 + p] == U[i + 1] {
        0.0
    } else {
        let g = i + 1;
        let h = p - 1;

        // The following equation is numerically more stable than
        // `(1.0 - ((u - U[g]) / (U[g + h + 1] - U[g]))) * basis(U, g, h, n, u)`
        (U[g + p] - u) / (U[g + h + 1] - U[g]) * basis(U, g, h, n, u)
    };

    summand1 + summand2
}
