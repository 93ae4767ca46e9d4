#![allow(non_snake_case)]
//! **splinterp** is a library for fitting open-uniform B-spline curves through sequences of
//! data points based on [nalgebra].
//!
//! ## Features
//! - Fit `N`-dimensional (`N = 1, 2, 3,...`) interpolating curves of arbitrary polynomial degree `p`
//!   through ordered data points.
//! - Multiple [curve parametrization][curve::parameters] methods: chord-length, centripetal,
//!   equally spaced.
//! - Clamped [knot vectors][curve::knots] derived from the parameters by knot averaging.
//! - Two independent evaluation algorithms: [de Boor's algorithm][curve::Curve::evaluate] for fast
//!   repeated evaluation and [direct basis summation][curve::Curve::evaluate_direct] as a reference.
//! - An incremental editing [session][session::Session] keeping a fitted curve and a sampled
//!   polyline up to date while points are pushed and popped.
//! - Built with [nalgebra](https://crates.io/crates/nalgebra) to store point data in contiguous arrays.
//!
//! ## What is B-spline interpolation?
//!
//! B-splines are parametric functions composed of piecewise polynomials with a polynomial degree `p > 0`.
//! These piecewise polynomials are joined so that the parametric function is `p-1` times continuously
//! differentiable. The shape of a B-spline curve is governed by control points which, in general, do
//! not lie on the curve itself. Interpolation turns this around: given data points the curve must pass
//! through, a linear system is solved for the control points that make the curve thread through every
//! data point in order.
//!
//! The fitting procedure follows the classic scheme of chapter 9 in `Piegl1997`:
//! assign every data point a parameter value, derive a clamped knot vector by averaging those
//! parameters, evaluate the basis functions into a collocation matrix, and solve one linear
//! system per coordinate.
//!
//! ## Literature:
//! |            |                                                                                                                        |
//! |-----------:|:-----------------------------------------------------------------------------------------------------------------------|
//! | Piegl1997  | Piegl, L., Tiller, W. The NURBS Book. Monographs in Visual Communication. Springer, Berlin, Heidelberg, 2nd ed., 1997.   |
//! | DeBoor1972 | de Boor, C. On calculating with B-splines. Journal of Approximation Theory, 6(1) (1972) 50–62.                           |
//! | Lee1989    | Lee, E. T. Y. Choosing nodes in parametric curve interpolation. Computer-Aided Design, 21(6) (1989) 363–370.             |

pub mod curve;
pub mod session;
pub mod types;
