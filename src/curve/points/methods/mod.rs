//! Methods generating control points from data points.

pub mod interpolation;
