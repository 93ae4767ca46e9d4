//! Implements different parameter generation methods.
//!
//! - Chord-length method (the default)
//! - Centripetal method
//! - Equally spaced parameters
//!
//! Every data point receives a parameter value `ū_g ∈ [0, 1]`, strictly increasing with `g`,
//! at which the fitted curve will pass through the point. The arc-length based methods reject
//! coincident consecutive points, which would break strict monotonicity.

use thiserror::Error;

use crate::{
    curve::points::{DataPoints, Points},
    types::VecD,
};

pub mod methods;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    vector: VecD,
    segments: usize,
}

impl Parameters {
    pub fn new(vector: VecD, segments: usize) -> Self {
        Parameters { vector, segments }
    }

    pub fn vector(&self) -> &VecD {
        &self.vector
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn count(&self) -> usize {
        self.vector.len()
    }
}

#[derive(Clone, Copy)]
pub enum Method {
    ChordLength,
    Centripetal,
    EquallySpaced,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("Cannot parametrize `{count}` data points. At least two points are needed.")]
    TooFewPoints { count: usize },

    #[error(
        "The data points delimiting segment `g = {segment}` coincide. \
        Arc-length parametrization requires distinct consecutive points."
    )]
    DegenerateSegment { segment: usize },
}

pub fn generate(points: &DataPoints, method: Method) -> Result<Parameters, ParameterError> {
    if points.count() < 2 {
        return Err(ParameterError::TooFewPoints { count: points.count() });
    }

    match method {
        Method::ChordLength => methods::chord_length(points),
        Method::Centripetal => methods::centripetal(points),
        Method::EquallySpaced => Ok(methods::equally_spaced(points.segments())),
    }
}
