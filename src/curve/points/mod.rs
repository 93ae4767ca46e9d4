//! Implements the point containers shared by the fitting pipeline.
//!
//! Both containers store one point per column of a `D x n` coordinate matrix.
//! [DataPoints] holds the points a curve must pass through, in traversal order, and supports
//! appending and removing points at the tail for incremental editing. [ControlPoints] holds
//! the solved points spanning the control polygon; apart from the first and last one they do
//! not lie on the curve.

use crate::types::{MatD, VecD, VecDView};

pub mod methods;

#[derive(PartialEq, Debug, Clone)]
pub struct ControlPoints {
    matrix: MatD,
}

#[derive(PartialEq, Debug, Clone)]
pub struct DataPoints {
    matrix: MatD,
}

pub trait Points {
    fn matrix(&self) -> &MatD;

    fn get(&self, i: usize) -> VecDView {
        self.matrix().column(i)
    }

    fn dimension(&self) -> usize {
        self.matrix().nrows()
    }

    fn count(&self) -> usize {
        self.matrix().ncols()
    }

    fn is_empty(&self) -> bool {
        self.matrix().is_empty()
    }
}

impl Points for DataPoints {
    fn matrix(&self) -> &MatD {
        &self.matrix
    }
}

impl DataPoints {
    pub fn new(matrix: MatD) -> Self {
        DataPoints { matrix }
    }

    /// Creates a container for points of the given dimension, holding none yet.
    pub fn empty(dimension: usize) -> Self {
        DataPoints { matrix: MatD::zeros(dimension, 0) }
    }

    pub fn segments(&self) -> usize {
        self.count() - 1
    }

    /// Appends a point after the current last one.
    pub fn push(&mut self, point: &VecD) {
        debug_assert_eq!(point.len(), self.dimension());

        let i = self.count();
        self.matrix = self.matrix.clone().insert_column(i, 0.0);
        self.matrix.column_mut(i).copy_from(point);
    }

    /// Removes and returns the last point, or `None` if no points are stored.
    pub fn pop(&mut self) -> Option<VecD> {
        if self.is_empty() {
            return None;
        }

        let i = self.count() - 1;
        let point = self.matrix.column(i).clone_owned();
        self.matrix = self.matrix.clone().remove_column(i);
        Some(point)
    }

    pub fn last(&self) -> Option<VecDView> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.count() - 1))
        }
    }
}

impl Points for ControlPoints {
    fn matrix(&self) -> &MatD {
        &self.matrix
    }
}

impl ControlPoints {
    pub fn new(matrix: MatD) -> Self {
        ControlPoints { matrix }
    }

    pub fn segments(&self) -> usize {
        self.count() - 1
    }
}
