//! Simulation output container

use crate::error::ScatterError;
use crate::point::Point;
use ndarray::{Array3, ArrayView1, ArrayView3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Field values over a grid of positions and frequencies
///
/// The field table is indexed `[position, frequency, component]`. Acoustic
/// pressure is scalar, so the component axis has length 1; it is kept so
/// vector-valued media can reuse the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    field: Array3<Complex64>,
    positions: Vec<Point>,
    frequencies: Vec<f64>,
}

impl SimulationResult {
    /// Bundle a field table with the positions and frequencies it spans
    ///
    /// The first two axes of `field` must match the lengths of `positions`
    /// and `frequencies` respectively.
    pub fn new(
        field: Array3<Complex64>,
        positions: Vec<Point>,
        frequencies: Vec<f64>,
    ) -> Result<Self, ScatterError> {
        if field.dim().0 != positions.len() {
            return Err(ScatterError::ShapeMismatch {
                axis: "positions",
                expected: positions.len(),
                got: field.dim().0,
            });
        }
        if field.dim().1 != frequencies.len() {
            return Err(ScatterError::ShapeMismatch {
                axis: "frequencies",
                expected: frequencies.len(),
                got: field.dim().1,
            });
        }
        Ok(Self {
            field,
            positions,
            frequencies,
        })
    }

    /// Full field table, indexed `[position, frequency, component]`
    pub fn field(&self) -> ArrayView3<'_, Complex64> {
        self.field.view()
    }

    /// Field components at position `i` and frequency `j`
    pub fn field_at(&self, i: usize, j: usize) -> ArrayView1<'_, Complex64> {
        self.field.slice(ndarray::s![i, j, ..])
    }

    /// Scalar field value at position `i` and frequency `j`
    ///
    /// Fails when the field is not scalar or the indices are out of range.
    pub fn scalar_field_at(&self, i: usize, j: usize) -> Result<Complex64, ScatterError> {
        if self.field_dimension() != 1 {
            return Err(ScatterError::Domain(format!(
                "field has {} components, expected a scalar",
                self.field_dimension()
            )));
        }
        if i >= self.positions.len() || j >= self.frequencies.len() {
            return Err(ScatterError::Domain(format!(
                "index ({i}, {j}) lies outside the {} × {} field table",
                self.positions.len(),
                self.frequencies.len()
            )));
        }
        Ok(self.field[[i, j, 0]])
    }

    /// Positions the field was evaluated at
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Angular frequencies the field was evaluated at
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of field components per (position, frequency) pair
    pub fn field_dimension(&self) -> usize {
        self.field.dim().2
    }

    /// Merge two results into one spanning both index sets
    ///
    /// Not yet supported for any input combination; the error message
    /// distinguishes mergeable-in-principle inputs (shared positions or
    /// shared frequencies) from inputs with nothing in common.
    pub fn union(&self, other: &SimulationResult) -> Result<SimulationResult, ScatterError> {
        if self.positions == other.positions || self.frequencies == other.frequencies {
            Err(ScatterError::Unimplemented(
                "union of frequency results sharing positions or frequencies is not yet \
                 implemented"
                    .into(),
            ))
        } else {
            Err(ScatterError::Unimplemented(
                "cannot union simulation results with differing positions and frequencies".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(npos: usize, nfreq: usize) -> SimulationResult {
        let field = Array3::from_elem((npos, nfreq, 1), Complex64::new(1.0, -1.0));
        let positions = (0..npos).map(|i| Point::new(i as f64, 0.0)).collect();
        let frequencies = (1..=nfreq).map(|j| j as f64).collect();
        SimulationResult::new(field, positions, frequencies).unwrap()
    }

    #[test]
    fn test_validation_rejects_mismatched_axes() {
        let field = Array3::from_elem((2, 3, 1), Complex64::new(0.0, 0.0));
        let err = SimulationResult::new(field.clone(), vec![Point::default(); 3], vec![1.0; 3])
            .unwrap_err();
        match err {
            ScatterError::ShapeMismatch { axis, expected, got } => {
                assert_eq!(axis, "positions");
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
        assert!(SimulationResult::new(field, vec![Point::default(); 2], vec![1.0; 2]).is_err());
    }

    #[test]
    fn test_scalar_accessor() {
        let r = result(2, 3);
        assert_eq!(r.scalar_field_at(1, 2).unwrap(), Complex64::new(1.0, -1.0));
        assert!(r.scalar_field_at(2, 0).is_err());
        assert!(r.scalar_field_at(0, 3).is_err());
        assert_eq!(r.field_at(0, 0).len(), 1);
        assert_eq!(r.field_dimension(), 1);
    }

    #[test]
    fn test_union_is_unimplemented() {
        let a = result(2, 2);
        let b = result(2, 2);
        // Shared positions and frequencies
        let err = a.union(&b).unwrap_err();
        assert!(matches!(err, ScatterError::Unimplemented(_)));

        // Nothing in common
        let field = Array3::from_elem((1, 1, 1), Complex64::new(0.0, 0.0));
        let c =
            SimulationResult::new(field, vec![Point::new(99.0, 99.0)], vec![77.0]).unwrap();
        let err = a.union(&c).unwrap_err();
        match err {
            ScatterError::Unimplemented(msg) => assert!(msg.contains("differing")),
            other => panic!("expected Unimplemented, got {other:?}"),
        }
    }
}
