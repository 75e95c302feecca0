//! Frequency-domain simulation driver
//!
//! Ties the pieces together: for each requested frequency, solve the
//! multiple-scattering system for the particle coefficients, then evaluate
//! incident plus scattered field at every listening position.

use crate::acoustics::Acoustic;
use crate::error::ScatterError;
use crate::particle::Particle;
use crate::point::Point;
use crate::result::SimulationResult;
use crate::scattering::basis_coefficients;
use crate::source::Source;
use ndarray::{Array2, Array3};
use num_complex::Complex64;
use rayon::prelude::*;
use scatter_wave::hankelh1;

/// Scattering simulation at fixed particle configuration
#[derive(Debug)]
pub struct FrequencySimulation {
    /// Host medium the particles are embedded in
    pub medium: Acoustic,
    /// Scatterers
    pub particles: Vec<Particle>,
    /// Incident wave
    pub source: Source,
}

impl FrequencySimulation {
    /// Create a simulation of `particles` in `medium` driven by `source`
    pub fn new(medium: Acoustic, particles: Vec<Particle>, source: Source) -> Self {
        Self {
            medium,
            particles,
            source,
        }
    }

    /// Total field at `x`, given the solved particle coefficients
    ///
    /// Incident field plus the outgoing expansion of every particle. The
    /// expansions are singular at the particle origins and only valid
    /// outside the particles; callers choose listening positions
    /// accordingly.
    fn total_field(&self, x: Point, omega: f64, coefficients: &Array2<Complex64>) -> Complex64 {
        let k = self.medium.wavenumber(omega).re;
        let m_max = (coefficients.nrows() as i32 - 1) / 2;

        let mut field = self.source.field(x, omega);
        for (j, p) in self.particles.iter().enumerate() {
            let rel = x - p.origin();
            let (r, theta) = (rel.radius(), rel.theta());
            for (mi, m) in (-m_max..=m_max).enumerate() {
                field += coefficients[[mi, j]]
                    * hankelh1(m, k * r)
                    * Complex64::from_polar(1.0, m as f64 * theta);
            }
        }
        field
    }

    /// Run the simulation over a grid of positions and frequencies
    ///
    /// The scattering system is solved once per frequency; frequencies are
    /// independent and run in parallel. The result table has one scalar
    /// component per (position, frequency) pair.
    pub fn run(
        &self,
        positions: &[Point],
        omegas: &[f64],
        order: usize,
    ) -> Result<SimulationResult, ScatterError> {
        let per_omega: Vec<Vec<Complex64>> = omegas
            .par_iter()
            .map(|&omega| {
                let coefficients =
                    basis_coefficients(&self.medium, &self.particles, &self.source, omega, order)?;
                Ok(positions
                    .iter()
                    .map(|&x| self.total_field(x, omega, &coefficients))
                    .collect())
            })
            .collect::<Result<_, ScatterError>>()?;

        let mut field = Array3::zeros((positions.len(), omegas.len(), 1));
        for (fi, values) in per_omega.iter().enumerate() {
            for (pi, &value) in values.iter().enumerate() {
                field[[pi, fi, 0]] = value;
            }
        }

        SimulationResult::new(field, positions.to_vec(), omegas.to_vec())
    }
}
