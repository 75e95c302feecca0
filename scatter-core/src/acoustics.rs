//! Acoustic medium description
//!
//! A medium is characterized by its mass density ρ and sound speed c. Both
//! are stored as complex numbers so the physically interesting limits stay
//! representable:
//!
//! - ρ = ∞ or c = ∞: sound-hard (rigid) boundary
//! - ρ = 0: sound-soft (pressure-release) boundary
//! - Im(c) ≠ 0: lossy medium

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Homogeneous acoustic medium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acoustic {
    /// Mass density ρ (kg/m³)
    pub density: Complex64,
    /// Sound speed c (m/s)
    pub sound_speed: Complex64,
    /// Spatial dimension of the medium
    pub dim: usize,
}

impl Acoustic {
    /// Create a 2D acoustic medium with real density and sound speed
    pub fn new(density: f64, sound_speed: f64) -> Self {
        Self {
            density: Complex64::new(density, 0.0),
            sound_speed: Complex64::new(sound_speed, 0.0),
            dim: 2,
        }
    }

    /// Create a 2D acoustic medium with complex density and sound speed
    pub fn new_complex(density: Complex64, sound_speed: Complex64) -> Self {
        Self {
            density,
            sound_speed,
            dim: 2,
        }
    }

    /// Sound-hard (rigid) limit: infinite density
    pub fn sound_hard() -> Self {
        Self::new(f64::INFINITY, 1.0)
    }

    /// Sound-soft (pressure-release) limit: zero density
    pub fn sound_soft() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Wavenumber k = ω/c at angular frequency ω
    pub fn wavenumber(&self, omega: f64) -> Complex64 {
        omega / self.sound_speed
    }

    /// Characteristic impedance ρ·c
    pub fn impedance(&self) -> Complex64 {
        self.density * self.sound_speed
    }

    /// Number of field components (scalar pressure field)
    pub fn field_dimension(&self) -> usize {
        1
    }

    /// Medium name used in error messages
    pub fn name(&self) -> &'static str {
        "Acoustic"
    }
}
