//! A scatterer: a shape filled with a homogeneous medium

use crate::acoustics::Acoustic;
use crate::point::Point;
use crate::shapes::{AnyShape, Shape};
use serde::{Deserialize, Serialize};

/// Scatterer embedded in the host medium
///
/// Two particles are *equal* when shape and medium match exactly, and
/// *congruent* when their shapes are congruent and their media equal. A
/// particle and any of its translations are congruent but not equal, which
/// is exactly the distinction the T-matrix cache exploits: congruent
/// particles share a T-matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Geometric boundary
    pub shape: AnyShape,
    /// Medium filling the interior
    pub medium: Acoustic,
}

impl Particle {
    /// Create a particle from a shape and an interior medium
    pub fn new(shape: impl Into<AnyShape>, medium: Acoustic) -> Self {
        Self {
            shape: shape.into(),
            medium,
        }
    }

    /// Position of the particle, the origin of its shape
    pub fn origin(&self) -> Point {
        self.shape.origin()
    }

    /// True iff `other` scatters identically up to a rigid translation
    pub fn congruent(&self, other: &Particle) -> bool {
        self.medium == other.medium && self.shape.congruent(&other.shape)
    }

    /// New particle translated by `offset`
    pub fn translated(&self, offset: Point) -> Self {
        Self {
            shape: self.shape.translated(offset),
            medium: self.medium,
        }
    }
}
