//! # Multiple scattering of acoustic waves by particle ensembles
//!
//! This crate computes the frequency-domain acoustic field scattered by an
//! arbitrary collection of particles in a homogeneous 2D medium, using the
//! T-matrix / multiple-scattering method:
//!
//! 1. each particle boundary is a [`shapes::Shape`] paired with an
//!    [`acoustics::Acoustic`] medium to form a [`particle::Particle`];
//! 2. the single-particle scattering operator comes from a closed-form
//!    boundary-value solution ([`tmatrix::t_matrix`]), computed once per
//!    congruence class of particles;
//! 3. all particles are coupled through Graf-translation blocks into one
//!    dense linear system ([`scattering::scattering_matrix`]) whose solution
//!    gives the outgoing modal coefficients;
//! 4. [`simulation::FrequencySimulation`] evaluates the total field at
//!    listener positions and packs it into a
//!    [`result::SimulationResult`].
//!
//! Special functions and translation operators live in `scatter-wave`; the
//! dense complex solve lives in `scatter-solvers`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)] // Scientific code often has many parameters

pub mod acoustics;
pub mod error;
pub mod particle;
pub mod point;
pub mod result;
pub mod scattering;
pub mod shapes;
pub mod simulation;
pub mod source;
pub mod tmatrix;

pub use acoustics::Acoustic;
pub use error::ScatterError;
pub use particle::Particle;
pub use point::Point;
pub use result::SimulationResult;
pub use scattering::{basis_coefficients, get_t_matrices, get_t_matrices_with, scattering_matrix};
pub use shapes::{
    bounding_box_of, boundary_points, points_in_shape, points_in_shape_excluding, AnyShape,
    Circle, EmptyShape, Halfspace, Plate, Rectangle, Shape, TimeOfFlight,
};
pub use simulation::FrequencySimulation;
pub use source::Source;
pub use tmatrix::t_matrix;
