//! Cylindrical special functions for 2D acoustic scattering
//!
//! This crate provides the special-function layer used by the
//! multiple-scattering solver:
//!
//! - **Bessel functions**: cylindrical J, Y, Hankel H⁽¹⁾ and their first
//!   derivatives, for integer order and real argument
//! - **Complex arguments**: Bessel J for complex argument (lossy media)
//! - **Translation operators**: Graf addition-theorem matrices that
//!   re-expand an outgoing wave about a shifted origin
//!
//! Real-argument evaluations delegate to `spec_math`; only the combination
//! of those outputs (derivatives, Hankel assembly, translation matrices)
//! lives here.

pub mod bessel;
pub mod translation;

pub use bessel::{
    besselj, besselj_complex, bessely, diffbesselj, diffbesselj_complex, diffbessely,
    diffhankelh1, hankelh1,
};
pub use translation::outgoing_translation_matrix;
