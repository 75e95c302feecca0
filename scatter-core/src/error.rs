//! Error types for the scattering engine
//!
//! Every failure is raised at the point of detection and propagated to the
//! caller unhandled; there are no retries, no partial results, and no
//! silent clamping of degenerate inputs.

use scatter_solvers::LuError;
use thiserror::Error;

/// Errors raised by geometry, T-matrix, and simulation operations
#[derive(Error, Debug)]
pub enum ScatterError {
    /// Physically degenerate or out-of-range input; the message states the
    /// violated precondition
    #[error("domain error: {0}")]
    Domain(String),

    /// No closed-form solution exists for the requested combination of
    /// types; the message names the offending type(s)
    #[error("not implemented: {0}")]
    Unimplemented(String),

    /// A composite object was constructed from components of inconsistent
    /// sizes
    #[error("field table axis `{axis}` has length {got}, expected {expected}")]
    ShapeMismatch {
        /// Name of the mismatched axis
        axis: &'static str,
        /// Length required by the companion sequence
        expected: usize,
        /// Length actually supplied
        got: usize,
    },

    /// The assembled scattering system could not be solved
    #[error(transparent)]
    Solver(#[from] LuError),
}
