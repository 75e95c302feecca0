//! Dense linear solvers for multiple-scattering systems
//!
//! The coupled scattering system is a dense complex matrix of moderate size
//! (number of particles × modal basis length per axis), so a direct LU
//! factorization with partial pivoting is the workhorse here.

pub mod lu;

pub use lu::{lu_factorize, lu_solve, LuError, LuFactorization};
