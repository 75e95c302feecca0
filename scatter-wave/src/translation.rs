//! Graf addition-theorem translation operators
//!
//! An outgoing cylindrical wave expanded about one origin can be
//! re-expanded as a regular series about a shifted origin:
//!
//! ```text
//! H_n^(1)(k|x + d|) e^{inθ'} = Σ_m U_{nm} J_m(k|x|) e^{imθ}
//! U_{nm} = H_{n-m}^(1)(k|d|) e^{i(n-m) arg(d)}
//! ```
//!
//! valid for |x| < |d|, where θ' = arg(x + d) and θ = arg(x). These matrices couple the scattered fields of
//! distinct particles in the multiple-scattering system.

use crate::bessel::hankelh1;
use ndarray::Array2;
use num_complex::Complex64;

/// Outgoing-to-regular translation matrix for a shift `(dx, dy)`
///
/// Returns the (2M+1)×(2M+1) matrix with entry `[i, j]` equal to
/// `H_{n-m}(k r) e^{i(n-m)θ}` where `m = i - M` indexes the regular basis,
/// `n = j - M` indexes the outgoing basis, `r = |(dx, dy)|` and
/// `θ = atan2(dy, dx)`.
///
/// The shift must be nonzero; translating an outgoing basis onto its own
/// origin is not meaningful and the Hankel functions diverge there.
pub fn outgoing_translation_matrix(k: f64, order: usize, dx: f64, dy: f64) -> Array2<Complex64> {
    let m_max = order as i32;
    let size = 2 * order + 1;
    let r = dx.hypot(dy);
    let theta = dy.atan2(dx);

    // All needed orders in one pass: |n - m| <= 2M
    let kinds: Vec<Complex64> = (-2 * m_max..=2 * m_max)
        .map(|d| hankelh1(d, k * r) * Complex64::from_polar(1.0, d as f64 * theta))
        .collect();

    let mut u = Array2::zeros((size, size));
    for i in 0..size {
        for j in 0..size {
            let m = i as i32 - m_max;
            let n = j as i32 - m_max;
            u[[i, j]] = kinds[(n - m + 2 * m_max) as usize];
        }
    }
    u
}
