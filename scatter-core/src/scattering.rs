//! Multiple-scattering system assembly
//!
//! Each particle scatters the incident field plus the fields scattered by
//! every other particle. Writing the wave exciting particle j in the
//! regular basis about its origin gives the block-linear system
//!
//! ```text
//! (S + I) a = f,    S_{jl} = -U(x_j - x_l) T_l   for j ≠ l
//! ```
//!
//! where `U` is the Graf translation matrix, `T_l` the T-matrix of
//! particle l, and `f` stacks the source expansion about each particle
//! origin. The scattered coefficients are `T_j a_j`.

use crate::acoustics::Acoustic;
use crate::error::ScatterError;
use crate::particle::Particle;
use crate::source::Source;
use crate::tmatrix::t_matrix;
use ndarray::{s, Array1, Array2};
use num_complex::Complex64;
use rayon::prelude::*;
use scatter_solvers::lu_solve;
use scatter_wave::outgoing_translation_matrix;

/// T-matrices for a set of particles, one computation per congruence class
///
/// Congruent particles scatter identically up to translation, so their
/// T-matrices are equal; the matrix is computed once per class via
/// `compute` and cloned for the other class members. The scan is linear in
/// the number of classes, which is small in the typical monodisperse and
/// few-species configurations.
pub fn get_t_matrices_with<F>(
    particles: &[Particle],
    mut compute: F,
) -> Result<Vec<Array2<Complex64>>, ScatterError>
where
    F: FnMut(&Particle) -> Result<Array2<Complex64>, ScatterError>,
{
    let mut t_matrices: Vec<Array2<Complex64>> = Vec::with_capacity(particles.len());
    let mut representatives: Vec<usize> = Vec::new();

    for (i, p) in particles.iter().enumerate() {
        let class = representatives
            .iter()
            .copied()
            .find(|&r| particles[r].congruent(p));
        match class {
            Some(r) => {
                let shared = t_matrices[r].clone();
                t_matrices.push(shared);
            }
            None => {
                t_matrices.push(compute(p)?);
                representatives.push(i);
            }
        }
    }
    Ok(t_matrices)
}

/// T-matrices for a set of particles in the host medium `outer`
pub fn get_t_matrices(
    outer: &Acoustic,
    particles: &[Particle],
    omega: f64,
    order: usize,
) -> Result<Vec<Array2<Complex64>>, ScatterError> {
    get_t_matrices_with(particles, |p| {
        t_matrix(&p.shape, &p.medium, outer, omega, order)
    })
}

/// Assemble the block matrix S coupling the particle expansions
///
/// The result is `P·N × P·N` with `N = 2 * order + 1`, zero diagonal
/// blocks, and off-diagonal blocks `-U(x_j - x_l) T_l`: `U` re-expands the
/// outgoing wave of particle l as a regular wave about particle j. The
/// blocks are independent and are computed in parallel.
pub fn scattering_matrix(
    outer: &Acoustic,
    particles: &[Particle],
    t_matrices: &[Array2<Complex64>],
    omega: f64,
    order: usize,
) -> Result<Array2<Complex64>, ScatterError> {
    if t_matrices.len() != particles.len() {
        return Err(ScatterError::ShapeMismatch {
            axis: "t_matrices",
            expected: particles.len(),
            got: t_matrices.len(),
        });
    }
    let p_count = particles.len();
    if p_count == 0 {
        return Ok(Array2::zeros((0, 0)));
    }

    let k = outer.wavenumber(omega);
    if k.im != 0.0 {
        return Err(ScatterError::Unimplemented(
            "scattering matrix in a host medium with complex wavenumber".into(),
        ));
    }

    let n = 2 * order + 1;
    let pairs: Vec<(usize, usize)> = (0..p_count)
        .flat_map(|j| (0..p_count).filter(move |&l| l != j).map(move |l| (j, l)))
        .collect();

    let blocks: Vec<((usize, usize), Array2<Complex64>)> = pairs
        .into_par_iter()
        .map(|(j, l)| {
            let x = particles[j].origin() - particles[l].origin();
            let u = outgoing_translation_matrix(k.re, order, x.x, x.y);
            let block = u.dot(&t_matrices[l]).mapv(|v| -v);
            ((j, l), block)
        })
        .collect();

    let mut s = Array2::zeros((p_count * n, p_count * n));
    for ((j, l), block) in blocks {
        s.slice_mut(s![j * n..(j + 1) * n, l * n..(l + 1) * n])
            .assign(&block);
    }
    Ok(s)
}

/// Scattered-wave coefficients of every particle
///
/// Solves `(S + I) a = f` and applies each particle's T-matrix to its
/// slice of the solution. Column j of the result holds the `2 * order + 1`
/// outgoing coefficients of particle j about its own origin.
pub fn basis_coefficients(
    outer: &Acoustic,
    particles: &[Particle],
    source: &Source,
    omega: f64,
    order: usize,
) -> Result<Array2<Complex64>, ScatterError> {
    let t_matrices = get_t_matrices(outer, particles, omega, order)?;
    let mut system = scattering_matrix(outer, particles, &t_matrices, omega, order)?;
    for i in 0..system.nrows() {
        system[[i, i]] += Complex64::new(1.0, 0.0);
    }

    let n = 2 * order + 1;
    let mut forcing = Array1::zeros(particles.len() * n);
    for (j, p) in particles.iter().enumerate() {
        forcing
            .slice_mut(s![j * n..(j + 1) * n])
            .assign(&source.coefficients(omega, p.origin(), order));
    }

    let a = lu_solve(&system, &forcing)?;

    let mut out = Array2::zeros((n, particles.len()));
    for (j, t) in t_matrices.iter().enumerate() {
        let slice = a.slice(s![j * n..(j + 1) * n]);
        out.column_mut(j).assign(&t.dot(&slice));
    }
    Ok(out)
}
