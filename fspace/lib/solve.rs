//! Functions to extract the ground state from an assembled Hamiltonian.
//!
//! The ground state is taken to be the eigenpair with the smallest *strictly
//! positive* eigenvalue; non-positive energies are considered unphysical in
//! the reduced units used here and are never returned.

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use tracing::debug;
use crate::{
    Arr1,
    Arr2,
    basis::basis,
    config::{ BasisConfig, Domain },
    error::{ SolveError, SpectralError },
    hamiltonian::hamiltonian,
    potential::SampledPotential,
    utils::wf_normalized,
};

pub type SResult<T> = Result<T, SpectralError>;

/// A single eigenpair of a Hamiltonian.
///
/// Coefficients are given over the [Fourier basis][crate::basis], and their
/// overall sign is fixed so that the component with the largest magnitude is
/// positive. The coefficient vector reported for the `k`-th eigenvalue is the
/// `k`-th *row* of the eigenvector matrix returned by the solver. This
/// coincides with the `k`-th eigenvector only when that matrix is symmetric,
/// e.g. for a diagonal Hamiltonian with ascending entries.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Basis coefficients
    pub coeffs: nd::Array1<f64>,
    /// Position of the eigenvalue in the solver's output
    pub index: usize,
}

impl Solution {
    /// Evaluate the wavefunction `ψ(x) = Σ c[i] b(i, x)` over an array of
    /// coordinates.
    pub fn wavefunction<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| {
            self.coeffs.iter().enumerate()
                .map(|(i, ci)| ci * basis(i, xk))
                .sum()
        })
    }

    /// Like [`Self::wavefunction`], but normalize the result to unit norm
    /// assuming `x` is evenly spaced.
    ///
    /// *Panics if `x` has length less than 2*.
    pub fn wavefunction_normalized<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        let dx = x[1] - x[0];
        wf_normalized(&self.wavefunction(x), dx)
    }
}

/// Eigenvalue selection policy for the ground state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Sort eigenvalues in ascending order and take the first strictly
    /// positive one.
    #[default]
    SmallestPositive,
    /// Scan eigenvalues in the order returned by the solver, keeping a running
    /// best that is replaced unconditionally while non-positive and otherwise
    /// only by a smaller positive value.
    NativeScan,
}

// flip the sign of a vector so that its largest-magnitude component is positive
fn fix_sign(mut v: nd::Array1<f64>) -> nd::Array1<f64> {
    let lead
        = v.iter()
        .copied()
        .fold(0.0_f64, |acc, vk| if vk.abs() > acc.abs() { vk } else { acc });
    if lead < 0.0 { v.mapv_inplace(|vk| -vk); }
    v
}

fn check_square<S>(H: &Arr2<S>) -> SResult<usize>
where S: nd::Data<Elem = f64>
{
    let (n, m) = H.dim();
    (n == m).then_some(n).ok_or(SpectralError::NotSquare(n, m))
}

// full dense eigendecomposition; only the lower triangle of `H` is read
fn eigh<S>(H: &Arr2<S>) -> SResult<(nd::Array1<f64>, nd::Array2<f64>)>
where S: nd::Data<Elem = f64>
{
    check_square(H)?;
    let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
        = H.to_owned().eigh_into(la::UPLO::Lower)?;
    Ok((evals, evecs))
}

fn largest<S>(evals: &Arr1<S>) -> f64
where S: nd::Data<Elem = f64>
{
    evals.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Select the index of the ground-state eigenvalue from a list of eigenvalues
/// according to a [`Selection`] policy.
///
/// Returns [`SpectralError::NoPositive`] if no eigenvalue is strictly
/// positive.
pub fn select<S>(evals: &Arr1<S>, selection: Selection) -> SResult<usize>
where S: nd::Data<Elem = f64>
{
    let no_positive = || SpectralError::NoPositive(largest(evals));
    match selection {
        Selection::SmallestPositive => {
            let mut order: Vec<usize> = (0..evals.len()).collect();
            order.sort_by(|&a, &b| evals[a].total_cmp(&evals[b]));
            order.into_iter()
                .find(|&k| evals[k] > 0.0)
                .ok_or_else(no_positive)
        },
        Selection::NativeScan => {
            let mut iter = evals.iter().copied().enumerate();
            let (mut best_k, mut best_e) = iter.next().ok_or_else(no_positive)?;
            for (k, e) in iter {
                if best_e <= 0.0 || (e > 0.0 && e < best_e) {
                    best_k = k;
                    best_e = e;
                }
            }
            (best_e > 0.0).then_some(best_k).ok_or_else(no_positive)
        },
    }
}

/// Compute every eigenpair of a symmetric Hamiltonian, sorted by energy in
/// ascending order.
///
/// Only the lower triangle of `H` is read.
pub fn spectrum<S>(H: &Arr2<S>) -> SResult<Vec<Solution>>
where S: nd::Data<Elem = f64>
{
    let (evals, evecs) = eigh(H)?;
    let mut sols: Vec<Solution>
        = evals.into_iter().zip(evecs.rows()).enumerate()
        .map(|(index, (e, v))| {
            Solution { e, coeffs: fix_sign(v.to_owned()), index }
        })
        .collect();
    sols.sort_by(|l, r| l.e.total_cmp(&r.e));
    Ok(sols)
}

/// Compute the ground state of a symmetric Hamiltonian.
///
/// Only the lower triangle of `H` is read.
pub fn solve<S>(H: &Arr2<S>, selection: Selection) -> SResult<Solution>
where S: nd::Data<Elem = f64>
{
    let (evals, evecs) = eigh(H)?;
    let index = select(&evals, selection)?;
    debug!(
        energy = evals[index],
        index,
        dim = evals.len(),
        ?selection,
        "selected ground state"
    );
    Ok(Solution {
        e: evals[index],
        coeffs: fix_sign(evecs.row(index).to_owned()),
        index,
    })
}

/// Assemble the [Hamiltonian][hamiltonian] for a potential in the configured
/// basis and compute its ground state.
pub fn ground_state(
    potential: &SampledPotential,
    config: &BasisConfig,
    selection: Selection,
) -> SResult<Solution>
{
    let H = hamiltonian(potential, config);
    solve(&H, selection)
}

/// Validate raw potential samples and basis parameters, then compute the
/// ground state.
///
/// `kinetic_scale` defaults to [`DEF_KINETIC_SCALE`][crate::config::DEF_KINETIC_SCALE]
/// and `domain` to the sampled range of `x`.
pub fn compute_coefficients(
    x: nd::Array1<f64>,
    V: nd::Array1<f64>,
    basis_size: usize,
    kinetic_scale: Option<f64>,
    domain: Option<(f64, f64)>,
    selection: Selection,
) -> Result<Solution, SolveError>
{
    let potential = SampledPotential::from_arrays(x, V)?;
    let domain: Option<Domain> = domain.map(Domain::try_from).transpose()?;
    let config
        = BasisConfig::for_potential(&potential, basis_size, kinetic_scale, domain)?;
    let sol = ground_state(&potential, &config, selection)?;
    Ok(sol)
}
