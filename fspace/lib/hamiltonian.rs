//! Assembly of the Hamiltonian matrix in the Fourier basis.
//!
//! Each matrix element is a sum of two independent contributions,
//! ```text
//! H[i, j] = c f(i)² ∫ b(i, x) b(j, x) dx  +  ∫ V(x) b(i, x) b(j, x) dx
//!           \__________ kinetic ________/    \______ potential _______/
//! ```
//! where `b` is the [basis][crate::basis::basis], `f` its [integer
//! frequency][crate::basis::frequency] and `c` the kinetic scale constant. The
//! kinetic integral is taken over a fixed uniform grid of
//! [`KINETIC_GRID_POINTS`] points spanning the configured domain; the potential
//! integral is taken over the potential's own sample coordinates.
//!
//! The kinetic term is evaluated for `i >= j` (so that `f` is the frequency of
//! the higher-index function) and mirrored across the diagonal, so all
//! matrices returned here are exactly symmetric.

use ndarray as nd;
use tracing::{ debug, warn };
use crate::{
    basis::{ basis, basis_array, frequency },
    config::{ BasisConfig, KINETIC_GRID_POINTS },
    potential::SampledPotential,
    utils::{ range_grid, trapz, trapz_samples },
};

// fill a symmetric matrix from its lower triangle (i >= j)
fn symmetric_from_lower<F>(n: usize, mut elem: F) -> nd::Array2<f64>
where F: FnMut(usize, usize) -> f64
{
    let mut H: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let h = elem(i, j);
            H[[i, j]] = h;
            H[[j, i]] = h;
        }
    }
    H
}

/// Compute the kinetic energy contribution to the Hamiltonian.
pub fn kinetic_energy(config: &BasisConfig) -> nd::Array2<f64> {
    let domain = config.domain();
    let grid = range_grid(domain.min(), domain.max(), KINETIC_GRID_POINTS);
    let c = config.kinetic_scale();
    symmetric_from_lower(config.basis_size(), |i, j| {
        let f2 = frequency(i).pow(2) as f64;
        c * trapz(|x| f2 * basis(i, x) * basis(j, x), &grid)
    })
}

/// Compute the potential energy contribution to the Hamiltonian for a given
/// number of basis functions.
pub fn potential_energy(potential: &SampledPotential, basis_size: usize)
    -> nd::Array2<f64>
{
    let x = potential.get_x();
    let V = potential.get_V();
    let b: Vec<nd::Array1<f64>>
        = (0..basis_size).map(|i| basis_array(i, x)).collect();
    symmetric_from_lower(basis_size, |i, j| {
        let y: nd::Array1<f64>
            = nd::Zip::from(V).and(&b[i]).and(&b[j])
            .map_collect(|Vk, bik, bjk| Vk * bik * bjk);
        trapz_samples(&y, x)
    })
}

/// Compute the full Hamiltonian for a potential in the configured basis.
pub fn hamiltonian(potential: &SampledPotential, config: &BasisConfig)
    -> nd::Array2<f64>
{
    let (lo, hi) = potential.bounds();
    if !config.domain().is_within(lo, hi) {
        warn!(
            min = config.domain().min(),
            max = config.domain().max(),
            sample_min = lo,
            sample_max = hi,
            "kinetic domain extends past the sampled potential, which is \
            treated as zero there"
        );
    }
    debug!(
        basis_size = config.basis_size(),
        kinetic_scale = config.kinetic_scale(),
        samples = potential.len(),
        "assembling hamiltonian"
    );
    kinetic_energy(config) + potential_energy(potential, config.basis_size())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use crate::config::Domain;
    use super::*;

    fn sample() -> SampledPotential {
        SampledPotential::from_pairs([
            (0.0, 0.0),
            (1.57079, 6.0),
            (3.14159, 0.0),
            (4.71238, -6.0),
            (6.28318, 0.0),
            (7.85398, 6.0),
            (9.42477, 0.0),
        ])
        .unwrap()
    }

    fn config(pot: &SampledPotential, n: usize, c: f64) -> BasisConfig {
        BasisConfig::for_potential(pot, n, Some(c), None).unwrap()
    }

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{a} != {b} (eps = {eps})");
    }

    fn assert_symmetric(H: &nd::Array2<f64>) {
        let n = H.nrows();
        for i in 0..n {
            for j in 0..n {
                assert!((H[[i, j]] - H[[j, i]]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn kinetic_reference_values() {
        let pot = sample();
        let T = kinetic_energy(&config(&pot, 5, 1.0));
        assert_eq!(T.dim(), (5, 5));
        assert_eq!(T[[0, 0]], 0.0);
        // ∫ sin(x) over [0, 3π] is 2
        assert_close(T[[1, 0]], 1.9999407080507803, 1e-10);
        // ∫ cos(x) over [0, 3π] is 0
        assert_close(T[[2, 0]], 0.00943252106630788, 1e-10);
        // ∫ sin²(x) over [0, 3π] is 3π/2
        assert_close(T[[1, 1]], 4.712388560987876, 1e-10);
        assert_close(T[[1, 1]], 1.5 * PI, 1e-5);
        assert_close(T[[1, 2]], 4.448556822280619e-05, 1e-12);
        // 4 ∫ sin(2x) cos(x) over [0, 3π] is 16/3
        assert_close(T[[3, 2]], 5.3328590283266255, 1e-10);
        assert_symmetric(&T);
    }

    #[test]
    fn kinetic_scale_doubles() {
        let pot = sample();
        let T1 = kinetic_energy(&config(&pot, 5, 1.0));
        let T2 = kinetic_energy(&config(&pot, 5, 2.0));
        assert_eq!(T2[[1, 0]], 2.0 * T1[[1, 0]]);
        assert_eq!(T2, 2.0 * &T1);
    }

    #[test]
    fn kinetic_domain() {
        let pot = sample();
        let dom = Domain::new(0.0, 2.0 * 3.1415).unwrap();
        let config = BasisConfig::for_potential(&pot, 5, None, Some(dom)).unwrap();
        let T = kinetic_energy(&config);
        // ∫ sin(x) over [0, 2π] is 0
        assert_close(T[[1, 0]], 2.0919357132000873e-05, 1e-12);
    }

    #[test]
    fn dc_only_has_no_kinetic_energy() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let pot = SampledPotential::from_fn(&x, |_| 0.0).unwrap();
        let config = config(&pot, 1, 3.0);
        assert_eq!(kinetic_energy(&config), nd::array![[0.0]]);
        assert_eq!(hamiltonian(&pot, &config), nd::array![[0.0]]);

        let pot = SampledPotential::from_fn(&x, |_| 2.0).unwrap();
        let H = hamiltonian(&pot, &config);
        // average value times domain width
        assert_close(H[[0, 0]], 2.0, 1e-14);
    }

    #[test]
    fn potential_reference_values() {
        let pot = sample();
        let U = potential_energy(&pot, 3);
        assert_eq!(U.dim(), (3, 3));
        assert_close(U[[0, 0]], 9.424770000000002, 1e-10);
        assert_close(U[[0, 2]], 0.00015966648064403503, 1e-12);
        assert_close(U[[1, 1]], 9.424770000357663, 1e-10);
        assert_symmetric(&U);
    }

    #[test]
    fn passes_add() {
        let pot = sample();
        let config = config(&pot, 3, 1.0);
        let H = hamiltonian(&pot, &config);
        assert_close(H[[0, 0]], 9.424770000000002, 1e-10);
        assert_close(H[[1, 1]], 4.712388560987876 + 9.424770000357663, 1e-10);
        let sum = potential_energy(&pot, 3) + kinetic_energy(&config);
        assert!(H.iter().zip(&sum).all(|(a, b)| (a - b).abs() < 1e-12));
        assert_symmetric(&H);
    }

    #[test]
    fn larger_basis_is_symmetric() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-2.0, 3.0, 257);
        let pot = SampledPotential::from_fn(&x, |xk| xk.powi(2) - xk).unwrap();
        let H = hamiltonian(&pot, &config(&pot, 9, 0.5));
        assert_eq!(H.dim(), (9, 9));
        assert_symmetric(&H);
    }
}
