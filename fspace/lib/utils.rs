//! Numerical integration and miscellaneous tools.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };
use crate::Arr1;

/// Integrate a function over a set of (possibly non-uniform) nodes using the
/// trapezoidal rule.
///
/// The function is evaluated at both ends of every interval. Returns zero if
/// fewer than two nodes are given.
///
/// ```
/// use ndarray as nd;
/// use fspace::utils::trapz;
///
/// assert_eq!(trapz(|x| x, &nd::array![0.0, 1.0]), 0.5);
/// assert_eq!(trapz(|x| x, &nd::array![1.0, 2.0]), 1.5);
/// ```
pub fn trapz<F, S>(mut f: F, x: &Arr1<S>) -> f64
where
    F: FnMut(f64) -> f64,
    S: nd::Data<Elem = f64>,
{
    x.iter().zip(x.iter().skip(1))
        .map(|(&xk, &xkp1)| 0.5 * (xkp1 - xk) * (f(xkp1) + f(xk)))
        .sum()
}

/// Integrate pre-sampled values `y` over nodes `x` using the trapezoidal rule.
///
/// Samples are paired by position; if the arrays differ in length, the excess
/// of the longer one is ignored. Returns zero if fewer than two pairs are
/// available.
pub fn trapz_samples<S, T>(y: &Arr1<S>, x: &Arr1<T>) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    x.iter().zip(x.iter().skip(1))
        .zip(y.iter().zip(y.iter().skip(1)))
        .map(|((&xk, &xkp1), (&yk, &ykp1))| 0.5 * (xkp1 - xk) * (ykp1 + yk))
        .sum()
}

/// Generate `n` uniformly spaced points starting at `min` with step
/// `(max - min) / n`, so that `max` itself is excluded.
pub fn range_grid(min: f64, max: f64, n: usize) -> nd::Array1<f64> {
    let step = (max - min) / n as f64;
    (0..n).map(|k| min + k as f64 * step).collect()
}

/// Calculate the norm of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let norm = A::from_real(wf_norm(q, dx).sqrt());
    q.mapv(|qk| qk / norm)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn linear() {
        assert_eq!(trapz(|x| x, &nd::array![0.0, 1.0]), 0.5);
        assert_eq!(trapz(|x| x, &nd::array![1.0, 2.0]), 1.5);
    }

    #[test]
    fn degenerate() {
        assert_eq!(trapz(|x| x, &nd::array![1.0]), 0.0);
        assert_eq!(trapz(|x| x, &nd::Array1::<f64>::zeros(0)), 0.0);
        assert_eq!(trapz_samples(&nd::array![3.0], &nd::array![1.0]), 0.0);
    }

    #[test]
    fn additive() {
        let f = |x: f64| x.powi(3) - 2.0 * x;
        let whole = trapz(f, &nd::array![0.0, 0.4, 1.3]);
        let parts
            = trapz(f, &nd::array![0.0, 0.4]) + trapz(f, &nd::array![0.4, 1.3]);
        assert!((whole - parts).abs() < 1e-15);
    }

    #[test]
    fn nonuniform_matches_samples() {
        let x = nd::array![0.0, 0.1, 0.5, 0.55, 2.0];
        let y = x.mapv(f64::exp);
        let a = trapz(f64::exp, &x);
        let b = trapz_samples(&y, &x);
        assert!((a - b).abs() < 1e-14);
    }

    #[test]
    fn uniform_matches_general() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 101);
        let y = x.mapv(f64::sin);
        assert!((trapz_samples(&y, &x) - trapz(f64::sin, &x)).abs() < 1e-12);
        assert!((trapz(f64::sin, &x) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn closed_form_sin_squared() {
        let grid = range_grid(0.0, 3.0 * PI, 1000);
        let val = trapz(|x| x.sin().powi(2), &grid);
        assert!((val - 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn grid_excludes_endpoint() {
        let grid = range_grid(1.0, 3.0, 4);
        assert_eq!(grid, nd::array![1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn normalization() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 201);
        let dx = x[1] - x[0];
        let q = x.mapv(|xk| 3.0 * xk.sin());
        let qn = wf_normalized(&q, dx);
        assert!((wf_norm(&qn, dx) - 1.0).abs() < 1e-12);
        assert!((qn[100] / q[100] - qn[50] / q[50]).abs() < 1e-14);
    }
}
