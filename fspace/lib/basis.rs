//! The truncated Fourier basis.
//!
//! Basis functions are indexed from zero in the order
//! ```text
//! 1, sin(x), cos(x), sin(2x), cos(2x), sin(3x), cos(3x), ...
//! ```
//!
//! ```
//! use fspace::basis::basis;
//!
//! assert_eq!(basis(0, 0.7), 1.0);
//! assert_eq!(basis(1, 0.7), 0.7_f64.sin());
//! assert_eq!(basis(4, 0.7), (2.0 * 0.7_f64).cos());
//! ```

use ndarray as nd;
use crate::Arr1;

/// Return the integer angular frequency of basis function `i`.
///
/// This is also the square root of the eigenvalue of `-d²/dx²` belonging to
/// that function.
pub fn frequency(i: usize) -> usize { (i + 1) / 2 }

/// Evaluate basis function `i` at `x`.
pub fn basis(i: usize, x: f64) -> f64 {
    if i % 2 == 0 {
        ((i / 2) as f64 * x).cos()
    } else {
        (frequency(i) as f64 * x).sin()
    }
}

/// Evaluate basis function `i` over an array of coordinates.
pub fn basis_array<S>(i: usize, x: &Arr1<S>) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| basis(i, xk))
}
