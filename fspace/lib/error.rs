//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a [`BasisConfig`][crate::config::BasisConfig] carries an
/// invalid parameter.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a basis size of zero is encountered.
    #[error("basis size must be at least 1; got {0}")]
    BadBasisSize(usize),

    /// Returned when a non-positive or non-finite kinetic scale constant is
    /// encountered.
    #[error("kinetic scale must be a finite number greater than 0; got {0}")]
    BadKineticScale(f64),

    /// Returned when domain bounds are unordered or non-finite.
    #[error("domain bounds must be finite with min < max; got [{0}, {1}]")]
    BadDomain(f64, f64),
}

impl ConfigError {
    pub(crate) fn check_basis_size(basis_size: usize) -> Result<(), Self> {
        (basis_size != 0).then_some(()).ok_or(Self::BadBasisSize(basis_size))
    }

    pub(crate) fn check_kinetic_scale(c: f64) -> Result<(), Self> {
        (c.is_finite() && c > 0.0).then_some(()).ok_or(Self::BadKineticScale(c))
    }

    pub(crate) fn check_domain(min: f64, max: f64) -> Result<(), Self> {
        (min.is_finite() && max.is_finite() && min < max)
            .then_some(())
            .ok_or(Self::BadDomain(min, max))
    }
}

/// Returned when potential-energy sample data are malformed or insufficient.
#[derive(Debug, Error)]
pub enum DataError {
    /// Returned when fewer than two samples are provided.
    #[error("potential data must contain at least 2 samples; got {0}")]
    TooFewSamples(usize),

    /// Returned when coordinates are not strictly increasing.
    #[error("sample coordinates must be strictly increasing; x[{0}] = {1} follows {2}")]
    NotIncreasing(usize, f64, f64),

    /// Returned when a sample contains a NaN or infinite value.
    #[error("sample {0} contains a non-finite value")]
    NonFinite(usize),

    /// Returned when a data row cannot be parsed as two numbers.
    #[error("line {line}: expected two numeric columns; got {content:?}")]
    BadRow { line: usize, content: String },

    /// Returned when a data file cannot be read.
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl DataError {
    pub(crate) fn check_len(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooFewSamples(n))
    }
}

/// Returned from the spectral solver.
#[derive(Debug, Error)]
pub enum SpectralError {
    /// Returned when the Hamiltonian has no strictly positive eigenvalue; the
    /// largest eigenvalue found is carried along.
    #[error("no strictly positive eigenvalue found; largest is {0}")]
    NoPositive(f64),

    /// Returned when a non-square Hamiltonian is encountered.
    #[error("hamiltonian must be square; got shape {0}x{1}")]
    NotSquare(usize, usize),

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from the full ground-state pipeline.
#[derive(Debug, Error)]
pub enum SolveError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`DataError`]
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// [`SpectralError`]
    #[error("spectral error: {0}")]
    Spectral(#[from] SpectralError),
}
