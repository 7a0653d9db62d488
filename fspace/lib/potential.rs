//! Sampled potential-energy data and the plain-text table loader.
//!
//! Tables are whitespace-delimited with one `x V` pair per row:
//! ```text
//! # x        V
//! 0          0
//! 1.57079    6
//! 3.14159    0
//! ```
//! Blank lines and `#` comments are skipped, and a first row that does not
//! parse as numbers is treated as a column header and dropped. Columns past
//! the second are ignored.

use std::{ fs, path::Path };
use ndarray as nd;
use tracing::debug;
use crate::{
    Arr1,
    error::{ DataError, LengthError },
};

pub type DResult<T> = Result<T, DataError>;

/// Potential energy sampled over a finite, strictly increasing set of
/// coordinates.
///
/// Arrays borrowed from this type are guaranteed to have the same length (at
/// least 2), to hold only finite values, and for the coordinates to be sorted
/// in strictly ascending order. The potential value belonging to a coordinate
/// is always addressed by its position in the arrays.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledPotential {
    // coordinate array
    x: nd::Array1<f64>,
    // potential array
    V: nd::Array1<f64>,
}

impl SampledPotential {
    /// Create a new `SampledPotential` from bare coordinate and potential
    /// arrays.
    pub fn from_arrays(x: nd::Array1<f64>, V: nd::Array1<f64>) -> DResult<Self> {
        LengthError::check(&x, &V)?;
        DataError::check_len(x.len())?;
        if let Some(k)
            = x.iter().zip(&V).position(|(xk, Vk)| !xk.is_finite() || !Vk.is_finite())
        {
            return Err(DataError::NonFinite(k));
        }
        if let Some(k) = x.iter().zip(x.iter().skip(1)).position(|(a, b)| b <= a) {
            return Err(DataError::NotIncreasing(k + 1, x[k + 1], x[k]));
        }
        Ok(Self { x, V })
    }

    /// Create a new `SampledPotential` from a sequence of `(x, V)` pairs.
    pub fn from_pairs<I>(pairs: I) -> DResult<Self>
    where I: IntoIterator<Item = (f64, f64)>
    {
        let (x, V): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::from_arrays(x.into(), V.into())
    }

    /// Create a new `SampledPotential` by evaluating a function over a set of
    /// coordinates.
    pub fn from_fn<S, F>(x: &Arr1<S>, V: F) -> DResult<Self>
    where
        S: nd::Data<Elem = f64>,
        F: FnMut(f64) -> f64,
    {
        Self::from_arrays(x.to_owned(), x.mapv(V))
    }

    /// Parse a whitespace-delimited `x V` table.
    pub fn parse(text: &str) -> DResult<Self> {
        let mut pairs: Vec<(f64, f64)> = Vec::new();
        let mut seen_row = false;
        for (k, line) in text.lines().enumerate() {
            let content = line.split('#').next().unwrap_or("").trim();
            if content.is_empty() { continue; }
            match parse_row(content) {
                Some(pair) => { pairs.push(pair); },
                None if !seen_row => {
                    debug!(line = k + 1, header = content, "skipping table header");
                },
                None => {
                    return Err(DataError::BadRow {
                        line: k + 1,
                        content: content.to_string(),
                    });
                },
            }
            seen_row = true;
        }
        Self::from_pairs(pairs)
    }

    /// Read and [parse][Self::parse] a table from a file.
    pub fn load<P>(path: P) -> DResult<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
        let pot = Self::parse(&text)?;
        debug!(path = %path.display(), samples = pot.len(), "loaded potential");
        Ok(pot)
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the first and last sampled coordinates.
    pub fn bounds(&self) -> (f64, f64) { (self.x[0], self.x[self.x.len() - 1]) }

    /// Get the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }
}

// parse the first two columns of a row as numbers
fn parse_row(content: &str) -> Option<(f64, f64)> {
    let mut cols = content.split_whitespace();
    let x: f64 = cols.next()?.parse().ok()?;
    let V: f64 = cols.next()?.parse().ok()?;
    Some((x, V))
}
