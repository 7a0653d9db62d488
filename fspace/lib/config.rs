//! Basis and integration parameters for Hamiltonian assembly.
//!
//! ```
//! use fspace::config::{ BasisConfig, Domain };
//!
//! let config = BasisConfig::new(5, 2.0, Domain::new(0.0, 10.0).unwrap())
//!     .unwrap();
//! assert_eq!(config.basis_size(), 5);
//! assert!(BasisConfig::new(0, 1.0, config.domain()).is_err());
//! ```

use crate::{
    error::ConfigError,
    potential::SampledPotential,
};

pub type CResult<T> = Result<T, ConfigError>;

/// Default kinetic energy scale constant.
pub const DEF_KINETIC_SCALE: f64 = 1.0;

/// Number of points in the uniform grid used for kinetic energy integrals.
pub const KINETIC_GRID_POINTS: usize = 1000;

/// A finite, non-empty interval `[min, max)` over which kinetic energy matrix
/// elements are integrated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Create a new `Domain`, requiring `min < max` with both finite.
    pub fn new(min: f64, max: f64) -> CResult<Self> {
        ConfigError::check_domain(min, max)?;
        Ok(Self { min, max })
    }

    /// Create a `Domain` spanning the first through last sampled coordinates
    /// of a potential.
    pub fn from_potential(potential: &SampledPotential) -> Self {
        // sample coordinates are finite and strictly increasing
        let (min, max) = potential.bounds();
        Self { min, max }
    }

    /// Get the lower bound.
    pub fn min(&self) -> f64 { self.min }

    /// Get the upper bound.
    pub fn max(&self) -> f64 { self.max }

    /// Return `true` if `self` lies within `[lo, hi]`.
    pub fn is_within(&self, lo: f64, hi: f64) -> bool {
        lo <= self.min && self.max <= hi
    }
}

impl TryFrom<(f64, f64)> for Domain {
    type Error = ConfigError;

    fn try_from(bounds: (f64, f64)) -> CResult<Self> {
        Self::new(bounds.0, bounds.1)
    }
}

/// Validated configuration for a Fourier basis projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BasisConfig {
    basis_size: usize,
    kinetic_scale: f64,
    domain: Domain,
}

impl BasisConfig {
    /// Create a new `BasisConfig`.
    ///
    /// Fails if `basis_size` is zero or `kinetic_scale` is not a finite,
    /// positive number.
    pub fn new(basis_size: usize, kinetic_scale: f64, domain: Domain)
        -> CResult<Self>
    {
        ConfigError::check_basis_size(basis_size)?;
        ConfigError::check_kinetic_scale(kinetic_scale)?;
        Ok(Self { basis_size, kinetic_scale, domain })
    }

    /// Create a new `BasisConfig` for a potential, taking the kinetic scale
    /// and domain from their defaults where not given.
    ///
    /// The default domain spans the potential's sampled coordinates.
    pub fn for_potential(
        potential: &SampledPotential,
        basis_size: usize,
        kinetic_scale: Option<f64>,
        domain: Option<Domain>,
    ) -> CResult<Self>
    {
        Self::new(
            basis_size,
            kinetic_scale.unwrap_or(DEF_KINETIC_SCALE),
            domain.unwrap_or_else(|| Domain::from_potential(potential)),
        )
    }

    /// Get the number of basis functions.
    pub fn basis_size(&self) -> usize { self.basis_size }

    /// Get the kinetic energy scale constant.
    pub fn kinetic_scale(&self) -> f64 { self.kinetic_scale }

    /// Get the kinetic energy integration domain.
    pub fn domain(&self) -> Domain { self.domain }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potential() -> SampledPotential {
        SampledPotential::from_pairs([(-1.0, 3.0), (0.5, 0.0), (2.0, 3.0)])
            .unwrap()
    }

    #[test]
    fn domain_validation() {
        assert!(Domain::new(0.0, 1.0).is_ok());
        assert!(matches!(
            Domain::new(1.0, 0.0),
            Err(ConfigError::BadDomain(..)),
        ));
        assert!(Domain::try_from((2.0, 2.0)).is_err());
        assert!(Domain::new(f64::NAN, 2.0).is_err());
    }

    #[test]
    fn config_validation() {
        let dom = Domain::new(0.0, 1.0).unwrap();
        assert!(matches!(
            BasisConfig::new(0, 1.0, dom),
            Err(ConfigError::BadBasisSize(0)),
        ));
        assert!(matches!(
            BasisConfig::new(3, 0.0, dom),
            Err(ConfigError::BadKineticScale(_)),
        ));
        assert!(matches!(
            BasisConfig::new(3, -2.0, dom),
            Err(ConfigError::BadKineticScale(_)),
        ));
        let config = BasisConfig::new(3, 2.5, dom).unwrap();
        assert_eq!(config.basis_size(), 3);
        assert_eq!(config.kinetic_scale(), 2.5);
        assert_eq!(config.domain(), dom);
    }

    #[test]
    fn defaults_from_potential() {
        let pot = potential();
        let config = BasisConfig::for_potential(&pot, 4, None, None).unwrap();
        assert_eq!(config.kinetic_scale(), DEF_KINETIC_SCALE);
        assert_eq!((config.domain().min(), config.domain().max()), (-1.0, 2.0));

        let dom = Domain::new(0.0, 5.0).unwrap();
        let config
            = BasisConfig::for_potential(&pot, 4, Some(2.0), Some(dom)).unwrap();
        assert_eq!(config.kinetic_scale(), 2.0);
        assert_eq!(config.domain(), dom);
        assert!(!dom.is_within(-1.0, 2.0));
        assert!(Domain::from_potential(&pot).is_within(-1.0, 2.0));
    }
}
