#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! naturalized units.
//!
//! The Hamiltonian is assembled in reduced units (*ħ* = 1) with a single free
//! kinetic energy scale constant; [`Units::kinetic_scale`] gives the value of
//! that constant for a physical mass and length scale, measured in some chosen
//! energy unit.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// elementary charge (C); also the size of an electronvolt in joules
pub const qe: f64 = 1.602176634e-19;
//              +/- 0 (exact)

/// A collection of natural unit scaling factors relative to some base unit
/// system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system.
///
/// ```
/// use fspace::units::{ Units, a0, Eh, me };
///
/// // an electron on the scale of a Bohr radius has ħ²/2ma² = Eh / 2
/// let uu = Units::from_mks(me, a0);
/// assert!((uu.kinetic_scale(Eh) - 0.5).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale, ħ²/2ma².
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Construct from a mass and length scale in atomic (Bohr radii/electron
    /// masses) units (AU).
    ///
    /// The resulting energy scale is given in Hartrees.
    pub fn from_au(mass: f64, a: f64) -> Self {
        let m_si = me * mass;
        let a_si = a0 * a;
        let e_unit = hbar.powi(2) / 2.0 / m_si / a_si.powi(2) / Eh;
        Self { m: mass, a, e: e_unit }
    }

    /// Return the kinetic energy scale constant ħ²/2ma² expressed in units of
    /// `energy_unit` (given in the same base unit system as `self`).
    ///
    /// Potential data sampled in units of `energy_unit` over coordinates in
    /// units of `a` should be paired with this constant.
    pub fn kinetic_scale(&self, energy_unit: f64) -> f64 {
        self.e / energy_unit
    }
}
