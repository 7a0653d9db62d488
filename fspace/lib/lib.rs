#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for approximating the ground
//! state of a one-dimensional quantum particle in an arbitrary, sampled
//! potential by projecting the Hamiltonian onto a truncated Fourier basis.
//!
//! The pipeline is:
//! - [`potential`]: load sampled `(x, V)` data
//! - [`config`]: choose a basis size, kinetic scale constant, and domain
//! - [`hamiltonian`]: assemble kinetic and potential matrix elements via
//!   [trapezoidal integration][utils::trapz] over the [basis][basis::basis]
//! - [`solve`]: diagonalize and select the smallest strictly positive
//!   eigenvalue as the ground state
//!
//! ```no_run
//! use fspace::{
//!     config::BasisConfig,
//!     potential::SampledPotential,
//!     solve::{ ground_state, Selection },
//! };
//!
//! let pot = SampledPotential::load("potential_energy.dat").unwrap();
//! let config = BasisConfig::for_potential(&pot, 5, None, None).unwrap();
//! let sol = ground_state(&pot, &config, Selection::default()).unwrap();
//! println!("E = {}; c = {}", sol.e, sol.coeffs);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod basis;
pub mod config;
pub mod error;
pub mod hamiltonian;
pub mod potential;
pub mod solve;
pub mod units;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
