//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Matrix elements](#matrix-elements)
//! - [Ground state selection](#ground-state-selection)
//! - [Units](#units)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation (TISE)
//! amounts to finding eigenpairs of the Hamiltonian operator
//! ```text
//!       ∂²
//! H = -c --- + V(x)
//!       ∂x²
//! ```
//! where *c* = *ħ*²/2*m* collects the physical constants of the kinetic term
//! and *V*(*x*) is a conservative potential. Here *V* is known only through a
//! finite set of samples (*x*ₖ, *V*ₖ), possibly unevenly spaced.
//!
//! Rather than discretizing *x* directly, the wavefunction is expanded over a
//! truncated Fourier basis,
//! ```text
//! ψ(x) = Σ  c[i] b(i, x),     b = 1, sin(x), cos(x), sin(2x), cos(2x), ...
//!        i
//! ```
//! so that the TISE becomes a finite matrix eigenvalue problem `H c = E c` for
//! the coefficient vector. The accuracy of the approximation is governed by the
//! number of basis functions kept.
//!
//! # Matrix elements
//! Each basis function is an eigenfunction of the second derivative,
//! ```text
//!   ∂²
//! - --- b(i, x) = f(i)² b(i, x),     f(i) = ⌊(i + 1) / 2⌋
//!   ∂x²
//! ```
//! so the kinetic matrix element reduces to an overlap integral weighted by
//! *c f*(*i*)². This integral depends only on the basis and the chosen domain,
//! and is evaluated with the trapezoidal rule over a fixed uniform grid of 1000
//! points spanning `[min, max)`, independent of how densely the potential was
//! sampled. For example, the overlap `∫ sin²(x) dx` over `[0, 3π]` is
//! reproduced to within about 4×10⁻⁷ of 3π/2.
//!
//! The potential matrix element `∫ V(x) b(i, x) b(j, x) dx` is evaluated with
//! the trapezoidal rule directly over the sample coordinates, so the potential
//! is represented only within the sampled range and is effectively zero
//! outside it.
//!
//! Because the basis is not orthonormal over an arbitrary domain, the kinetic
//! weight *f*(*i*)² is not symmetric in *i* and *j*. It is evaluated on the
//! lower triangle (*i* ≥ *j*) and mirrored, which gives an exactly symmetric
//! matrix suitable for a dense symmetric eigensolver.
//!
//! # Ground state selection
//! In the reduced units used here, a non-positive eigenvalue does not
//! correspond to a physical ground state. The ground state is therefore the
//! eigenpair with the smallest *strictly positive* eigenvalue, and it is an
//! error for no such eigenvalue to exist. Scanning the eigenvalues in any order
//! while keeping a running best that is replaced unconditionally while
//! non-positive (and otherwise only by smaller positive values) gives the same
//! result as sorting first; both forms are available via
//! [`Selection`][crate::solve::Selection].
//!
//! # Units
//! With coordinates measured in units of a length *a* and energies in units of
//! *ε*, the kinetic constant becomes *c* = *ħ*²/(2*m a*² *ε*). See
//! [`Units::kinetic_scale`][crate::units::Units::kinetic_scale].
