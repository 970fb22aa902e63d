//! # gaussquad-rust: Gauss-type quadrature rules
//!
//! Computes the nodes and weights of Gauss, Gauss-Radau and Gauss-Lobatto
//! quadrature rules for the Legendre weight function on a finite interval.
//!
//! The integral of f(x) over [-1, 1] is approximated by a weighted sum:
//!
//! sum(f(xi) * wi for (xi, wi) in zip(x, w))
//!
//! where an n-point Gauss rule is exact for polynomials up to degree 2n-1.
//! The Radau variants pin one interval endpoint among the nodes and the
//! Lobatto variant pins both, which is what nodal spectral methods need.
//!
//! Nodes and weights are obtained by the Golub-Welsch algorithm: the
//! three-term recurrence coefficients of the monic Legendre polynomials
//! form a symmetric tridiagonal Jacobi matrix whose eigenvalues are the
//! nodes and whose eigenvector first components give the weights. Endpoint
//! pinning modifies the last recurrence coefficients through a shifted
//! tridiagonal solve before the eigen-decomposition.
//!
//! All computation is generic over the scalar type: `f32`, `f64` and the
//! double-double [`TwoFloat`] are supported out of the box.
//!
//! ```
//! use gaussquad_rust::{legendre, EndPoint};
//!
//! let rule = legendre::<f64>(5, EndPoint::Neither).unwrap();
//! let integral = rule.integrate(|x| x * x);
//! assert!((integral - 2.0 / 3.0).abs() < 1e-14);
//! ```

pub mod eigen;
pub mod error;
pub mod numeric;
pub mod recurrence;
pub mod rule;

pub use eigen::sym_tridiag_eig;
pub use error::{RuleError, RuleResult};
pub use numeric::Precision;
pub use recurrence::Recurrence;
pub use rule::{custom_rule, legendre, legendre_f64, lobatto, lobatto_f64, EndPoint, Rule};

// Re-export the extended-precision scalar for convenience
pub use twofloat::TwoFloat;
