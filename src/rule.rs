//! Quadrature rules for numerical integration
//!
//! This module composes the recurrence coefficients, the endpoint
//! adjustment and the eigensolver into finished rules. The integral of
//! f(x) against the weight function is approximated by a weighted sum:
//!
//! sum(f(xi) * wi for (xi, wi) in zip(x, w))
//!
//! with superexponential convergence for smooth f(x) in the number of
//! quadrature points.

use crate::eigen::sym_tridiag_eig;
use crate::error::{RuleError, RuleResult};
use crate::numeric::Precision;
use crate::recurrence::Recurrence;

/// Which interval endpoints are forced to appear among the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndPoint {
    /// Interior Gauss rule; all nodes strictly inside the interval.
    #[default]
    Neither,
    /// Gauss-Radau rule pinning the lower bound.
    Left,
    /// Gauss-Radau rule pinning the upper bound.
    Right,
    /// Gauss-Lobatto rule pinning both bounds; needs at least two points.
    Both,
}

/// Quadrature rule for numerical integration.
///
/// Contains nodes `x` in strictly ascending order, the positionally
/// paired weights `w`, and the integration interval `[a, b]`.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    /// Quadrature points
    pub x: Vec<T>,
    /// Quadrature weights
    pub w: Vec<T>,
    /// Left endpoint of the integration interval
    pub a: T,
    /// Right endpoint of the integration interval
    pub b: T,
}

impl<T: Precision> Rule<T> {
    /// Create a rule from points and weights.
    ///
    /// # Panics
    /// Panics if `x` and `w` have different lengths.
    pub fn new(x: Vec<T>, w: Vec<T>, a: T, b: T) -> Self {
        assert_eq!(x.len(), w.len(), "x and w must have the same length");
        Self { x, w, a, b }
    }

    /// Number of quadrature points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the rule has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Approximate the integral of `f` over `[a, b]` by the weighted sum.
    pub fn integrate<F>(&self, f: F) -> T
    where
        F: Fn(T) -> T,
    {
        let mut acc = T::zero();
        for (&xi, &wi) in self.x.iter().zip(&self.w) {
            acc = acc + wi * f(xi);
        }
        acc
    }

    /// Reseat the rule onto a new interval [a, b].
    ///
    /// Scales and translates the points and weights; the weight sum is
    /// multiplied by the ratio of the interval lengths.
    pub fn reseat(&self, a: T, b: T) -> Self {
        let scaling = (b - a) / (self.b - self.a);
        let half = T::from_f64(0.5);
        let midpoint_old = (self.b + self.a) * half;
        let midpoint_new = (b + a) * half;

        let x: Vec<T> = self
            .x
            .iter()
            .map(|&xi| scaling * (xi - midpoint_old) + midpoint_new)
            .collect();
        let w: Vec<T> = self.w.iter().map(|&wi| wi * scaling).collect();

        Self { x, w, a, b }
    }

    /// Validate the rule for consistency.
    ///
    /// Checks interval sanity, matching lengths, and that the points are
    /// strictly ascending and inside `[a, b]`.
    pub fn validate(&self) -> bool {
        if self.a >= self.b {
            return false;
        }
        if self.x.len() != self.w.len() {
            return false;
        }
        for &xi in self.x.iter() {
            if xi < self.a || xi > self.b {
                return false;
            }
        }
        for i in 1..self.x.len() {
            if self.x[i] <= self.x[i - 1] {
                return false;
            }
        }
        true
    }
}

/// Generate a rule from explicit recurrence coefficients.
///
/// Takes ownership of the coefficient buffers and overwrites them: the
/// endpoint adjustment rewrites the last entries, the eigensolver turns
/// the diagonal into nodes, and the eigenvector components become the
/// weights through `w[i] = (b[0] * z[i])^2`. Nodes come out sorted
/// ascending with the weights permuted alongside, and pinned endpoints
/// are snapped to exactly `lo` / `hi`.
///
/// # Arguments
/// * `lo`, `hi` - interval bounds the recurrence was constructed for
/// * `rec` - recurrence coefficients (consumed)
/// * `endpt` - which bounds must appear among the nodes
/// * `max_iter` - eigensolver iteration budget per eigenvalue
///
/// # Errors
/// [`RuleError::OrderTooSmall`] for n < 1, or n < 2 with
/// [`EndPoint::Both`]; [`RuleError::NoConvergence`] if the eigensolver
/// exhausts its budget.
///
/// # Panics
/// Panics if `rec.b` does not have exactly `rec.n() + 1` entries.
pub fn custom_rule<T: Precision>(
    lo: T,
    hi: T,
    rec: Recurrence<T>,
    endpt: EndPoint,
    max_iter: usize,
) -> RuleResult<Rule<T>> {
    let n = rec.n();
    let min = if endpt == EndPoint::Both { 2 } else { 1 };
    if n < min {
        return Err(RuleError::OrderTooSmall { n, min });
    }
    assert_eq!(rec.b.len(), n + 1, "recurrence needs n + 1 b-slots");

    let mut rec = rec;
    match endpt {
        EndPoint::Neither => {}
        EndPoint::Left => {
            if n == 1 {
                rec.a[0] = lo;
            } else {
                let g = rec.shifted_solve(lo);
                rec.a[n - 1] = g * rec.b[n - 1] * rec.b[n - 1] + lo;
            }
        }
        EndPoint::Right => {
            if n == 1 {
                rec.a[0] = hi;
            } else {
                let g = rec.shifted_solve(hi);
                rec.a[n - 1] = g * rec.b[n - 1] * rec.b[n - 1] + hi;
            }
        }
        EndPoint::Both => {
            // one solve per bound pins both as eigenvalues at once
            let g = rec.shifted_solve(lo);
            let t = (hi - lo) / (g - rec.shifted_solve(hi));
            rec.b[n - 1] = t.sqrt();
            rec.a[n - 1] = lo + g * t;
        }
    }

    let Recurrence { mut a, mut b } = rec;
    let mut z = vec![T::zero(); n];
    sym_tridiag_eig(&mut a, &mut b, &mut z, max_iter)?;

    // Golub-Welsch: weight = (sqrt(mass) * first eigenvector component)^2
    for zi in z.iter_mut() {
        let f = b[0] * *zi;
        *zi = f * f;
    }

    let mut idx: Vec<usize> = (0..n).collect();
    idx.sort_by(|&i, &j| a[i].partial_cmp(&a[j]).unwrap());
    let mut x: Vec<T> = idx.iter().map(|&i| a[i]).collect();
    let w: Vec<T> = idx.iter().map(|&i| z[i]).collect();

    if matches!(endpt, EndPoint::Left | EndPoint::Both) {
        x[0] = lo;
    }
    if matches!(endpt, EndPoint::Right | EndPoint::Both) {
        x[n - 1] = hi;
    }

    Ok(Rule::new(x, w, lo, hi))
}

/// Generate an n-point rule for the Legendre weight on [-1, 1].
///
/// The principal entry point: `EndPoint::Neither` (the default variant)
/// gives the interior Gauss rule, `Left`/`Right` the Radau rules and
/// `Both` the Lobatto rule. Uses the default iteration budget of the
/// scalar type.
///
/// # Example
///
/// ```
/// use gaussquad_rust::{legendre, EndPoint};
///
/// let rule = legendre::<f64>(3, EndPoint::default()).unwrap();
/// let total: f64 = rule.w.iter().sum();
/// assert!((total - 2.0).abs() < 1e-14);
/// ```
pub fn legendre<T: Precision>(n: usize, endpt: EndPoint) -> RuleResult<Rule<T>> {
    custom_rule(
        T::from_f64(-1.0),
        T::from_f64(1.0),
        Recurrence::legendre(n),
        endpt,
        T::max_iterations(),
    )
}

/// Generate the n-point Gauss-Lobatto rule on [-1, 1].
///
/// Equivalent to [`legendre`] with [`EndPoint::Both`]; needs n >= 2.
pub fn lobatto<T: Precision>(n: usize) -> RuleResult<Rule<T>> {
    legendre(n, EndPoint::Both)
}

/// [`legendre`] fixed to double precision.
pub fn legendre_f64(n: usize, endpt: EndPoint) -> RuleResult<Rule<f64>> {
    legendre(n, endpt)
}

/// [`lobatto`] fixed to double precision.
pub fn lobatto_f64(n: usize) -> RuleResult<Rule<f64>> {
    lobatto(n)
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
