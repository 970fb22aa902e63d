//! Symmetric tridiagonal eigensolver
//!
//! Implicit QL iteration with Wilkinson shifts, the classical method for
//! the symmetric tridiagonal eigenproblem. Alongside the eigenvalues it
//! tracks the first component of every normalized eigenvector, which is
//! all the Golub-Welsch weight formula needs; full eigenvectors are never
//! materialised.

use crate::error::RuleError;
use crate::numeric::Precision;

/// Eigenvalues and eigenvector first components, in place.
///
/// # Arguments
/// * `d` - diagonal entries (length n); overwritten with the eigenvalues,
///   in no particular order
/// * `e` - off-diagonal buffer (length n + 1); the coupling between
///   `d[i]` and `d[i+1]` lives at `e[i+1]`. `e[0]` is neither read nor
///   written, and `e[n]` is used as rotation scratch. The off-diagonal
///   content is destroyed.
/// * `z` - output (length n); `z[i]` receives the first component of the
///   normalized eigenvector paired with `d[i]`
/// * `max_iter` - QL sweep budget per eigenvalue
///
/// An off-diagonal entry counts as negligible once
/// `|e[i+1]| <= eps * (|d[i]| + |d[i+1]|)` with the epsilon of the
/// working precision; the deflation test and the hypot/copysign shift
/// below are what make node and weight values reproducible across
/// precisions, so they are deliberately conservative transcriptions.
///
/// # Errors
/// [`RuleError::NoConvergence`] if some eigenvalue fails to deflate
/// within `max_iter` sweeps. The buffers are then in an unspecified
/// state. The 1x1 problem is trivial and never iterates.
///
/// # Panics
/// Panics if the slice lengths are inconsistent.
pub fn sym_tridiag_eig<T: Precision>(
    d: &mut [T],
    e: &mut [T],
    z: &mut [T],
    max_iter: usize,
) -> Result<(), RuleError> {
    let n = d.len();
    assert_eq!(e.len(), n + 1, "off-diagonal buffer must have length n + 1");
    assert_eq!(z.len(), n, "eigenvector buffer must have length n");

    for zi in z.iter_mut() {
        *zi = T::zero();
    }
    z[0] = T::one();
    if n == 1 {
        return Ok(());
    }

    let eps = T::epsilon();
    let two = T::from_f64(2.0);
    e[n] = T::zero();

    for l in 0..n {
        let mut iter = 0;
        loop {
            // Find the first negligible off-diagonal at or below l; the
            // active block is then d[l..=m].
            let mut m = n - 1;
            for i in l..n - 1 {
                if e[i + 1].abs() <= eps * (d[i].abs() + d[i + 1].abs()) {
                    m = i;
                    break;
                }
            }
            let mut p = d[l];
            if m == l {
                break; // eigenvalue l has deflated
            }
            if iter == max_iter {
                return Err(RuleError::NoConvergence { max_iter });
            }
            iter += 1;

            // Wilkinson shift from the leading 2x2 of the block
            let mut g = (d[l + 1] - p) / (two * e[l + 1]);
            let mut r = g.hypot(T::one());
            g = d[m] - p + e[l + 1] / (g + r.copysign(g));
            let mut s = T::one();
            let mut c = T::one();
            p = T::zero();

            // Plane rotations from the bottom of the block back up to l
            for i in (l..m).rev() {
                let mut f = s * e[i + 1];
                let b = c * e[i + 1];
                if f.abs() < g.abs() {
                    s = f / g;
                    r = (s * s + T::one()).sqrt();
                    e[i + 2] = g * r;
                    c = T::one() / r;
                    s = s * c;
                } else {
                    c = g / f;
                    r = (c * c + T::one()).sqrt();
                    e[i + 2] = f * r;
                    s = T::one() / r;
                    c = c * s;
                }
                g = d[i + 1] - p;
                r = (d[i] - g) * s + two * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                // carry the first eigenvector component along
                f = z[i + 1];
                z[i + 1] = s * z[i] + c * f;
                z[i] = c * z[i] - s * f;
            }
            d[l] = d[l] - p;
            e[l + 1] = g;
            e[m + 1] = T::zero();
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "eigen_tests.rs"]
mod tests;
