//! Error types for quadrature-rule generation.

/// Result type for rule-generation operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while generating a quadrature rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The requested number of points is below the minimum for the
    /// endpoint variant: 1 in general, 2 when both endpoints are pinned.
    #[error("rule order {n} is too small: need at least {min} point(s)")]
    OrderTooSmall { n: usize, min: usize },

    /// An eigenvalue failed to deflate within the iteration budget. The
    /// caller may retry with a larger budget; nothing is retried
    /// internally and the input buffers are left in an unspecified state.
    #[error("QL iteration did not converge within {max_iter} iterations")]
    NoConvergence { max_iter: usize },
}
