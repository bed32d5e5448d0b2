//! Solver configuration.

/// How a 3×3 system with a vanishing determinant is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Row-reduce the augmented matrix and compare ranks to tell
    /// `Infinite` apart from `NoSolution`.
    #[default]
    RankCheck,
    /// Report `SolveResult::Singular` without classifying further.
    Legacy,
}

/// Knobs shared by every solve entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Magnitude below which a 3×3 determinant or a pivot counts as zero.
    pub zero_tolerance: f64,
    pub degenerate_policy: DegeneratePolicy,
    /// Symbol used by the polynomial parser and renderer.
    pub polynomial_variable: char,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            zero_tolerance: 1e-10,
            degenerate_policy: DegeneratePolicy::RankCheck,
            polynomial_variable: 'x',
        }
    }
}

impl SolverOptions {
    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = tolerance.abs();
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn with_polynomial_variable(mut self, var: char) -> Self {
        self.polynomial_variable = var.to_ascii_lowercase();
        self
    }

    pub(crate) fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.zero_tolerance
    }
}
