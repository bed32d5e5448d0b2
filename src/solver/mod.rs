//! Solvers over standard-form equations.

pub mod linear;
pub mod system;

use std::fmt;

use crate::equation::StandardForm;
use crate::error::{EngineError, Result};
use crate::format::{grouped, number, solve_summary};
use crate::options::SolverOptions;
use crate::steps::StepTrace;

pub use linear::solve_standard_linear;
pub use system::{det2, det3, solve_standard_2x2, solve_standard_3x3};

#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    /// One value per unknown, in declaration order.
    Unique(Vec<f64>),
    Infinite,
    NoSolution,
    /// Vanishing 3×3 determinant reported without rank classification
    /// (`DegeneratePolicy::Legacy`).
    Singular,
    Error(EngineError),
}

impl SolveResult {
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            SolveResult::Unique(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SolveResult::Error(_))
    }
}

/// Result of one solve call together with the steps that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub variables: Vec<char>,
    pub result: SolveResult,
    pub steps: StepTrace,
}

impl Solution {
    /// Catch an error raised anywhere in the pipeline and keep it as a result value.
    pub(crate) fn from_outcome(
        variables: Vec<char>,
        outcome: Result<SolveResult>,
        steps: StepTrace,
    ) -> Self {
        let result = outcome.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "solve failed");
            SolveResult::Error(err)
        });
        Solution {
            variables,
            result,
            steps,
        }
    }

    /// Display line such as `x = 3.5` or `Sin solución`.
    pub fn summary(&self) -> String {
        solve_summary(&self.result, &self.variables)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Dispatch on the number of equations: one, two or three unknowns.
pub fn solve_standard(
    forms: &[StandardForm],
    options: &SolverOptions,
    steps: &mut StepTrace,
) -> Result<SolveResult> {
    let result = match forms.len() {
        1 => solve_standard_linear(&forms[0], steps)?,
        2 => solve_standard_2x2(forms, steps)?,
        3 => solve_standard_3x3(forms, options, steps)?,
        n => {
            return Err(EngineError::UnsupportedSystem(format!(
                "se admiten de 1 a 3 ecuaciones, se recibieron {n}"
            )));
        }
    };
    if let SolveResult::Unique(values) = &result {
        record_check(forms, values, steps);
    }
    Ok(result)
}

/// Substitute the solution back into every equation.
fn record_check(forms: &[StandardForm], values: &[f64], steps: &mut StepTrace) {
    for (i, form) in forms.iter().enumerate() {
        let substituted = form
            .coefficients()
            .iter()
            .zip(values)
            .map(|(c, v)| format!("{}·{}", number(*c), grouped(*v)))
            .collect::<Vec<_>>()
            .join(" + ");
        let label = if forms.len() == 1 {
            "Comprobación".to_string()
        } else {
            format!("Comprobación ecuación {}", i + 1)
        };
        steps.push(format!(
            "{label}: {substituted} = {} (lado derecho {})",
            number(form.lhs_at(values)),
            number(form.constant())
        ));
    }
}
