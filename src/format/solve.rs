use crate::solver::SolveResult;

use super::number;

/// Render a `SolveResult` as the single line the calculators display.
pub fn solve_summary(result: &SolveResult, variables: &[char]) -> String {
    match result {
        SolveResult::Unique(values) => variables
            .iter()
            .zip(values)
            .map(|(var, value)| format!("{var} = {}", number(*value)))
            .collect::<Vec<_>>()
            .join(", "),
        SolveResult::Infinite => "Infinitas soluciones".to_string(),
        SolveResult::NoSolution => "Sin solución".to_string(),
        SolveResult::Singular => "Sin solución única".to_string(),
        SolveResult::Error(err) => format!("Error: {err}"),
    }
}
