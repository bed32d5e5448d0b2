//! String entry points shared by the algebra and equation calculators.
//!
//! None of these functions return `Err`: parse and solve failures come back as
//! `SolveResult::Error` / `PolynomialResult::Error` alongside the steps recorded
//! up to the failure.

use crate::equation::StandardForm;
use crate::error::{EngineError, Result};
use crate::format::number;
use crate::options::SolverOptions;
use crate::parser::parse_number;
use crate::polynomial::{PolynomialOutcome, PolynomialResult, parse_polynomial};
use crate::solver::{Solution, SolveResult, solve_standard};
use crate::steps::StepTrace;

/// Solve a single linear equation in `var`.
pub fn solve_equation(input: &str, var: char) -> Solution {
    solve_equation_with(input, var, &SolverOptions::default())
}

pub fn solve_equation_with(input: &str, var: char, options: &SolverOptions) -> Solution {
    let var = var.to_ascii_lowercase();
    let mut steps = StepTrace::new();
    let outcome = StandardForm::parse(input, &[var], &mut steps)
        .and_then(|form| solve_standard(&[form], options, &mut steps));
    Solution::from_outcome(vec![var], outcome, steps)
}

/// Solve a 2×2 system in `x, y` or a 3×3 system in `x, y, z`, one equation per
/// entry.
pub fn solve_system(lines: &[&str]) -> Solution {
    solve_system_with(lines, &SolverOptions::default())
}

pub fn solve_system_with(lines: &[&str], options: &SolverOptions) -> Solution {
    let variables = match system_variables(lines.len()) {
        Ok(vars) => vars,
        Err(err) => return Solution::from_outcome(Vec::new(), Err(err), StepTrace::new()),
    };
    let mut steps = StepTrace::new();
    let outcome = parse_system(lines, &variables, &mut steps)
        .and_then(|forms| solve_standard(&forms, options, &mut steps));
    Solution::from_outcome(variables, outcome, steps)
}

/// Same as [`solve_system`] for a block of text with one equation per line;
/// blank lines are skipped.
pub fn solve_system_text(text: &str) -> Solution {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    solve_system(&lines)
}

fn system_variables(count: usize) -> Result<Vec<char>> {
    match count {
        2 => Ok(vec!['x', 'y']),
        3 => Ok(vec!['x', 'y', 'z']),
        n => Err(EngineError::UnsupportedSystem(format!(
            "se esperaban 2 o 3 ecuaciones y hay {n}"
        ))),
    }
}

fn parse_system(
    lines: &[&str],
    variables: &[char],
    steps: &mut StepTrace,
) -> Result<Vec<StandardForm>> {
    let mut forms = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        steps.push(format!("Ecuación {}: {}", i + 1, line.trim()));
        forms.push(StandardForm::parse(line, variables, steps)?);
    }
    Ok(forms)
}

/// Evaluate a polynomial in `x` at the number written in `point`.
pub fn evaluate_polynomial(polynomial: &str, point: &str) -> PolynomialOutcome {
    evaluate_polynomial_with(polynomial, point, &SolverOptions::default())
}

pub fn evaluate_polynomial_with(
    polynomial: &str,
    point: &str,
    options: &SolverOptions,
) -> PolynomialOutcome {
    let var = options.polynomial_variable;
    let mut steps = StepTrace::new();
    let outcome = parse_polynomial(polynomial, var).and_then(|poly| {
        let cleaned: String = point.chars().filter(|c| !c.is_whitespace()).collect();
        let x = parse_number(&cleaned)?;
        let value = poly.evaluate_traced(x, var, &mut steps);
        if !value.is_finite() {
            return Err(EngineError::NumericOverflow(format!(
                "P({}) no es un número finito",
                number(x)
            )));
        }
        Ok(PolynomialResult::Value { point: x, value })
    });
    PolynomialOutcome::from_outcome(var, outcome, steps)
}

/// Differentiate a polynomial in `x`.
pub fn differentiate_polynomial(polynomial: &str) -> PolynomialOutcome {
    differentiate_polynomial_with(polynomial, &SolverOptions::default())
}

pub fn differentiate_polynomial_with(
    polynomial: &str,
    options: &SolverOptions,
) -> PolynomialOutcome {
    let var = options.polynomial_variable;
    let mut steps = StepTrace::new();
    let outcome = parse_polynomial(polynomial, var).and_then(|poly| {
        poly.derivative_traced(var, &mut steps)
            .map(PolynomialResult::Derivative)
    });
    PolynomialOutcome::from_outcome(var, outcome, steps)
}

/// One request from either calculator surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Equation { input: String, variable: char },
    System(Vec<String>),
    Evaluate { polynomial: String, point: String },
    Derive { polynomial: String },
}

/// Rendered answer handed back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub result: String,
    pub steps: Vec<String>,
    pub failed: bool,
}

pub fn run(calculation: &Calculation, options: &SolverOptions) -> Report {
    tracing::debug!(?calculation, "running calculation");
    match calculation {
        Calculation::Equation { input, variable } => {
            solution_report(solve_equation_with(input, *variable, options))
        }
        Calculation::System(lines) => {
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            solution_report(solve_system_with(&lines, options))
        }
        Calculation::Evaluate { polynomial, point } => {
            polynomial_report(evaluate_polynomial_with(polynomial, point, options))
        }
        Calculation::Derive { polynomial } => {
            polynomial_report(differentiate_polynomial_with(polynomial, options))
        }
    }
}

fn solution_report(solution: Solution) -> Report {
    Report {
        result: solution.summary(),
        failed: matches!(solution.result, SolveResult::Error(_)),
        steps: solution.steps.into_vec(),
    }
}

fn polynomial_report(outcome: PolynomialOutcome) -> Report {
    Report {
        result: outcome.summary(),
        failed: matches!(outcome.result, PolynomialResult::Error(_)),
        steps: outcome.steps.into_vec(),
    }
}
