//! Equation and polynomial engine behind the algebra and equation calculators: parses
//! free-text linear equations and polynomials, solves 1-, 2- and 3-unknown linear
//! systems, and evaluates or differentiates polynomials, recording each step.

pub mod calculator;
pub mod equation;
pub mod error;
pub mod format;
pub mod options;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod solver;
pub mod steps;

pub use calculator::{
    Calculation, Report, differentiate_polynomial, differentiate_polynomial_with,
    evaluate_polynomial, evaluate_polynomial_with, run, solve_equation, solve_equation_with,
    solve_system, solve_system_text, solve_system_with,
};
pub use equation::{
    CoefficientMap, Magnitude, Sign, StandardForm, Term, extract_coefficient, normalize_equation,
    split_terms,
};
pub use error::{EngineError, Result};
pub use options::{DegeneratePolicy, SolverOptions};
pub use polynomial::{Polynomial, PolynomialOutcome, PolynomialResult, parse_polynomial};
pub use solver::{Solution, SolveResult};
pub use steps::StepTrace;
