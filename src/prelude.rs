//! String-based convenience API for the calculator surfaces.

pub use crate::calculator::{
    Calculation, Report, differentiate_polynomial, evaluate_polynomial, run, solve_equation,
    solve_system, solve_system_text,
};
pub use crate::options::SolverOptions;
pub use crate::solver::SolveResult;
