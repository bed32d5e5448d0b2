use crate::equation::StandardForm;
use crate::error::{EngineError, Result};
use crate::format::{grouped, number};
use crate::steps::StepTrace;

use super::SolveResult;

/// Classify and solve `a·v = b`.
pub fn solve_standard_linear(form: &StandardForm, steps: &mut StepTrace) -> Result<SolveResult> {
    let var = form.variables()[0];
    let a = form.coefficient(0);
    let b = form.constant();

    if a != 0.0 {
        let value = b / a;
        if !value.is_finite() {
            return Err(EngineError::DivisionByZero);
        }
        steps.push(format!(
            "Dividir ambos lados entre {}: {var} = {} / {}",
            number(a),
            number(b),
            grouped(a)
        ));
        steps.push(format!("{var} = {}", number(value)));
        tracing::debug!(%var, value, "unique linear solution");
        return Ok(SolveResult::Unique(vec![value]));
    }

    if b == 0.0 {
        steps.push(format!(
            "El coeficiente de {var} es 0 y el término independiente es 0: la igualdad se cumple para todo {var}"
        ));
        tracing::debug!(%var, "identity");
        Ok(SolveResult::Infinite)
    } else {
        steps.push(format!(
            "El coeficiente de {var} es 0 pero 0 ≠ {}: contradicción",
            number(b)
        ));
        tracing::debug!(%var, constant = b, "contradiction");
        Ok(SolveResult::NoSolution)
    }
}
