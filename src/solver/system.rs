//! Cramer's rule for 2×2 and 3×3 systems.

use crate::equation::StandardForm;
use crate::error::{EngineError, Result};
use crate::format::{grouped, number};
use crate::options::{DegeneratePolicy, SolverOptions};
use crate::steps::StepTrace;

use super::SolveResult;

pub fn det2(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a1 * b2 - a2 * b1
}

/// Determinant of the matrix whose columns are `a`, `b` and `c`, expanded
/// along the first column.
pub fn det3(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0])
}

pub fn solve_standard_2x2(eqs: &[StandardForm], steps: &mut StepTrace) -> Result<SolveResult> {
    let [first, second] = eqs else {
        return Err(EngineError::UnsupportedSystem(format!(
            "se esperaban 2 ecuaciones y hay {}",
            eqs.len()
        )));
    };
    let (a1, b1, c1) = (first.coefficient(0), first.coefficient(1), first.constant());
    let (a2, b2, c2) = (second.coefficient(0), second.coefficient(1), second.constant());

    let det = det2(a1, b1, a2, b2);
    steps.push(format!(
        "D = a1·b2 − a2·b1 = {}·{} − {}·{} = {}",
        grouped(a1),
        grouped(b2),
        grouped(a2),
        grouped(b1),
        number(det)
    ));

    if det != 0.0 {
        let dx = det2(c1, b1, c2, b2);
        let dy = det2(a1, c1, a2, c2);
        steps.push(format!("Dx = c1·b2 − c2·b1 = {}", number(dx)));
        steps.push(format!("Dy = a1·c2 − a2·c1 = {}", number(dy)));
        let (x, y) = (dx / det, dy / det);
        if !x.is_finite() || !y.is_finite() {
            return Err(EngineError::DivisionByZero);
        }
        steps.push(format!(
            "x = Dx / D = {} / {} = {}",
            number(dx),
            grouped(det),
            number(x)
        ));
        steps.push(format!(
            "y = Dy / D = {} / {} = {}",
            number(dy),
            grouped(det),
            number(y)
        ));
        tracing::debug!(det, x, y, "unique 2x2 solution");
        return Ok(SolveResult::Unique(vec![x, y]));
    }

    // A row reading 0 = c with c ≠ 0 can never hold, whatever the other row says.
    for (i, eq) in eqs.iter().enumerate() {
        if eq.coefficients().iter().all(|c| *c == 0.0) && eq.constant() != 0.0 {
            steps.push(format!(
                "La ecuación {} se reduce a 0 = {}: contradicción",
                i + 1,
                number(eq.constant())
            ));
            return Ok(SolveResult::NoSolution);
        }
    }

    steps.push("D = 0: se comparan las ecuaciones con productos cruzados".to_string());
    let proportional = a1 * c2 == a2 * c1 && b1 * c2 == b2 * c1;
    tracing::debug!(proportional, "singular 2x2 system");
    if proportional {
        steps.push("Las ecuaciones son proporcionales: infinitas soluciones".to_string());
        Ok(SolveResult::Infinite)
    } else {
        steps.push(
            "Los coeficientes son proporcionales pero las constantes no: sin solución".to_string(),
        );
        Ok(SolveResult::NoSolution)
    }
}

pub fn solve_standard_3x3(
    eqs: &[StandardForm],
    options: &SolverOptions,
    steps: &mut StepTrace,
) -> Result<SolveResult> {
    if eqs.len() != 3 {
        return Err(EngineError::UnsupportedSystem(format!(
            "se esperaban 3 ecuaciones y hay {}",
            eqs.len()
        )));
    }
    let column = |idx: usize| {
        [
            eqs[0].coefficient(idx),
            eqs[1].coefficient(idx),
            eqs[2].coefficient(idx),
        ]
    };
    let (a, b, c) = (column(0), column(1), column(2));
    let d = [eqs[0].constant(), eqs[1].constant(), eqs[2].constant()];

    let det = det3(a, b, c);
    steps.push(format!(
        "D = a1(b2c3−b3c2) − a2(b1c3−b3c1) + a3(b1c2−b2c1) = {}",
        number(det)
    ));

    if options.is_zero(det) {
        steps.push(format!(
            "|D| < {}: el determinante se considera nulo",
            number(options.zero_tolerance)
        ));
        return classify_singular(eqs, options, steps);
    }

    let dx = det3(d, b, c);
    let dy = det3(a, d, c);
    let dz = det3(a, b, d);
    steps.push(format!(
        "Dx = {}, Dy = {}, Dz = {}",
        number(dx),
        number(dy),
        number(dz)
    ));

    let values = [dx / det, dy / det, dz / det];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(EngineError::DivisionByZero);
    }
    let numerators = [dx, dy, dz];
    for (name, (numerator, value)) in ['x', 'y', 'z'].iter().zip(numerators.iter().zip(values)) {
        steps.push(format!(
            "{name} = D{name} / D = {} / {} = {}",
            number(*numerator),
            grouped(det),
            number(value)
        ));
    }
    tracing::debug!(det, ?values, "unique 3x3 solution");
    Ok(SolveResult::Unique(values.to_vec()))
}

fn classify_singular(
    eqs: &[StandardForm],
    options: &SolverOptions,
    steps: &mut StepTrace,
) -> Result<SolveResult> {
    if options.degenerate_policy == DegeneratePolicy::Legacy {
        tracing::debug!("singular 3x3 system left unclassified");
        return Ok(SolveResult::Singular);
    }

    let mut matrix = Matrix::augmented(eqs);
    let n_vars = matrix.cols - 1;
    let report = rref(&mut matrix, n_vars, options.zero_tolerance);
    tracing::debug!(rank = report.rank, inconsistent = ?report.inconsistent_row, "rank check");

    if report.inconsistent_row.is_some() {
        steps.push(format!(
            "rango(A) = {} < rango(A|b) = {}: sistema incompatible",
            report.rank,
            report.rank + 1
        ));
        return Ok(SolveResult::NoSolution);
    }
    if report.rank < n_vars {
        steps.push(format!(
            "rango(A) = rango(A|b) = {} < {n_vars}: infinitas soluciones",
            report.rank
        ));
        return Ok(SolveResult::Infinite);
    }

    // Full rank: row i of the reduced matrix reads v_i = b_i.
    let values: Vec<f64> = (0..n_vars).map(|r| matrix.get(r, n_vars)).collect();
    if values.iter().any(|v| !v.is_finite()) {
        return Err(EngineError::DivisionByZero);
    }
    steps.push(format!(
        "rango(A) = rango(A|b) = {n_vars}: solución única por reducción de filas"
    ));
    for (name, value) in ['x', 'y', 'z'].iter().zip(&values) {
        steps.push(format!("{name} = {}", number(*value)));
    }
    tracing::debug!(?values, "unique 3x3 solution from row reduction");
    Ok(SolveResult::Unique(values))
}

struct RankReport {
    rank: usize,
    inconsistent_row: Option<usize>,
}

/// Gauss-Jordan elimination with partial pivoting over the first `n_vars`
/// columns. Entries with magnitude below `tolerance` count as zero.
fn rref(matrix: &mut Matrix, n_vars: usize, tolerance: f64) -> RankReport {
    let rows = matrix.rows;
    let cols = matrix.cols;
    let mut row = 0;
    for col in 0..n_vars {
        if row >= rows {
            break;
        }

        let mut pivot_row = None;
        let mut pivot_abs = tolerance;
        for r in row..rows {
            let value = matrix.get(r, col).abs();
            if value > pivot_abs {
                pivot_abs = value;
                pivot_row = Some(r);
            }
        }

        let Some(pivot_idx) = pivot_row else {
            continue;
        };
        matrix.swap_rows(row, pivot_idx);

        let pivot_value = matrix.get(row, col);
        for c in col..cols {
            *matrix.get_mut(row, c) /= pivot_value;
        }

        for r in 0..rows {
            if r == row {
                continue;
            }
            let factor = matrix.get(r, col);
            if factor == 0.0 {
                continue;
            }
            for c in col..cols {
                let delta = factor * matrix.get(row, c);
                *matrix.get_mut(r, c) -= delta;
            }
        }
        row += 1;
    }

    let inconsistent_row = (row..rows).find(|&r| {
        let slice = matrix.row(r);
        slice[..n_vars].iter().all(|v| v.abs() < tolerance) && slice[n_vars].abs() >= tolerance
    });

    RankReport {
        rank: row,
        inconsistent_row,
    }
}

struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn augmented(eqs: &[StandardForm]) -> Self {
        let n_vars = eqs.first().map_or(0, |eq| eq.coefficients().len());
        let cols = n_vars + 1;
        let mut data = Vec::with_capacity(eqs.len() * cols);
        for eq in eqs {
            data.extend_from_slice(eq.coefficients());
            data.push(eq.constant());
        }
        Matrix {
            rows: eqs.len(),
            cols,
            data,
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.idx(row, col)]
    }

    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        for offset in 0..cols {
            self.data.swap(a * cols + offset, b * cols + offset);
        }
    }

    fn row(&self, row: usize) -> &[f64] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(coeffs: &[f64], constant: f64) -> StandardForm {
        let vars = ['x', 'y', 'z'];
        StandardForm::new(&vars[..coeffs.len()], coeffs.to_vec(), constant)
    }

    #[test]
    fn det3_matches_cofactor_expansion() {
        // columns of [[1,1,1],[2,-1,1],[1,2,-1]]
        let det = det3([1.0, 2.0, 1.0], [1.0, -1.0, 2.0], [1.0, 1.0, -1.0]);
        assert_eq!(det, 7.0);
    }

    #[test]
    fn rref_detects_inconsistent_rows() {
        let eqs = [
            form(&[1.0, 1.0, 1.0], 1.0),
            form(&[2.0, 2.0, 2.0], 3.0),
            form(&[0.0, 1.0, -1.0], 0.0),
        ];
        let mut matrix = Matrix::augmented(&eqs);
        let report = rref(&mut matrix, 3, 1e-10);
        assert_eq!(report.rank, 2);
        assert!(report.inconsistent_row.is_some());
    }

    #[test]
    fn rref_rank_of_dependent_rows() {
        let eqs = [
            form(&[1.0, 1.0, 1.0], 1.0),
            form(&[2.0, 2.0, 2.0], 2.0),
            form(&[3.0, 3.0, 3.0], 3.0),
        ];
        let mut matrix = Matrix::augmented(&eqs);
        let report = rref(&mut matrix, 3, 1e-10);
        assert_eq!(report.rank, 1);
        assert!(report.inconsistent_row.is_none());
    }

    #[test]
    fn rref_full_rank_leaves_solution_column() {
        let eqs = [
            form(&[0.0001, 0.0, 0.0], 1.0),
            form(&[0.0, 0.0001, 0.0], 2.0),
            form(&[0.0, 0.0, 0.0001], 3.0),
        ];
        let mut matrix = Matrix::augmented(&eqs);
        let report = rref(&mut matrix, 3, 1e-10);
        assert_eq!(report.rank, 3);
        assert!(report.inconsistent_row.is_none());
        assert!((matrix.get(2, 3) - 30000.0).abs() < 1e-6);
    }

    #[test]
    fn wrong_equation_count_is_rejected() {
        let mut steps = StepTrace::new();
        let eqs = [form(&[1.0, 1.0], 2.0)];
        assert!(matches!(
            solve_standard_2x2(&eqs, &mut steps),
            Err(EngineError::UnsupportedSystem(_))
        ));
    }
}
