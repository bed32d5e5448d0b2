use std::fmt;

use crate::error::{EngineError, Result};
use crate::format::{linear_combination, number};
use crate::steps::StepTrace;

use super::normalize::{normalize_equation, split_terms};
use super::term::Term;

/// Accumulated coefficients of one equation side: one slot per declared
/// unknown plus the constant slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMap {
    variables: Vec<char>,
    coefficients: Vec<f64>,
    constant: f64,
}

impl CoefficientMap {
    pub fn new(variables: &[char]) -> Self {
        Self {
            variables: variables.to_vec(),
            coefficients: vec![0.0; variables.len()],
            constant: 0.0,
        }
    }

    /// Tokenize `side` and sum every term into its slot.
    pub fn from_side(side: &str, variables: &[char]) -> Result<Self> {
        let mut map = Self::new(variables);
        for raw in split_terms(side) {
            let term = Term::parse(&raw)?;
            map.accumulate(&term)?;
        }
        Ok(map)
    }

    fn accumulate(&mut self, term: &Term) -> Result<()> {
        let Some(var) = term.variable else {
            self.constant += term.value();
            return Ok(());
        };
        let idx = self
            .variables
            .iter()
            .position(|v| *v == var)
            .ok_or_else(|| EngineError::UnknownSymbol {
                symbol: var,
                expected: symbol_list(&self.variables),
            })?;
        self.coefficients[idx] += term.value();
        Ok(())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

fn symbol_list(variables: &[char]) -> String {
    variables
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `a·x [+ b·y [+ c·z]] = d`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm {
    variables: Vec<char>,
    coefficients: Vec<f64>,
    constant: f64,
}

impl StandardForm {
    pub fn new(variables: &[char], coefficients: Vec<f64>, constant: f64) -> Self {
        debug_assert_eq!(variables.len(), coefficients.len());
        Self {
            variables: variables.to_vec(),
            coefficients,
            constant,
        }
    }

    /// Move unknowns to the left and constants to the right.
    pub fn fold(left: &CoefficientMap, right: &CoefficientMap) -> Self {
        let coefficients = left
            .coefficients
            .iter()
            .zip(right.coefficients.iter())
            .map(|(l, r)| l - r)
            .collect();
        Self {
            variables: left.variables.clone(),
            coefficients,
            constant: right.constant - left.constant,
        }
    }

    /// Run an equation string through the normalizer, the term splitter and the
    /// fold, recording each stage.
    pub fn parse(raw: &str, variables: &[char], steps: &mut StepTrace) -> Result<Self> {
        let (left, right) = normalize_equation(raw)?;
        steps.push(format!("Ecuación normalizada: {left} = {right}"));

        let left_terms = CoefficientMap::from_side(&left, variables)?;
        let right_terms = CoefficientMap::from_side(&right, variables)?;
        let form = Self::fold(&left_terms, &right_terms);
        if !form.is_finite() {
            return Err(EngineError::NumericOverflow(format!(
                "los coeficientes de '{left} = {right}' exceden el rango"
            )));
        }
        tracing::debug!(input = raw, form = %form, "folded equation");

        steps.push(format!(
            "Agrupar incógnitas a la izquierda y constantes a la derecha: {form}"
        ));
        Ok(form)
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    fn is_finite(&self) -> bool {
        self.constant.is_finite() && self.coefficients.iter().all(|c| c.is_finite())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn coefficient(&self, idx: usize) -> f64 {
        self.coefficients[idx]
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Value of the left-hand side at `values`.
    pub fn lhs_at(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| c * v)
            .sum()
    }
}

impl fmt::Display for StandardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            linear_combination(&self.coefficients, &self.variables),
            number(self.constant)
        )
    }
}
