//! Single-variable polynomials as a power → coefficient map.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use num_traits::{ToPrimitive, Zero};

use crate::error::{EngineError, Result};
use crate::format::{self, grouped, number};
use crate::parser::parse_polynomial_terms;
use crate::steps::StepTrace;

/// Coefficients keyed by power. Zero coefficients are never stored, so two
/// polynomials compare equal exactly when they have the same non-zero terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    pub(crate) coeffs: BTreeMap<u32, f64>,
}

/// Outcome of an evaluate or derive request.
#[derive(Clone, Debug, PartialEq)]
pub enum PolynomialResult {
    Value { point: f64, value: f64 },
    Derivative(Polynomial),
    Error(EngineError),
}

/// Result of one polynomial request together with its steps.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialOutcome {
    pub variable: char,
    pub result: PolynomialResult,
    pub steps: StepTrace,
}

impl PolynomialOutcome {
    pub(crate) fn from_outcome(
        variable: char,
        outcome: Result<PolynomialResult>,
        steps: StepTrace,
    ) -> Self {
        let result = outcome.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "polynomial request failed");
            PolynomialResult::Error(err)
        });
        PolynomialOutcome {
            variable,
            result,
            steps,
        }
    }

    /// Display line such as `P(2) = 17`.
    pub fn summary(&self) -> String {
        format::polynomial_summary(&self.result, self.variable)
    }
}

/// Parse `input` as a polynomial in `var`. Whitespace is ignored and letters are
/// lower-cased before tokenizing.
pub fn parse_polynomial(input: &str, var: char) -> Result<Polynomial> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.is_empty() {
        return Err(EngineError::InvalidPolynomial("entrada vacía".to_string()));
    }
    let poly = parse_polynomial_terms(&cleaned, var.to_ascii_lowercase())?;
    if !poly.is_finite() {
        return Err(EngineError::NumericOverflow(
            "la suma de coeficientes excede el rango".to_string(),
        ));
    }
    tracing::debug!(input, degree = ?poly.degree(), "parsed polynomial");
    Ok(poly)
}

impl Polynomial {
    pub fn zero() -> Self {
        Polynomial {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn monomial(coeff: f64, power: u32) -> Self {
        let mut coeffs = BTreeMap::new();
        if !Zero::is_zero(&coeff) {
            coeffs.insert(power, coeff);
        }
        Polynomial { coeffs }
    }

    /// Build from `(power, coeff)` pairs, summing repeated powers.
    pub fn from_terms(terms: impl IntoIterator<Item = (u32, f64)>) -> Self {
        terms
            .into_iter()
            .fold(Polynomial::zero(), |acc, (power, coeff)| {
                acc + Polynomial::monomial(coeff, power)
            })
    }

    pub fn degree(&self) -> Option<u32> {
        self.coeffs.keys().next_back().copied()
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_finite(&self) -> bool {
        self.coeffs.values().all(|c| c.is_finite())
    }

    pub fn coeff(&self, power: u32) -> f64 {
        self.coeffs.get(&power).copied().unwrap_or(0.0)
    }

    pub fn terms_descending(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.coeffs.iter().rev().map(|(p, c)| (*p, *c))
    }

    pub fn scale(&self, k: f64) -> Self {
        Polynomial::from_terms(self.coeffs.iter().map(|(p, c)| (*p, c * k)))
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms_descending()
            .map(|(power, coeff)| coeff * power_of(x, power))
            .sum()
    }

    /// Evaluate at `x`, recording the contribution of each term.
    pub fn evaluate_traced(&self, x: f64, var: char, steps: &mut StepTrace) -> f64 {
        steps.push(format!("P({var}) = {}", self.render(var)));
        steps.push(format!("Sustituir {var} = {}", number(x)));

        let mut total = 0.0;
        let mut parts = Vec::with_capacity(self.coeffs.len());
        for (power, coeff) in self.terms_descending() {
            let contribution = coeff * power_of(x, power);
            let step = if power == 0 {
                format!("Término independiente: {}", number(coeff))
            } else {
                format!(
                    "{}·{}^{power} = {}",
                    number(coeff),
                    grouped(x),
                    number(contribution)
                )
            };
            steps.push(step);
            parts.push(grouped(contribution));
            total += contribution;
        }

        if parts.is_empty() {
            steps.push("El polinomio es nulo".to_string());
        } else {
            steps.push(format!("Sumar: {} = {}", parts.join(" + "), number(total)));
        }
        total
    }

    /// Power rule applied term by term.
    pub fn derivative(&self) -> Self {
        let mut coeffs = BTreeMap::new();
        for (power, coeff) in &self.coeffs {
            if *power == 0 {
                continue;
            }
            let scaled = coeff * f64::from(*power);
            if !Zero::is_zero(&scaled) {
                coeffs.insert(power - 1, scaled);
            }
        }
        Polynomial { coeffs }
    }

    /// Derivative with one step per differentiated term. Fails when a scaled
    /// coefficient overflows.
    pub fn derivative_traced(&self, var: char, steps: &mut StepTrace) -> Result<Self> {
        let result = self.derivative();
        if !result.is_finite() {
            return Err(EngineError::NumericOverflow(format!(
                "la derivada de {} excede el rango",
                self.render(var)
            )));
        }

        steps.push(format!("P({var}) = {}", self.render(var)));
        for (power, coeff) in self.terms_descending() {
            let term = Polynomial::monomial(coeff, power);
            let derived = term.derivative();
            let rule = if power == 0 {
                "la derivada de una constante es 0"
            } else {
                "regla de la potencia"
            };
            steps.push(format!(
                "d/d{var}({}) = {} ({rule})",
                term.render(var),
                derived.render(var)
            ));
        }
        steps.push(format!("P'({var}) = {}", result.render(var)));
        Ok(result)
    }

    pub fn render(&self, var: char) -> String {
        format::polynomial(self, var)
    }
}

fn power_of(x: f64, power: u32) -> f64 {
    match power.to_i32() {
        Some(p) => x.powi(p),
        None => x.powf(f64::from(power)),
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('x'))
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        let mut coeffs = self.coeffs;
        for (power, coeff) in rhs.coeffs {
            match coeffs.entry(power) {
                Entry::Vacant(entry) => {
                    if !Zero::is_zero(&coeff) {
                        entry.insert(coeff);
                    }
                }
                Entry::Occupied(mut entry) => {
                    let updated = entry.get() + coeff;
                    if Zero::is_zero(&updated) {
                        entry.remove();
                    } else {
                        *entry.get_mut() = updated;
                    }
                }
            }
        }
        Polynomial { coeffs }
    }
}

impl std::ops::Add<&Polynomial> for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        self + rhs.clone()
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.into_iter().map(|(p, c)| (p, -c)).collect(),
        }
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self + (-rhs)
    }
}
