use crate::polynomial::{Polynomial, PolynomialResult};

use super::number;

/// Compact rendering in descending powers, e.g. `6x^2-8x+1`. The output is
/// accepted back by the polynomial parser.
pub fn polynomial(poly: &Polynomial, var: char) -> String {
    if poly.is_zero() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (power, coeff) in poly.terms_descending() {
        let magnitude = coeff.abs();
        let coeff_part = if magnitude == 1.0 && power > 0 {
            String::new()
        } else {
            number(magnitude)
        };
        let var_part = match power {
            0 => String::new(),
            1 => var.to_string(),
            p => format!("{var}^{p}"),
        };
        if coeff < 0.0 {
            out.push('-');
        } else if !out.is_empty() {
            out.push('+');
        }
        out.push_str(&coeff_part);
        out.push_str(&var_part);
    }
    out
}

/// `P(2) = 17` or `P'(x) = 6x^2-8x+1`.
pub fn polynomial_summary(result: &PolynomialResult, var: char) -> String {
    match result {
        PolynomialResult::Value { point, value } => {
            format!("P({}) = {}", number(*point), number(*value))
        }
        PolynomialResult::Derivative(poly) => format!("P'({var}) = {}", polynomial(poly, var)),
        PolynomialResult::Error(err) => format!("Error: {err}"),
    }
}
