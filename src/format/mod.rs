//! Rendering helpers for numbers, linear combinations and solver output.

mod polynomial;
mod solve;

pub use polynomial::{polynomial, polynomial_summary};
pub use solve::solve_summary;

/// Shortest round-trip rendering of an `f64`; negative zero prints as `0`.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Parenthesize negatives so they read unambiguously inside products.
pub fn grouped(value: f64) -> String {
    if value < 0.0 {
        format!("({})", number(value))
    } else {
        number(value)
    }
}

/// `2x - y + 0z` style rendering. Zero coefficients are kept so degenerate
/// equations such as `0x = 5` stay visible.
pub fn linear_combination(coefficients: &[f64], variables: &[char]) -> String {
    let mut out = String::new();
    for (i, (coeff, var)) in coefficients.iter().zip(variables).enumerate() {
        let magnitude = coeff.abs();
        let body = if magnitude == 1.0 {
            var.to_string()
        } else {
            format!("{}{var}", number(magnitude))
        };
        let negative = *coeff < 0.0;
        match (i, negative) {
            (0, true) => out.push_str(&format!("-{body}")),
            (0, false) => out.push_str(&body),
            (_, true) => out.push_str(&format!(" - {body}")),
            (_, false) => out.push_str(&format!(" + {body}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(number(3.0), "3");
        assert_eq!(number(3.5), "3.5");
        assert_eq!(number(-0.0), "0");
        assert_eq!(grouped(-2.0), "(-2)");
    }

    #[test]
    fn combinations_fold_unit_coefficients() {
        assert_eq!(linear_combination(&[2.0, -1.0], &['x', 'y']), "2x - y");
        assert_eq!(
            linear_combination(&[-1.5, 0.0, 1.0], &['x', 'y', 'z']),
            "-1.5x + 0y + z"
        );
    }
}
