use calc_algebra::{
    EngineError, Polynomial, PolynomialResult, SolverOptions, evaluate_polynomial,
    evaluate_polynomial_with, parse_polynomial,
};

fn poly(input: &str) -> Polynomial {
    parse_polynomial(input, 'x').expect("parse polynomial")
}

fn value(input: &str, point: &str) -> f64 {
    match evaluate_polynomial(input, point).result {
        PolynomialResult::Value { value, .. } => value,
        other => panic!("expected a value for {input} at {point}, got {other:?}"),
    }
}

#[test]
fn parses_all_term_shapes() {
    let p = poly("2x^3-4x^2+x-7");
    assert_eq!(p.degree(), Some(3));
    assert_eq!(p.coeff(3), 2.0);
    assert_eq!(p.coeff(2), -4.0);
    assert_eq!(p.coeff(1), 1.0);
    assert_eq!(p.coeff(0), -7.0);
}

#[test]
fn sums_repeated_and_unordered_powers() {
    assert_eq!(poly("3 + x^2 + 2x + x^2"), poly("2x^2+2x+3"));
    assert_eq!(poly("x - x"), Polynomial::zero());
    assert_eq!(poly("-x^2 + 5").to_string(), "-x^2+5");
}

#[test]
fn tolerates_spacing_case_and_explicit_products() {
    assert_eq!(poly(" 2X^2 +  1 "), poly("2x^2+1"));
    assert_eq!(poly("2*x^2 - 0.5*x"), poly("2x^2-0.5x"));
    assert_eq!(poly("+x^4"), Polynomial::monomial(1.0, 4));
}

#[test]
fn rejects_unmatched_input() {
    for bad in [
        "",
        "2x^2 + 3y",
        "x^-1",
        "2(x+1)",
        "x^2x",
        "3 + + 4",
        "*x^2",
        "3 + *x",
    ] {
        assert!(
            matches!(
                parse_polynomial(bad, 'x'),
                Err(EngineError::InvalidPolynomial(_))
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn evaluates_in_descending_order() {
    // 2·8 − 4·4 + 2 − 7
    assert_eq!(value("2x^3-4x^2+x-7", "2"), -5.0);
    assert_eq!(value("0.5x^2", "2"), 2.0);
    assert_eq!(value("x^2 - 1", "-3"), 8.0);
    assert_eq!(value("x - x", "10"), 0.0);
}

#[test]
fn evaluation_summary() {
    let outcome = evaluate_polynomial("x^2+2x+1", "3");
    assert_eq!(outcome.summary(), "P(3) = 16");
    assert_eq!(outcome.steps.iter().next(), Some("P(x) = x^2+2x+1"));
}

#[test]
fn invalid_evaluation_point() {
    let outcome = evaluate_polynomial("x^2", "abc");
    assert_eq!(
        outcome.result,
        PolynomialResult::Error(EngineError::InvalidNumber("abc".to_string()))
    );
    assert!(outcome.summary().starts_with("Error: "));
}

#[test]
fn other_polynomial_variable() {
    let options = SolverOptions::default().with_polynomial_variable('t');
    let outcome = evaluate_polynomial_with("t^2 + t", "2", &options);
    assert_eq!(outcome.summary(), "P(2) = 6");
    assert!(evaluate_polynomial_with("x^2", "2", &options).result != outcome.result);
}

#[test]
fn arithmetic_keeps_zero_terms_out() {
    let p = poly("x^2 + 2x");
    let q = poly("x^2 - 2x + 1");
    assert_eq!(p.clone() - q.clone(), poly("4x - 1"));
    assert_eq!(p.clone() + q, poly("2x^2 + 1"));
    assert_eq!(p.scale(0.0), Polynomial::zero());
}

#[test]
fn non_finite_coefficients_never_escape() {
    let huge = "9".repeat(400);
    assert!(matches!(
        parse_polynomial(&format!("{huge}x^2"), 'x'),
        Err(EngineError::InvalidPolynomial(_))
    ));

    let max = f64::MAX;
    assert!(matches!(
        parse_polynomial(&format!("{max}x + {max}x"), 'x'),
        Err(EngineError::NumericOverflow(_))
    ));
    assert!(matches!(
        evaluate_polynomial(&format!("{max}x^2"), "2").result,
        PolynomialResult::Error(EngineError::NumericOverflow(_))
    ));
}
