use calc_algebra::prelude::*;

fn report(calculation: Calculation) -> Report {
    run(&calculation, &SolverOptions::default())
}

#[test]
fn equation_requests() {
    let out = report(Calculation::Equation {
        input: "3x - 5 = x + 2".to_string(),
        variable: 'x',
    });
    assert_eq!(out.result, "x = 3.5");
    assert!(!out.failed);
    assert!(!out.steps.is_empty());
}

#[test]
fn system_requests() {
    let out = report(Calculation::System(vec![
        "x+y+z=6".to_string(),
        "2x-y+z=3".to_string(),
        "x+2y-z=4".to_string(),
    ]));
    assert!(out.result.starts_with("x = 1.57"), "{}", out.result);
    assert!(!out.failed);
}

#[test]
fn polynomial_requests() {
    let evaluated = report(Calculation::Evaluate {
        polynomial: "2x^3-4x^2+x-7".to_string(),
        point: "2".to_string(),
    });
    assert_eq!(evaluated.result, "P(2) = -5");

    let derived = report(Calculation::Derive {
        polynomial: "2x^3-4x^2+x-7".to_string(),
    });
    assert_eq!(derived.result, "P'(x) = 6x^2-8x+1");
    assert_eq!(derived.steps.last().map(String::as_str), Some("P'(x) = 6x^2-8x+1"));
}

#[test]
fn failures_are_reports_not_panics() {
    let out = report(Calculation::Equation {
        input: "2x + 3".to_string(),
        variable: 'x',
    });
    assert!(out.failed);
    assert!(out.result.starts_with("Error: ecuación mal formada"));

    let out = report(Calculation::Derive {
        polynomial: "x^^2".to_string(),
    });
    assert!(out.failed);
}

#[test]
fn string_helpers_match_dispatcher() {
    assert_eq!(solve_equation("x = 1", 'x').summary(), "x = 1");
    assert_eq!(
        solve_system(&["2x+y=5", "x-y=1"]).summary(),
        report(Calculation::System(vec!["2x+y=5".into(), "x-y=1".into()])).result
    );
    assert_eq!(evaluate_polynomial("x", "4").summary(), "P(4) = 4");
    assert_eq!(differentiate_polynomial("x").summary(), "P'(x) = 1");
}
