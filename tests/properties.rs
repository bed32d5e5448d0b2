use calc_algebra::{Polynomial, SolveResult, parse_polynomial, solve_equation, solve_system};
use proptest::prelude::*;

fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((0u32..7, -200i32..200), 0..6).prop_map(|terms| {
        Polynomial::from_terms(
            terms
                .into_iter()
                .map(|(power, quarters)| (power, f64::from(quarters) / 4.0)),
        )
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn linear_solution_satisfies_equation(
        a in (-1000.0f64..1000.0).prop_filter("non-zero coefficient", |a| a.abs() > 1e-3),
        b in -1000.0f64..1000.0,
    ) {
        let solution = solve_equation(&format!("{a}x = {b}"), 'x');
        let SolveResult::Unique(values) = solution.result else {
            return Err(TestCaseError::fail(format!("no unique solution for {a}x = {b}")));
        };
        prop_assert_eq!(values[0], b / a);
        prop_assert!(close(a * values[0], b));
    }

    #[test]
    fn split_sides_fold_like_single_side(
        a in -50i32..50,
        c in -50i32..50,
        d in -50i32..50,
    ) {
        // a·x + c = d  ⇔  a·x = d − c
        prop_assume!(a != 0);
        let folded = solve_equation(&format!("{a}x + {c} = {d}"), 'x');
        let direct = solve_equation(&format!("{a}x = {}", d - c), 'x');
        prop_assert_eq!(folded.result, direct.result);
    }

    #[test]
    fn independent_2x2_round_trip(
        a1 in -20i32..20, b1 in -20i32..20,
        a2 in -20i32..20, b2 in -20i32..20,
        x in -20i32..20, y in -20i32..20,
    ) {
        prop_assume!(a1 * b2 - a2 * b1 != 0);
        let c1 = a1 * x + b1 * y;
        let c2 = a2 * x + b2 * y;
        let lines = [
            format!("{a1}x + {b1}y = {c1}"),
            format!("{a2}x + {b2}y = {c2}"),
        ];
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let solution = solve_system(&lines);
        let values = solution.result.values().expect("unique solution").to_vec();
        prop_assert!(close(values[0], f64::from(x)));
        prop_assert!(close(values[1], f64::from(y)));
    }

    #[test]
    fn derivative_is_linear(p in arb_polynomial(), q in arb_polynomial()) {
        let lhs = (p.clone() + q.clone()).derivative();
        let rhs = p.derivative() + q.derivative();
        for x in [-2.0, -0.5, 0.0, 1.0, 3.0] {
            prop_assert!(close(lhs.evaluate(x), rhs.evaluate(x)));
        }
    }

    #[test]
    fn rendered_derivative_parses_back(p in arb_polynomial()) {
        let derivative = p.derivative();
        let reparsed = parse_polynomial(&derivative.render('x'), 'x').expect("reparse");
        prop_assert_eq!(reparsed, derivative);
    }

    #[test]
    fn rendered_polynomial_parses_back(
        terms in prop::collection::vec((0u32..9, -1.0e6f64..1.0e6), 1..6),
    ) {
        let p = Polynomial::from_terms(terms);
        let reparsed = parse_polynomial(&p.to_string(), 'x').expect("reparse");
        prop_assert_eq!(reparsed, p);
    }
}
