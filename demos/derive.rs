use calc_algebra::prelude::{differentiate_polynomial, evaluate_polynomial};
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let input = "2x^3 - 4x^2 + x - 7";
    for outcome in [evaluate_polynomial(input, "2"), differentiate_polynomial(input)] {
        println!("{}", outcome.summary());
        for step in &outcome.steps {
            println!("  {step}");
        }
    }
}
