use calc_algebra::prelude::solve_equation;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let input = "3x - 5 = x + 2";
    let solution = solve_equation(input, 'x');
    println!("{input}  =>  {}", solution.summary());
    print!("{}", solution.steps);
}
