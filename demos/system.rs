use calc_algebra::prelude::solve_system;
use tracing_subscriber::EnvFilter;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let equations = ["x + y + z = 6", "2x - y + z = 3", "x + 2y - z = 4"];
    let solution = solve_system(&equations);
    println!("{}", solution.summary());
    print!("{}", solution.steps);
}
