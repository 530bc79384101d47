use std::time::{Duration, Instant};

use mazeweave::{
    error::AppError,
    generators::{generate_with_rng, get_rng},
    logging,
    solvers::{Strategy, solve},
};

fn main() -> Result<(), AppError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .filter(|s| (1..=255).contains(s))
        .unwrap_or(u8::MAX as u16);
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let _guard = logging::init(std::path::Path::new("."))?;
    let mut rng = get_rng(None);
    let mut generate_time = Duration::ZERO;
    let mut solve_times = [Duration::ZERO; Strategy::ALL.len()];

    for iter in 0..num_iters {
        let start = Instant::now();
        let mut maze = generate_with_rng(size, size, &mut rng)?;
        generate_time += start.elapsed();

        for (strategy, total) in Strategy::ALL.into_iter().zip(solve_times.iter_mut()) {
            let start = Instant::now();
            let report = solve(strategy, &mut maze);
            *total += start.elapsed();
            tracing::info!(
                "[profile] iteration {}: {} explored {:?} nodes",
                iter,
                strategy,
                report.map(|r| r.explored)
            );
        }
    }

    let iters = u32::try_from(num_iters.max(1)).unwrap_or(u32::MAX);
    println!("{size}x{size} maze, {num_iters} iteration(s), average per iteration:");
    println!("  Kruskal generation: {:?}", generate_time / iters);
    for (strategy, total) in Strategy::ALL.iter().zip(solve_times) {
        println!("  {strategy}: {:?}", total / iters);
    }
    Ok(())
}
