use clap::Parser;
use mazeweave::{
    app::{App, renderer, session::Session},
    config::Cli,
    error::AppError,
    generators::generate,
    logging,
    solvers::{self, Strategy},
};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_dir)?;
    tracing::info!("[main] starting with {:?}", cli);

    match cli.solve {
        Some(strategy) => solve_headless(&cli, strategy.into()),
        None => run_interactive(&cli),
    }
}

/// Generate one maze, solve it eagerly and print it with the solution marked.
fn solve_headless(cli: &Cli, strategy: Strategy) -> Result<(), AppError> {
    let mut maze = generate(cli.width, cli.height, cli.seed)?;
    let report = solvers::solve(strategy, &mut maze);

    for row in renderer::layout(&maze, maze.target()) {
        let line = row.iter().map(|tile| tile.to_string()).collect::<String>();
        println!("{line}");
    }
    match report {
        Some(report) => println!(
            "{}: path of {} nodes, {} explored in {} steps",
            report.strategy,
            report.path.len(),
            report.explored,
            report.steps
        ),
        None => println!("{strategy}: no path found to the target."),
    }
    Ok(())
}

fn run_interactive(cli: &Cli) -> Result<(), AppError> {
    let mut session = Session::new(cli.width, cli.height, cli.seed)?;
    let app = App::new(cli.tick());

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(&mut stdout, &mut session);
    App::restore_terminal(&mut stdout)?;
    result
}
