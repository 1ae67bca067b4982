use std::env;
use std::process::ExitCode;
use std::time::Instant;

use log::info;

use u_georoute::cli::CliArgs;
use u_georoute::optimizer::{OptimizerConfig, RouteOptimizer};
use u_georoute::{io, logging, Error, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let Some(args) = CliArgs::parse(env::args().skip(1))? else {
        println!("{}", CliArgs::usage());
        return Ok(());
    };
    logging::init_logger(logging::level_for(args.quiet, args.verbose), false)?;

    let config = match &args.config {
        Some(path) => OptimizerConfig::from_json_file(path)?,
        None => OptimizerConfig::default(),
    };

    info!("reading coordinates from {}", args.input.display());
    let coords = io::read_coordinates(&args.input)?;
    if coords.is_empty() {
        return Err(Error::invalid_input(format!(
            "no valid coordinates found in {}",
            args.input.display()
        )));
    }

    let now = Instant::now();
    info!("optimizing {} points using '{}' method", coords.len(), args.method);
    let optimizer = RouteOptimizer::new(config)?;
    log::debug!("config: {:?}", optimizer.config());
    let solution = optimizer.optimize(&coords, args.method)?;
    info!(
        "done: method={} n={} time={:.3}s",
        solution.method(),
        solution.len(),
        now.elapsed().as_secs_f32()
    );

    if args.quiet {
        println!("Total distance: {:.2} km", solution.distance());
    } else {
        print!("\n{}", io::route_summary(&solution, args.method.as_str()));
    }

    if let Some(path) = &args.output {
        io::write_route(path, &solution)?;
    }

    Ok(())
}
