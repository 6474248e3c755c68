use vacuum_rust::config::{Cli, Config};
use vacuum_rust::planner::{DepthFirst, Planner, PlannerOptions, UniformCost};
use vacuum_rust::report::{self, RunRecord};
use vacuum_rust::world::World;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the plan/counter
    // contract.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        Config::default()
    }
    .override_from_command_line(&cli)?;
    config.validate()?;

    let world = World::from_file(&config.world_path)
        .with_context(|| format!("error loading world file: {}", config.world_path))?;
    if config.echo_world {
        world.echo();
    }

    let (plan, stats) = match config.mode.as_str() {
        "depth-first" => {
            let options = PlannerOptions::depth_first().filter_illegal(config.filter_illegal);
            let mut planner = DepthFirst::with_options(&world, options);
            let plan = planner.plan();
            (plan, planner.stats().clone())
        }
        "uniform-cost" => {
            let options = PlannerOptions::uniform_cost().filter_illegal(config.filter_illegal);
            let mut planner = UniformCost::with_options(&world, options);
            let plan = planner.plan();
            (plan, planner.stats().clone())
        }
        // validate() only lets the two modes through.
        _ => unreachable!(),
    };

    report::print_outcome(plan.as_ref(), &stats);

    if let Some(output_path) = &config.output_path {
        let record = RunRecord::new(&config.mode, plan.as_ref(), &stats);
        report::write_record(output_path, &record)?;
    }

    Ok(())
}
