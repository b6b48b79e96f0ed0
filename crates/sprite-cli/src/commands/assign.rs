use crate::cli::AssignArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::io;
use crate::utils::progress::CliProgressHandler;
use sprite_assign::{
    core::models::coordinates::CoordinateBuffer,
    engine::{error::EngineError, progress::ProgressReporter},
    workflows::{self, assign::ClusterOutcome},
};
use tracing::{info, warn};

pub fn run(args: AssignArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args)?;

    let population = io::read_population_from_path(&config.coords_path)?;
    let coords = CoordinateBuffer::new(&population.data, population.n_struct, population.n_bead)
        .map_err(EngineError::from)?;
    let layout = config
        .layout
        .resolve(population.n_bead)
        .map_err(EngineError::from)?;
    info!(
        "Population has {} structure(s), {} bead(s) and {} region(s).",
        population.n_struct,
        population.n_bead,
        layout.n_regions()
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting copy assignment...");
    info!("Invoking the core assignment workflow...");

    match workflows::assign::run(coords, &layout, &config.core_config, &reporter)? {
        ClusterOutcome::Skipped { n_combinations } => {
            warn!("Cluster skipped; no results written.");
            println!(
                "Warning: cluster has {} copy combinations, above the configured limit. Nothing was written.",
                n_combinations
            );
        }
        ClusterOutcome::Scored(assignment) => {
            info!("Writing per-structure results to {:?}", &config.output_path);
            let file = std::fs::File::create(&config.output_path)?;
            io::write_results(file, &assignment.population, &layout)?;

            let best = assignment.population.best();
            println!(
                "✓ Best structure {} (Rg² = {:.6}) written to: {}",
                best.structure,
                best.rg2,
                config.output_path.display()
            );
            for (rank, r) in assignment.ranked.iter().enumerate().skip(1) {
                println!(
                    "  #{} structure {} (Rg² = {:.6}), beads {:?}",
                    rank + 1,
                    r.structure,
                    r.rg2,
                    r.beads
                );
            }
        }
    }

    Ok(())
}
