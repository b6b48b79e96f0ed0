use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileRegionsConfig};
use super::models::{AppConfig, LayoutSpec};
use crate::cli::AssignArgs;
use crate::error::{CliError, Result};
use sprite_assign::engine::{config::AssignConfigBuilder, error::EngineError};
use tracing::debug;

pub fn build_config(args: &AssignArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let regions_file = file_config.regions.take().unwrap_or_default();
    let layout = resolve_layout(args.copies.as_deref(), regions_file)?;
    debug!("Resolved region layout: {:?}", layout);

    let search_file = file_config.search.take().unwrap_or_default();
    let keep_best = args
        .keep_best
        .or(search_file.keep_best)
        .unwrap_or(defaults.keep_best);
    let max_combinations = args
        .max_combinations
        .or(search_file.max_combinations)
        .or(defaults.max_combinations);

    let core_config = AssignConfigBuilder::new()
        .keep_best(keep_best)
        .max_combinations(max_combinations)
        .build()
        .map_err(EngineError::from)?;

    Ok(AppConfig {
        coords_path: args.coords.clone(),
        output_path: args.output.clone(),
        layout,
        core_config,
    })
}

fn resolve_layout(cli_copies: Option<&[usize]>, file: FileRegionsConfig) -> Result<LayoutSpec> {
    if let Some(copies) = cli_copies {
        return Ok(LayoutSpec::Contiguous(copies.to_vec()));
    }
    match (file.copies, file.copy_index) {
        (Some(copies), None) => Ok(LayoutSpec::Contiguous(copies)),
        (None, Some(copy_index)) => Ok(LayoutSpec::CopyIndex(copy_index)),
        (Some(_), Some(_)) => Err(CliError::Config(
            "'regions.copies' and 'regions.copy-index' are mutually exclusive".to_string(),
        )),
        (None, None) => Err(CliError::Config(
            "No region layout given: pass --copies or set 'regions.copies' / 'regions.copy-index'"
                .to_string(),
        )),
    }
}
