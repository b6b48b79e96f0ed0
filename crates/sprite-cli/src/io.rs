use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use sprite_assign::core::models::regions::RegionLayout;
use sprite_assign::engine::population::{PopulationResult, selected_beads_for};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Population coordinates in the bead-major layout expected by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub data: Vec<f64>,
    pub n_struct: usize,
    pub n_bead: usize,
}

#[derive(Debug, Deserialize)]
struct CoordinateRecord {
    bead: usize,
    structure: usize,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Serialize)]
struct ResultRecord {
    structure: usize,
    rg2: f64,
    copies: String,
    beads: String,
}

fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

pub fn read_population<R: Read>(reader: R) -> Result<Population> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<CoordinateRecord>, csv::Error>>()?;

    if records.is_empty() {
        return Err(CliError::Argument(
            "Coordinates file contains no records".to_string(),
        ));
    }

    let too_large = || CliError::Argument("Bead/structure indices are too large".to_string());
    let count = |index: fn(&CoordinateRecord) -> usize| {
        records
            .iter()
            .map(index)
            .max()
            .and_then(|m| m.checked_add(1))
            .ok_or_else(too_large)
    };
    let n_bead = count(|r| r.bead)?;
    let n_struct = count(|r| r.structure)?;
    let expected = n_bead.checked_mul(n_struct).ok_or_else(too_large)?;
    if records.len() != expected {
        return Err(CliError::Argument(format!(
            "Expected {} records for {} beads x {} structures, found {}",
            expected,
            n_bead,
            n_struct,
            records.len()
        )));
    }

    let mut data = vec![0.0; expected * 3];
    let mut seen = vec![false; expected];
    for r in &records {
        let slot = r.bead * n_struct + r.structure;
        if std::mem::replace(&mut seen[slot], true) {
            return Err(CliError::Argument(format!(
                "Duplicate record for bead {} in structure {}",
                r.bead, r.structure
            )));
        }
        data[slot * 3..slot * 3 + 3].copy_from_slice(&[r.x, r.y, r.z]);
    }

    debug!("Parsed {} beads x {} structures.", n_bead, n_struct);
    Ok(Population {
        data,
        n_struct,
        n_bead,
    })
}

pub fn read_population_from_path(path: &Path) -> Result<Population> {
    info!("Loading coordinates from {:?}", path);
    let file = std::fs::File::open(path)?;
    read_population(file).map_err(|e| match e {
        CliError::Csv(source) => CliError::FileParsing {
            path: path.to_path_buf(),
            source: source.into(),
        },
        other => other,
    })
}

pub fn write_results<W: Write>(
    writer: W,
    result: &PopulationResult,
    layout: &RegionLayout,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for r in &result.structures {
        let beads = selected_beads_for(r, layout)?;
        csv_writer.serialize(ResultRecord {
            structure: r.structure,
            rg2: r.rg2,
            copies: join(&r.copy_indices),
            beads: join(&beads),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
