use crate::core::combinations::CombinationSpace;
use crate::core::models::coordinates::CoordinateBuffer;
use crate::core::models::error::ShapeError;
use crate::core::models::regions::RegionLayout;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::ranking;
use crate::engine::search::{StructureResult, StructureSearcher};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationResult {
    /// One entry per structure, in structure order.
    pub structures: Vec<StructureResult>,
    pub best_structure: usize,
}

impl PopulationResult {
    pub fn n_struct(&self) -> usize {
        self.structures.len()
    }

    pub fn best(&self) -> &StructureResult {
        &self.structures[self.best_structure]
    }

    pub fn rg2s(&self) -> Vec<f64> {
        self.structures.iter().map(|r| r.rg2).collect()
    }

    /// Winning copy indices, row-major `n_struct x n_regions`.
    pub fn copy_index_table(&self) -> Vec<usize> {
        self.structures
            .iter()
            .flat_map(|r| r.copy_indices.iter().copied())
            .collect()
    }

    /// Bead chosen for each region of each structure, row-major `n_struct x n_regions`.
    pub fn selected_beads(&self, layout: &RegionLayout) -> Result<Vec<usize>, EngineError> {
        let mut beads = Vec::with_capacity(self.structures.len() * layout.n_regions());
        for result in &self.structures {
            beads.extend(selected_beads_for(result, layout)?);
        }
        Ok(beads)
    }

    /// Structure indices of the `keep_best` lowest scores, best first.
    pub fn ranked(&self, keep_best: usize) -> Vec<usize> {
        ranking::rank_structures(&self.rg2s(), keep_best)
    }

    /// Copies the results into caller-allocated buffers and returns the best structure.
    pub fn write_into(
        &self,
        rg2s: &mut [f64],
        copy_idxs: &mut [usize],
    ) -> Result<usize, EngineError> {
        let n_struct = self.structures.len();
        let n_regions = self
            .structures
            .first()
            .map(|r| r.copy_indices.len())
            .unwrap_or(0);

        if rg2s.len() != n_struct {
            return Err(EngineError::OutputLength {
                buffer: "rg2s",
                expected: n_struct,
                found: rg2s.len(),
            });
        }
        if copy_idxs.len() != n_struct * n_regions {
            return Err(EngineError::OutputLength {
                buffer: "copy_idxs",
                expected: n_struct * n_regions,
                found: copy_idxs.len(),
            });
        }

        for ((result, rg2), row) in self
            .structures
            .iter()
            .zip(rg2s.iter_mut())
            .zip(copy_idxs.chunks_exact_mut(n_regions.max(1)))
        {
            *rg2 = result.rg2;
            row.copy_from_slice(&result.copy_indices);
        }
        Ok(self.best_structure)
    }
}

pub fn selected_beads_for(
    result: &StructureResult,
    layout: &RegionLayout,
) -> Result<Vec<usize>, EngineError> {
    result
        .copy_indices
        .iter()
        .enumerate()
        .map(|(region, &copy)| {
            layout.bead(region, copy).ok_or_else(|| {
                EngineError::Internal(format!(
                    "structure {} selected copy {copy} of region {region}, which does not exist",
                    result.structure
                ))
            })
        })
        .collect()
}

/// Index of the strict minimum score; the earliest structure wins ties.
pub fn best_structure_index(results: &[StructureResult]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, r) in results.iter().enumerate() {
        if best.is_none_or(|(_, rg2)| r.rg2 < rg2) {
            best = Some((i, r.rg2));
        }
    }
    best.map(|(i, _)| i)
}

fn validate(coords: &CoordinateBuffer, layout: &RegionLayout) -> Result<(), ShapeError> {
    if layout.n_regions() == 0 {
        return Err(ShapeError::NoRegions);
    }
    layout.check_beads(coords.n_bead())
}

#[instrument(skip_all, name = "population_search", fields(n_struct = coords.n_struct(), n_regions = layout.n_regions()))]
pub fn run(
    coords: CoordinateBuffer,
    layout: &RegionLayout,
    reporter: &ProgressReporter,
) -> Result<PopulationResult, EngineError> {
    validate(&coords, layout)?;
    let space = CombinationSpace::from_layout(layout)?;
    run_with_space(coords, layout, &space, reporter)
}

pub(crate) fn run_with_space(
    coords: CoordinateBuffer,
    layout: &RegionLayout,
    space: &CombinationSpace,
    reporter: &ProgressReporter,
) -> Result<PopulationResult, EngineError> {
    let n_struct = coords.n_struct();
    debug!(
        "Searching {} combination(s) over {} region(s) for {} structure(s).",
        space.n_combinations(),
        layout.n_regions(),
        n_struct
    );

    reporter.report(Progress::SearchStart {
        n_struct: n_struct as u64,
        n_combinations: space.n_combinations(),
    });

    #[cfg(not(feature = "parallel"))]
    let structures = {
        let mut searcher = StructureSearcher::new(coords, layout, space);
        (0..n_struct)
            .map(|s| -> Result<StructureResult, EngineError> {
                let result = searcher.search(s)?;
                reporter.report(Progress::StructureDone {
                    structure: s,
                    rg2: result.rg2,
                });
                Ok(result)
            })
            .collect::<Result<Vec<_>, EngineError>>()?
    };

    #[cfg(feature = "parallel")]
    let structures = (0..n_struct)
        .into_par_iter()
        .map_init(
            || StructureSearcher::new(coords, layout, space),
            |searcher, s| -> Result<StructureResult, EngineError> {
                let result = searcher.search(s)?;
                reporter.report(Progress::StructureDone {
                    structure: s,
                    rg2: result.rg2,
                });
                Ok(result)
            },
        )
        .collect::<Result<Vec<_>, EngineError>>()?;

    let best_structure = best_structure_index(&structures)
        .ok_or(EngineError::Shape {
            source: ShapeError::NoStructures,
        })?;
    debug!(
        best_structure,
        rg2 = structures[best_structure].rg2,
        "Population search complete."
    );
    reporter.report(Progress::SearchFinish { best_structure });

    Ok(PopulationResult {
        structures,
        best_structure,
    })
}
