use crate::core::combinations::CombinationSpace;
use crate::core::models::coordinates::CoordinateBuffer;
use crate::core::models::regions::RegionLayout;
use crate::engine::config::AssignConfig;
use crate::engine::error::EngineError;
use crate::engine::population::{self, PopulationResult, selected_beads_for};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedStructure {
    pub structure: usize,
    pub rg2: f64,
    /// Bead id selected for each region.
    pub beads: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    pub population: PopulationResult,
    /// The `keep_best` lowest-scoring structures, best first.
    pub ranked: Vec<RankedStructure>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClusterOutcome {
    Scored(ClusterAssignment),
    /// The combination space exceeded `max_combinations`; nothing was searched.
    Skipped { n_combinations: u64 },
}

#[instrument(skip_all, name = "cluster_assignment_workflow")]
pub fn run(
    coords: CoordinateBuffer,
    layout: &RegionLayout,
    config: &AssignConfig,
    reporter: &ProgressReporter,
) -> Result<ClusterOutcome, EngineError> {
    layout.check_beads(coords.n_bead())?;
    let space = CombinationSpace::from_layout(layout)?;

    if let Some(limit) = config.max_combinations {
        if space.n_combinations() > limit {
            warn!(
                n_combinations = space.n_combinations(),
                limit, "Cluster exceeds the combination limit; skipping."
            );
            reporter.report(Progress::ClusterSkipped {
                n_combinations: space.n_combinations(),
                limit,
            });
            return Ok(ClusterOutcome::Skipped {
                n_combinations: space.n_combinations(),
            });
        }
    }

    let population = population::run_with_space(coords, layout, &space, reporter)?;

    let ranked = population
        .ranked(config.keep_best)
        .into_iter()
        .map(|s| {
            let result = &population.structures[s];
            Ok(RankedStructure {
                structure: s,
                rg2: result.rg2,
                beads: selected_beads_for(result, layout)?,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    info!(
        best_structure = population.best_structure,
        best_rg2 = population.best().rg2,
        kept = ranked.len(),
        "Cluster scored across {} structure(s).",
        population.n_struct()
    );

    Ok(ClusterOutcome::Scored(ClusterAssignment { population, ranked }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::error::ShapeError;
    use crate::engine::config::AssignConfigBuilder;

    /// Diploid toy genome: 3 loci with two copies each (beads 0-2 and 3-5), 3 structures.
    fn diploid_population() -> Vec<f64> {
        let structs: [[[f64; 3]; 6]; 3] = [
            [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [9.0, 0.0, 0.0],
                [8.0, 0.0, 0.0],
                [6.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
            ],
            [
                [0.0, 0.0, 0.0],
                [0.0, 5.0, 0.0],
                [0.0, 0.0, 5.0],
                [5.0, 0.0, 0.0],
                [0.0, -5.0, 0.0],
                [0.0, 0.0, -5.0],
            ],
            [
                [0.0, 0.0, 0.0],
                [0.0, 0.5, 0.0],
                [0.0, 0.0, 0.5],
                [4.0, 0.0, 0.0],
                [0.0, -4.0, 0.0],
                [0.0, 0.0, -4.0],
            ],
        ];
        let mut data = Vec::new();
        for bead in 0..6 {
            for s in &structs {
                data.extend_from_slice(&s[bead]);
            }
        }
        data
    }

    fn copy_index() -> RegionLayout {
        // locus i has copies at beads i and i + 3
        RegionLayout::from_copy_index([vec![0, 3], vec![1, 4], vec![2, 5]]).unwrap()
    }

    #[test]
    fn scores_cluster_and_keeps_best_structures() {
        let data = diploid_population();
        let coords = CoordinateBuffer::new(&data, 3, 6).unwrap();
        let layout = copy_index();
        let config = AssignConfigBuilder::new().keep_best(2).build().unwrap();

        let outcome = run(coords, &layout, &config, &ProgressReporter::new()).unwrap();
        let ClusterOutcome::Scored(assignment) = outcome else {
            panic!("cluster should have been scored");
        };

        assert_eq!(assignment.population.best_structure, 2);
        assert_eq!(assignment.ranked.len(), 2);
        assert_eq!(assignment.ranked[0].structure, 2);
        assert_eq!(assignment.ranked[0].beads, vec![0, 1, 2]);
        assert!(assignment.ranked[0].rg2 <= assignment.ranked[1].rg2);

        // structure 0 prefers the compact copies 0 (x=0), 1 (x=1) and 5 (x=2)
        let s0 = &assignment.population.structures[0];
        assert_eq!(s0.copy_indices, vec![0, 0, 1]);
        assert!((s0.rg2 - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(assignment.ranked[1].structure, 0);
        assert_eq!(assignment.ranked[1].beads, vec![0, 1, 5]);
    }

    #[test]
    fn clusters_over_the_combination_limit_are_skipped() {
        let data = diploid_population();
        let coords = CoordinateBuffer::new(&data, 3, 6).unwrap();
        let layout = copy_index();
        let config = AssignConfigBuilder::new()
            .keep_best(1)
            .max_combinations(Some(4))
            .build()
            .unwrap();

        let outcome = run(coords, &layout, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(outcome, ClusterOutcome::Skipped { n_combinations: 8 });
    }

    #[test]
    fn clusters_at_the_combination_limit_are_scored() {
        let data = diploid_population();
        let coords = CoordinateBuffer::new(&data, 3, 6).unwrap();
        let layout = copy_index();
        let config = AssignConfigBuilder::new()
            .keep_best(1)
            .max_combinations(Some(8))
            .build()
            .unwrap();

        let outcome = run(coords, &layout, &config, &ProgressReporter::new()).unwrap();
        assert!(matches!(outcome, ClusterOutcome::Scored(_)));
    }

    #[test]
    fn beads_outside_the_buffer_are_rejected_before_searching() {
        let data = diploid_population();
        let coords = CoordinateBuffer::new(&data, 3, 6).unwrap();
        let layout = RegionLayout::from_copy_index([vec![0, 6]]).unwrap();
        let config = AssignConfigBuilder::new().keep_best(1).build().unwrap();

        let err = run(coords, &layout, &config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Shape {
                source: ShapeError::BeadOutOfRange { bead: 6, .. }
            }
        ));
    }
}
