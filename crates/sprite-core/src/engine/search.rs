use crate::core::combinations::CombinationSpace;
use crate::core::geometry::gyration_radius_sq;
use crate::core::models::coordinates::CoordinateBuffer;
use crate::core::models::error::ShapeError;
use crate::core::models::regions::RegionLayout;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct StructureResult {
    pub structure: usize,
    pub rg2: f64,
    /// Winning copy index per region.
    pub copy_indices: Vec<usize>,
}

/// Brute-force copy selection for one structure at a time.
///
/// All scratch buffers are owned by the searcher and reused across structures,
/// so the combination loop itself never allocates. A searcher is not shared
/// between threads; parallel callers create one per worker.
pub struct StructureSearcher<'a> {
    coords: CoordinateBuffer<'a>,
    layout: &'a RegionLayout,
    space: &'a CombinationSpace,
    candidates: Vec<Point3<f64>>,
    current: Vec<Point3<f64>>,
    selection: Vec<usize>,
    best_selection: Vec<usize>,
}

impl<'a> StructureSearcher<'a> {
    pub fn new(
        coords: CoordinateBuffer<'a>,
        layout: &'a RegionLayout,
        space: &'a CombinationSpace,
    ) -> Self {
        let n_regions = layout.n_regions();
        Self {
            coords,
            layout,
            space,
            candidates: vec![Point3::origin(); layout.n_slots()],
            current: vec![Point3::origin(); n_regions],
            selection: vec![0; n_regions],
            best_selection: vec![0; n_regions],
        }
    }

    fn load_candidates(&mut self, structure: usize) -> Result<(), EngineError> {
        let n_bead = self.coords.n_bead();
        for region in 0..self.layout.n_regions() {
            let offset = self.layout.slot_offset(region);
            let beads = self
                .layout
                .beads(region)
                .ok_or_else(|| EngineError::Internal(format!("region {region} vanished")))?;
            for (copy, &bead) in beads.iter().enumerate() {
                self.candidates[offset + copy] = self.coords.point(bead, structure).ok_or(
                    ShapeError::BeadOutOfRange {
                        region,
                        bead,
                        n_bead,
                    },
                )?;
            }
        }
        Ok(())
    }

    pub fn search(&mut self, structure: usize) -> Result<StructureResult, EngineError> {
        if structure >= self.coords.n_struct() {
            return Err(EngineError::Internal(format!(
                "structure {structure} is outside the population of {}",
                self.coords.n_struct()
            )));
        }
        if self.space.n_regions() != self.layout.n_regions() {
            return Err(EngineError::Internal(format!(
                "combination space has {} regions, layout has {}",
                self.space.n_regions(),
                self.layout.n_regions()
            )));
        }

        self.load_candidates(structure)?;

        let mut best_rg2: Option<f64> = None;
        for k in 0..self.space.n_combinations() {
            self.space.decode_into(k, &mut self.selection)?;
            for (region, (point, &copy)) in self
                .current
                .iter_mut()
                .zip(&self.selection)
                .enumerate()
            {
                *point = self.candidates[self.layout.slot_offset(region) + copy];
            }

            let rg2 = gyration_radius_sq(&self.current)
                .ok_or(EngineError::DegenerateMetric { structure })?;

            // strict: the first minimum in enumeration order wins ties
            if best_rg2.is_none_or(|best| rg2 < best) {
                best_rg2 = Some(rg2);
                self.best_selection.copy_from_slice(&self.selection);
            }
        }

        let rg2 = best_rg2.ok_or(EngineError::DegenerateMetric { structure })?;
        trace!(structure, rg2, selection = ?self.best_selection, "Structure searched.");

        Ok(StructureResult {
            structure,
            rg2,
            copy_indices: self.best_selection.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(beads: &[[[f64; 3]; 1]]) -> Vec<f64> {
        beads.iter().flatten().flatten().copied().collect()
    }

    fn run_single(data: &[f64], copies: &[usize]) -> StructureResult {
        let n_bead: usize = copies.iter().sum();
        let coords = CoordinateBuffer::new(data, 1, n_bead).unwrap();
        let layout = RegionLayout::contiguous(copies, n_bead).unwrap();
        let space = CombinationSpace::from_layout(&layout).unwrap();
        StructureSearcher::new(coords, &layout, &space)
            .search(0)
            .unwrap()
    }

    #[test]
    fn single_copy_regions_reduce_to_direct_gyration_radius() {
        let beads = [
            [[1.0, 0.0, 0.0]],
            [[-1.0, 0.0, 0.0]],
            [[0.0, -1.0, 0.0]],
            [[0.0, 1.0, 0.0]],
        ];
        let data = flatten(&beads);
        let result = run_single(&data, &[1, 1, 1, 1]);

        let pts: Vec<_> = beads
            .iter()
            .map(|b| Point3::new(b[0][0], b[0][1], b[0][2]))
            .collect();
        let expected = gyration_radius_sq(&pts).unwrap();
        assert!((result.rg2 - expected).abs() < 1e-12);
        assert!((result.rg2 - 1.0).abs() < 1e-12);
        assert_eq!(result.copy_indices, vec![0, 0, 0, 0]);
    }

    #[test]
    fn known_two_point_case_scores_one() {
        let data = flatten(&[[[0.0, 0.0, 0.0]], [[2.0, 0.0, 0.0]]]);
        let result = run_single(&data, &[1, 1]);
        assert!((result.rg2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn picks_the_most_compact_combination() {
        // Region 0: copies at x=0 and x=10; region 1: copies at x=9 and x=-5.
        let data = flatten(&[
            [[0.0, 0.0, 0.0]],
            [[10.0, 0.0, 0.0]],
            [[9.0, 0.0, 0.0]],
            [[-5.0, 0.0, 0.0]],
        ]);
        let result = run_single(&data, &[2, 2]);
        assert_eq!(result.copy_indices, vec![1, 0]);
        assert!((result.rg2 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_the_first_combination_in_enumeration_order() {
        // Combinations 1 ([1,0]) and 3 ([1,1]) both give the minimum of 0.125.
        let data = flatten(&[
            [[1.0, 0.0, 0.0]],
            [[0.5, 0.0, 0.0]],
            [[0.0, -0.5, 0.0]],
            [[0.0, 0.5, 0.0]],
        ]);
        let result = run_single(&data, &[2, 2]);
        assert!((result.rg2 - 0.125).abs() < 1e-12);
        assert_eq!(result.copy_indices, vec![1, 0]);
    }

    #[test]
    fn all_identical_scores_select_combination_zero() {
        let data = flatten(&[
            [[1.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0]],
            [[1.0, 1.0, 1.0]],
        ]);
        let result = run_single(&data, &[3, 2]);
        assert_eq!(result.rg2, 0.0);
        assert_eq!(result.copy_indices, vec![0, 0]);
    }

    #[test]
    fn searcher_is_reusable_across_structures() {
        // 4 beads x 2 structures, copies [2, 2].
        let data: Vec<f64> = [
            [1.0, 0.0, 0.0],
            [0.1, 0.0, 0.0],
            [0.5, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, -0.5, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 0.5, 0.0],
            [-0.1, 0.0, 0.0],
        ]
        .iter()
        .flatten()
        .copied()
        .collect();
        let coords = CoordinateBuffer::new(&data, 2, 4).unwrap();
        let layout = RegionLayout::contiguous(&[2, 2], 4).unwrap();
        let space = CombinationSpace::from_layout(&layout).unwrap();
        let mut searcher = StructureSearcher::new(coords, &layout, &space);

        let first = searcher.search(0).unwrap();
        let second = searcher.search(1).unwrap();
        let first_again = searcher.search(0).unwrap();

        assert!((first.rg2 - 0.125).abs() < 1e-12);
        assert_eq!(first.copy_indices, vec![1, 0]);
        assert!((second.rg2 - 0.01).abs() < 1e-12);
        assert_eq!(second.copy_indices, vec![0, 1]);
        assert_eq!(first, first_again);
    }

    #[test]
    fn copy_index_layout_reads_the_listed_beads() {
        // Beads 0..4 on the x axis at 0, 100, 1, 50; region copies are [0, 1] and [3, 2].
        let data = flatten(&[
            [[0.0, 0.0, 0.0]],
            [[100.0, 0.0, 0.0]],
            [[1.0, 0.0, 0.0]],
            [[50.0, 0.0, 0.0]],
        ]);
        let coords = CoordinateBuffer::new(&data, 1, 4).unwrap();
        let layout = RegionLayout::from_copy_index([vec![0, 1], vec![3, 2]]).unwrap();
        let space = CombinationSpace::from_layout(&layout).unwrap();
        let result = StructureSearcher::new(coords, &layout, &space)
            .search(0)
            .unwrap();
        assert_eq!(result.copy_indices, vec![0, 1]);
        assert!((result.rg2 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_structure_is_an_error() {
        let data = flatten(&[[[0.0, 0.0, 0.0]]]);
        let coords = CoordinateBuffer::new(&data, 1, 1).unwrap();
        let layout = RegionLayout::contiguous(&[1], 1).unwrap();
        let space = CombinationSpace::from_layout(&layout).unwrap();
        let result = StructureSearcher::new(coords, &layout, &space).search(1);
        assert!(matches!(result, Err(EngineError::Internal(_))));
    }

    #[test]
    fn out_of_range_bead_is_a_shape_error() {
        let data = flatten(&[[[0.0, 0.0, 0.0]], [[1.0, 0.0, 0.0]]]);
        let coords = CoordinateBuffer::new(&data, 1, 2).unwrap();
        let layout = RegionLayout::from_copy_index([vec![0], vec![2]]).unwrap();
        let space = CombinationSpace::from_layout(&layout).unwrap();
        let result = StructureSearcher::new(coords, &layout, &space).search(0);
        assert!(matches!(
            result,
            Err(EngineError::Shape {
                source: ShapeError::BeadOutOfRange { bead: 2, .. }
            })
        ));
    }
}
