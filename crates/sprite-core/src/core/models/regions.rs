use super::error::ShapeError;

/// Candidate copies of every region, as bead indices into a coordinate buffer.
///
/// Copies of region `i` are stored contiguously in `bead_ids[offsets[i]..offsets[i + 1]]`,
/// so a `(region, copy)` pair maps to a single flat slot shared with the searcher's
/// candidate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLayout {
    bead_ids: Vec<usize>,
    offsets: Vec<usize>,
}

impl RegionLayout {
    /// Regions consume `copies_num[i]` consecutive beads, in region order.
    pub fn contiguous(copies_num: &[usize], n_bead: usize) -> Result<Self, ShapeError> {
        if n_bead == 0 {
            return Err(ShapeError::NoBeads);
        }
        if copies_num.is_empty() {
            return Err(ShapeError::NoRegions);
        }
        if let Some(region) = copies_num.iter().position(|&c| c == 0) {
            return Err(ShapeError::EmptyRegion { region });
        }

        let total = copies_num
            .iter()
            .try_fold(0usize, |acc, &c| acc.checked_add(c))
            .ok_or(ShapeError::CopyCountOverflow {
                n_regions: copies_num.len(),
            })?;
        if total != n_bead {
            return Err(ShapeError::BeadCountMismatch {
                expected: n_bead,
                found: total,
            });
        }

        let mut offsets = Vec::with_capacity(copies_num.len() + 1);
        offsets.push(0);
        for &c in copies_num {
            offsets.push(offsets[offsets.len() - 1] + c);
        }

        Ok(Self {
            bead_ids: (0..n_bead).collect(),
            offsets,
        })
    }

    /// Builds a layout from explicit per-region bead lists (a copy index).
    ///
    /// Bead ids are not checked against any buffer here; see [`RegionLayout::check_beads`].
    pub fn from_copy_index<I, C>(regions: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let mut bead_ids = Vec::new();
        let mut offsets = vec![0];

        for (region, copies) in regions.into_iter().enumerate() {
            let copies = copies.as_ref();
            if copies.is_empty() {
                return Err(ShapeError::EmptyRegion { region });
            }
            bead_ids.extend_from_slice(copies);
            offsets.push(bead_ids.len());
        }

        if offsets.len() == 1 {
            return Err(ShapeError::NoRegions);
        }

        Ok(Self { bead_ids, offsets })
    }

    pub fn n_regions(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of (region, copy) slots.
    pub fn n_slots(&self) -> usize {
        self.bead_ids.len()
    }

    pub fn copy_counts(&self) -> Vec<usize> {
        self.offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Flat slot of the first copy of `region`.
    #[inline]
    pub fn slot_offset(&self, region: usize) -> usize {
        self.offsets[region]
    }

    pub fn beads(&self, region: usize) -> Option<&[usize]> {
        (region < self.n_regions())
            .then(|| &self.bead_ids[self.offsets[region]..self.offsets[region + 1]])
    }

    pub fn bead(&self, region: usize, copy: usize) -> Option<usize> {
        self.beads(region).and_then(|b| b.get(copy)).copied()
    }

    pub fn check_beads(&self, n_bead: usize) -> Result<(), ShapeError> {
        for region in 0..self.n_regions() {
            for &bead in &self.bead_ids[self.offsets[region]..self.offsets[region + 1]] {
                if bead >= n_bead {
                    return Err(ShapeError::BeadOutOfRange {
                        region,
                        bead,
                        n_bead,
                    });
                }
            }
        }
        Ok(())
    }
}
