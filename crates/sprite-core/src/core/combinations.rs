use super::models::regions::RegionLayout;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombinationError {
    #[error("Region {region} has a copy count of zero")]
    EmptyRadix { region: usize },

    #[error("Number of combinations overflows a 64-bit counter at region {region}")]
    Overflow { region: usize },

    #[error("Combination index {index} is out of range (total {total})")]
    IndexOutOfRange { index: u64, total: u64 },

    #[error("Selection buffer has {found} entries, expected {expected}")]
    SelectionLength { expected: usize, found: usize },
}

/// Mixed-radix space of one-copy-per-region selections.
///
/// Index `k` decodes least-significant region first: region 0 varies fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpace {
    radices: Vec<usize>,
    total: u64,
}

impl CombinationSpace {
    pub fn new(radices: Vec<usize>) -> Result<Self, CombinationError> {
        let mut total: u64 = 1;
        for (region, &radix) in radices.iter().enumerate() {
            if radix == 0 {
                return Err(CombinationError::EmptyRadix { region });
            }
            total = u64::try_from(radix)
                .ok()
                .and_then(|r| total.checked_mul(r))
                .ok_or(CombinationError::Overflow { region })?;
        }
        Ok(Self { radices, total })
    }

    pub fn from_layout(layout: &RegionLayout) -> Result<Self, CombinationError> {
        Self::new(layout.copy_counts())
    }

    /// Number of combinations, the product of all radices. Never zero.
    pub fn n_combinations(&self) -> u64 {
        self.total
    }

    pub fn n_regions(&self) -> usize {
        self.radices.len()
    }

    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    #[inline]
    pub fn decode_into(&self, index: u64, selection: &mut [usize]) -> Result<(), CombinationError> {
        if index >= self.total {
            return Err(CombinationError::IndexOutOfRange {
                index,
                total: self.total,
            });
        }
        if selection.len() != self.radices.len() {
            return Err(CombinationError::SelectionLength {
                expected: self.radices.len(),
                found: selection.len(),
            });
        }

        let mut k = index;
        for (slot, &radix) in selection.iter_mut().zip(&self.radices) {
            // radix fits in u64: checked in `new`
            let r = radix as u64;
            *slot = (k % r) as usize;
            k /= r;
        }
        Ok(())
    }

    pub fn decode(&self, index: u64) -> Option<Vec<usize>> {
        let mut selection = vec![0; self.radices.len()];
        self.decode_into(index, &mut selection).ok()?;
        Some(selection)
    }

    /// Inverse of [`CombinationSpace::decode`].
    pub fn encode(&self, selection: &[usize]) -> Option<u64> {
        if selection.len() != self.radices.len() {
            return None;
        }
        let mut index: u64 = 0;
        for (&copy, &radix) in selection.iter().zip(&self.radices).rev() {
            if copy >= radix {
                return None;
            }
            index = index * radix as u64 + copy as u64;
        }
        Some(index)
    }
}
