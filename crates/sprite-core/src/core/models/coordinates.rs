use super::error::ShapeError;
use crate::core::geometry::point_from_slice;
use nalgebra::Point3;

const DIM: usize = 3;

/// Read-only view over a population coordinate buffer laid out as
/// `[bead][structure][xyz]`.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateBuffer<'a> {
    data: &'a [f64],
    n_struct: usize,
    n_bead: usize,
}

impl<'a> CoordinateBuffer<'a> {
    pub fn new(data: &'a [f64], n_struct: usize, n_bead: usize) -> Result<Self, ShapeError> {
        if n_struct == 0 {
            return Err(ShapeError::NoStructures);
        }
        if n_bead == 0 {
            return Err(ShapeError::NoBeads);
        }

        let expected = n_bead
            .checked_mul(n_struct)
            .and_then(|n| n.checked_mul(DIM))
            .ok_or(ShapeError::BufferTooLarge { n_bead, n_struct })?;
        if data.len() != expected {
            return Err(ShapeError::BufferLength {
                expected,
                found: data.len(),
            });
        }

        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteCoordinate { index });
        }

        Ok(Self {
            data,
            n_struct,
            n_bead,
        })
    }

    pub fn n_struct(&self) -> usize {
        self.n_struct
    }

    pub fn n_bead(&self) -> usize {
        self.n_bead
    }

    #[inline]
    fn offset(&self, bead: usize, structure: usize) -> usize {
        (bead * self.n_struct + structure) * DIM
    }

    #[inline]
    pub fn point(&self, bead: usize, structure: usize) -> Option<Point3<f64>> {
        if bead >= self.n_bead || structure >= self.n_struct {
            return None;
        }
        let start = self.offset(bead, structure);
        point_from_slice(&self.data[start..start + DIM])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> Vec<f64> {
        // 2 beads x 3 structures; value encodes (bead, structure, axis).
        let mut data = Vec::new();
        for bead in 0..2 {
            for s in 0..3 {
                for axis in 0..3 {
                    data.push((bead * 100 + s * 10 + axis) as f64);
                }
            }
        }
        data
    }

    #[test]
    fn new_accepts_consistent_shape() {
        let data = sample_data();
        let buf = CoordinateBuffer::new(&data, 3, 2).unwrap();
        assert_eq!(buf.n_struct(), 3);
        assert_eq!(buf.n_bead(), 2);
    }

    #[test]
    fn point_uses_bead_major_structure_minor_layout() {
        let data = sample_data();
        let buf = CoordinateBuffer::new(&data, 3, 2).unwrap();
        assert_eq!(buf.point(0, 0).unwrap(), Point3::new(0.0, 1.0, 2.0));
        assert_eq!(buf.point(0, 2).unwrap(), Point3::new(20.0, 21.0, 22.0));
        assert_eq!(buf.point(1, 1).unwrap(), Point3::new(110.0, 111.0, 112.0));
    }

    #[test]
    fn point_out_of_bounds_is_none() {
        let data = sample_data();
        let buf = CoordinateBuffer::new(&data, 3, 2).unwrap();
        assert!(buf.point(2, 0).is_none());
        assert!(buf.point(0, 3).is_none());
    }

    #[test]
    fn new_rejects_zero_counts() {
        assert_eq!(
            CoordinateBuffer::new(&[], 0, 1).unwrap_err(),
            ShapeError::NoStructures
        );
        assert_eq!(
            CoordinateBuffer::new(&[], 1, 0).unwrap_err(),
            ShapeError::NoBeads
        );
    }

    #[test]
    fn new_rejects_wrong_length() {
        let data = sample_data();
        assert_eq!(
            CoordinateBuffer::new(&data[..17], 3, 2).unwrap_err(),
            ShapeError::BufferLength {
                expected: 18,
                found: 17
            }
        );
    }

    #[test]
    fn new_rejects_overflowing_shape() {
        let result = CoordinateBuffer::new(&[], usize::MAX, 2);
        assert!(matches!(result, Err(ShapeError::BufferTooLarge { .. })));
    }

    #[test]
    fn new_rejects_non_finite_values() {
        let mut data = sample_data();
        data[7] = f64::NAN;
        assert_eq!(
            CoordinateBuffer::new(&data, 3, 2).unwrap_err(),
            ShapeError::NonFiniteCoordinate { index: 7 }
        );
        data[7] = f64::INFINITY;
        assert!(CoordinateBuffer::new(&data, 3, 2).is_err());
    }
}
