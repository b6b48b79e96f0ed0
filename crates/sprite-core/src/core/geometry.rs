use nalgebra::{Point3, Vector3};

pub fn point_from_slice(buf: &[f64]) -> Option<Point3<f64>> {
    match buf {
        [x, y, z, ..] => Some(Point3::new(*x, *y, *z)),
        _ => None,
    }
}

pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |mut acc: Vector3<f64>, p| {
            acc += p.coords;
            acc
        });
    Some(Point3::from(sum / points.len() as f64))
}

/// Mean squared distance of `points` from their centroid.
///
/// Returns `None` for an empty slice, where the metric is undefined.
#[inline]
pub fn gyration_radius_sq(points: &[Point3<f64>]) -> Option<f64> {
    let mean = centroid(points)?;
    let n = points.len() as f64;
    let squared_dist_sum: f64 = points.iter().map(|p| (p - mean).norm_squared()).sum();
    Some(squared_dist_sum / n)
}
