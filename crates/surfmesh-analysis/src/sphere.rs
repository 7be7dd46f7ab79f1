//! Ritter's bounding sphere.

use surfmesh_math::{points_from_flat, Point3};

use crate::error::{AnalysisError, Result};

/// A sphere enclosing a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Centre.
    pub center: Point3,
    /// Radius, never negative for finite input.
    pub radius: f64,
}

impl BoundingSphere {
    /// True if `p` lies within `radius + eps` of the centre.
    pub fn contains(&self, p: &Point3, eps: f64) -> bool {
        (p - self.center).norm() <= self.radius + eps
    }
}

/// Bounding sphere of an xyz-interleaved point array.
pub fn bounding_sphere(points: &[f32]) -> Result<BoundingSphere> {
    if points.len() % 3 != 0 {
        return Err(AnalysisError::MalformedPointArray {
            len: points.len(),
            stride: 3,
        });
    }
    bounding_sphere_of(&points_from_flat(points))
}

/// Bounding sphere of a point slice, by Ritter's algorithm.
///
/// 1. Find the points with the smallest and largest x, y and z. Ties keep
///    the earliest point.
/// 2. Of the three min/max pairs take the one furthest apart (x wins ties
///    over y, y over z) as the initial diameter.
/// 3. Make one pass over the points, growing the sphere just enough to
///    take in each point that lies outside it.
///
/// The result always encloses every point but is usually a few percent
/// larger than the minimal sphere. Non-finite points are not filtered and
/// make the result non-finite.
pub fn bounding_sphere_of(points: &[Point3]) -> Result<BoundingSphere> {
    let first = *points.first().ok_or(AnalysisError::EmptyPointSet)?;

    let mut min = [first; 3];
    let mut max = [first; 3];
    for p in &points[1..] {
        for axis in 0..3 {
            if p[axis] < min[axis][axis] {
                min[axis] = *p;
            }
            if p[axis] > max[axis][axis] {
                max[axis] = *p;
            }
        }
    }

    let mut axis = 0;
    let mut span = (max[0] - min[0]).norm_squared();
    for candidate in 1..3 {
        let s = (max[candidate] - min[candidate]).norm_squared();
        if s > span {
            span = s;
            axis = candidate;
        }
    }

    let mut center = midpoint(&min[axis], &max[axis]);
    let mut sq_radius = (max[axis] - center).norm_squared();
    let mut radius = sq_radius.sqrt();

    for p in points {
        let d2 = (p - center).norm_squared();
        // NaN distances count as outside so they reach the result
        if !(d2 <= sq_radius) {
            let d = d2.sqrt();
            radius = (radius + d) * 0.5;
            sq_radius = radius * radius;
            let offset = d - radius;
            center = Point3::from((radius * center.coords + offset * p.coords) / d);
        }
    }

    Ok(BoundingSphere { center, radius })
}

fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords) * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cube_corners() -> Vec<Point3> {
        let mut pts = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
        for (x, y, z) in [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 1.0, 1.0),
        ] {
            pts.push(Point3::new(x, y, z));
        }
        pts
    }

    #[test]
    fn test_cube_corners_exact() {
        let s = bounding_sphere_of(&cube_corners()).unwrap();
        assert!((s.center - Point3::new(0.5, 0.5, 0.5)).norm() < 1e-12);
        assert!((s.radius - 3f64.sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cube_corners_any_order_enclosed() {
        let mut pts = cube_corners();
        pts.rotate_left(3);
        pts.swap(0, 5);
        let s = bounding_sphere_of(&pts).unwrap();
        for p in &pts {
            assert!(s.contains(p, 1e-9));
        }
        // Never smaller than the minimal sphere
        assert!(s.radius >= 3f64.sqrt() / 2.0 - 1e-12);
    }

    #[test]
    fn test_single_point() {
        let s = bounding_sphere(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.center, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn test_random_cloud_enclosed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(1..500);
            let pts: Vec<Point3> = (0..n)
                .map(|_| {
                    Point3::new(
                        rng.gen_range(-10.0..10.0),
                        rng.gen_range(-3.0..3.0),
                        rng.gen_range(0.0..50.0),
                    )
                })
                .collect();
            let s = bounding_sphere_of(&pts).unwrap();
            assert!(s.radius >= 0.0);
            let farthest = pts
                .iter()
                .map(|p| (p - s.center).norm())
                .fold(0.0, f64::max);
            assert!(farthest <= s.radius + 1e-9);
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let flat: Vec<f32> = (0..30).map(|i| ((i * 7) % 11) as f32 - 5.0).collect();
        let a = bounding_sphere(&flat).unwrap();
        let b = bounding_sphere(&flat).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_malformed() {
        assert_eq!(bounding_sphere(&[]), Err(AnalysisError::EmptyPointSet));
        assert_eq!(
            bounding_sphere(&[1.0, 2.0]),
            Err(AnalysisError::MalformedPointArray { len: 2, stride: 3 })
        );
    }

    #[test]
    fn test_nan_propagates() {
        let s = bounding_sphere(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, f32::NAN, 0.0, 0.0]).unwrap();
        assert!(s.radius.is_nan() || !s.center.x.is_finite());
    }
}
