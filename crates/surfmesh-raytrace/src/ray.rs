//! Ray representation.

use surfmesh_math::{Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept as given, not normalized, so hit parameters `t`
/// are measured in multiples of `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `from` through `to`; `t = 1` lands on `to`.
    pub fn through(from: Point3, to: Point3) -> Self {
        Self::new(from, to - from)
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let p = ray.at(1.5);
        assert!((p - Point3::new(1.0, 3.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_through() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-1.0, 0.0, 5.0);
        let ray = Ray::through(a, b);
        assert!((ray.at(1.0) - b).norm() < 1e-12);
        assert!((ray.at(0.0) - a).norm() < 1e-12);
    }
}
