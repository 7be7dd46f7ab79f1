//! Möller–Trumbore ray/triangle intersection.

use surfmesh_math::Point3;

use crate::ray::Ray;

/// Relative determinant threshold: a ray whose `|det|` is at most this
/// fraction of `|direction| |edge1| |edge2|` runs parallel to the triangle's
/// plane and never hits. Degenerate triangles fall under it too.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Where a ray crosses a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter of the hit, `>= 0`.
    pub t: f64,
    /// The hit point, `ray.at(t)`.
    pub point: Point3,
    /// Weights of `(p0, p1, p2)`; they sum to 1.
    pub barycentric: [f64; 3],
}

/// Intersect `ray` with triangle `(p0, p1, p2)`.
///
/// Both windings are hit. Returns `None` for rays parallel to the plane,
/// crossings outside the triangle, and crossings behind the origin.
pub fn intersect_triangle(ray: &Ray, p0: &Point3, p1: &Point3, p2: &Point3) -> Option<TriangleHit> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let h = ray.direction.cross(&edge2);
    let det = edge1.dot(&h);
    let scale = ray.direction.norm() * edge1.norm() * edge2.norm();
    if det.abs() <= PARALLEL_EPSILON * scale {
        return None;
    }

    let f = 1.0 / det;
    let s = ray.origin - p0;
    let u = f * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);
    if !(0.0..=1.0).contains(&v) || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    if t < 0.0 {
        return None;
    }

    Some(TriangleHit {
        t,
        point: ray.at(t),
        barycentric: [1.0 - u - v, u, v],
    })
}
