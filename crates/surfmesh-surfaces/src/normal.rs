//! Finite-difference normal estimation.
//!
//! Normals are estimated from forward differences along u and v with a step
//! of a tenth of one grid cell. Parametrizations that pinch (poles, apexes,
//! spire tips) produce null tangents there, which are handled in two stages:
//!
//! 1. A null tangent is rebuilt from the *negated* forward sample,
//!    `-P(u + du, v) - P(u, v)`. This is a heuristic, not a derivative: it
//!    yields some vector roughly along the position, enough to keep the
//!    cross product alive on most pinched rows. The result can point
//!    sideways and should be treated as approximate.
//! 2. If the cross product is still null (or not finite), `+Z` is returned.
//!
//! Both tests are relative: a tangent is null when it is shorter than
//! [`Tolerance::NULL_VECTOR`] times the magnitude of the sampled points, and
//! the cross product is null when it is that fraction of `|t1| |t2|`. A small
//! surface is therefore treated exactly like a large one.

use serde::Serialize;
use surfmesh_math::{Tolerance, Vec3};

use crate::SurfaceFunction;

/// How an estimated normal was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NormalSource {
    /// Both finite differences were usable.
    Direct,
    /// At least one tangent came from the mirrored sample.
    Mirrored,
    /// Nothing usable; the fixed `+Z` normal was returned.
    Fallback,
}

/// An estimated unit normal and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEstimate {
    /// Unit normal (always unit length, even for [`NormalSource::Fallback`]).
    pub normal: Vec3,
    /// First-order tangent along u, if one was usable.
    pub u_tangent: Option<Vec3>,
    /// Which stage produced the normal.
    pub source: NormalSource,
}

/// Normal estimator bound to a sampling resolution.
#[derive(Debug, Clone, Copy)]
pub struct NormalEstimator {
    slices: u32,
    stacks: u32,
}

impl NormalEstimator {
    /// The fixed normal returned when estimation fails.
    pub const FALLBACK: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    /// Create an estimator for a `slices × stacks` grid.
    ///
    /// Both counts must be non-zero; the mesh builder validates this before
    /// constructing an estimator.
    pub fn new(slices: u32, stacks: u32) -> Self {
        debug_assert!(slices > 0 && stacks > 0);
        Self { slices, stacks }
    }

    /// Finite-difference steps `(du, dv)` for `surface`.
    pub fn steps(&self, surface: &dyn SurfaceFunction) -> (f64, f64) {
        let d = surface.domain();
        (
            d.u_span() / self.slices as f64 / 10.0,
            d.v_span() / self.stacks as f64 / 10.0,
        )
    }

    /// Estimate the unit normal of `surface` at `(u, v)`.
    pub fn estimate(&self, surface: &dyn SurfaceFunction, u: f64, v: f64) -> NormalEstimate {
        let (du, dv) = self.steps(surface);
        let origin = surface.point(u, v).coords;
        let along_u = surface.point(u + du, v).coords;
        let along_v = surface.point(u, v + dv).coords;

        let scale = origin.norm().max(along_u.norm()).max(along_v.norm());
        let is_null = |t: &Vec3| t.norm() <= Tolerance::NULL_VECTOR * scale;

        let mut source = NormalSource::Direct;

        let mut t1 = along_u - origin;
        if is_null(&t1) {
            t1 = -along_u - origin;
            source = NormalSource::Mirrored;
        }
        let mut t2 = along_v - origin;
        if is_null(&t2) {
            t2 = -along_v - origin;
            source = NormalSource::Mirrored;
        }

        let n = t2.cross(&t1);
        let len = n.norm();
        if !len.is_finite() || len <= Tolerance::NULL_VECTOR * t1.norm() * t2.norm() {
            return NormalEstimate {
                normal: Self::FALLBACK,
                u_tangent: None,
                source: NormalSource::Fallback,
            };
        }

        NormalEstimate {
            normal: n / len,
            u_tangent: Some(t1),
            source,
        }
    }
}
