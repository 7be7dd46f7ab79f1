#![warn(missing_docs)]

//! Parametric surface functions for the surfmesh kernel.
//!
//! Every surface is a pure mapping from a rectangle of `(u, v)` parameters to
//! points in 3D, bound at construction to a radius (and, for a few shapes,
//! extra shape parameters). The mesh builders sample these on a regular grid.
//!
//! # Families
//!
//! - [`toroidal`]: apple, limpet torus, saddle torus, triaxial hexatorus
//! - [`algebraic`]: Boy's surface, Steiner's Roman surface, Klein bottle,
//!   superellipsoid, double cone
//! - [`seashell`]: the periwinkle / top / turret / cone shell spirals
//!
//! Formulas are evaluated as written. Some of them divide by terms that get
//! small or take logarithms that approach zero near the domain edges; callers
//! sampling there may receive non-finite points.

pub mod algebraic;
pub mod error;
pub mod normal;
pub mod seashell;
pub mod spec;
pub mod toroidal;

pub use algebraic::{BoySurface, DoubleCone, KleinBottle, SteinerSurface, SuperEllipsoid};
pub use error::{Result, SurfaceError};
pub use normal::{NormalEstimate, NormalEstimator, NormalSource};
pub use seashell::Seashell;
pub use spec::SurfaceSpec;
pub use toroidal::{AppleSurface, LimpetTorus, SaddleTorus, TriaxialHexatorus};

use serde::{Deserialize, Serialize};
use surfmesh_math::Point3;

/// The rectangle of parameters a surface is sampled over.
///
/// Traversal always starts at `first_*` and advances by `|last - first| / n`,
/// so the bounds do not have to be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamDomain {
    /// Start of the u range.
    pub first_u: f64,
    /// End of the u range.
    pub last_u: f64,
    /// Start of the v range.
    pub first_v: f64,
    /// End of the v range.
    pub last_v: f64,
}

impl ParamDomain {
    /// Create a domain from `(first_u, last_u)` and `(first_v, last_v)`.
    pub const fn new(u: (f64, f64), v: (f64, f64)) -> Self {
        Self {
            first_u: u.0,
            last_u: u.1,
            first_v: v.0,
            last_v: v.1,
        }
    }

    /// Width of the u range.
    pub fn u_span(&self) -> f64 {
        (self.last_u - self.first_u).abs()
    }

    /// Width of the v range.
    pub fn v_span(&self) -> f64 {
        (self.last_v - self.first_v).abs()
    }

    /// Pull `(u, v)` towards the middle of the domain by `fraction` of each span.
    pub fn nudge_inward(&self, u: f64, v: f64, fraction: f64) -> (f64, f64) {
        let mid_u = 0.5 * (self.first_u + self.last_u);
        let mid_v = 0.5 * (self.first_v + self.last_v);
        let du = fraction * self.u_span();
        let dv = fraction * self.v_span();
        (step_toward(u, mid_u, du), step_toward(v, mid_v, dv))
    }
}

fn step_toward(x: f64, target: f64, step: f64) -> f64 {
    if x < target {
        (x + step).min(target)
    } else if x > target {
        (x - step).max(target)
    } else {
        x
    }
}

/// A closed-form mapping from `(u, v)` to a point on a surface.
pub trait SurfaceFunction: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at `(u, v)`.
    fn point(&self, u: f64, v: f64) -> Point3;

    /// The parameter rectangle this surface is meant to be sampled over.
    fn domain(&self) -> ParamDomain;

    /// Display name.
    fn name(&self) -> &'static str;
}
