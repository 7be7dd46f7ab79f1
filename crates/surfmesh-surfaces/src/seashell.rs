//! Seashell spirals.
//!
//! One tube swept along a conical helix whose radius grows linearly with
//! the sweep parameter:
//! ```text
//! W(u) = u / 2π
//! x = cx + r W(u) cos(N u) (1 + cos(v))
//! y = cy + r W(u) sin(N u) (1 + cos(v))
//! z = cz + r (W(u) sin(v) + H W(u)^p) - r k
//! ```
//! `N` is the number of turns, `H` the height, `p` how the height accelerates
//! towards the mouth, and `k` a vertical offset that roughly centres the
//! shell on the origin. The named shells are presets of these four numbers.

use std::f64::consts::TAU;

use surfmesh_math::{Point3, Vec3};

use crate::{ParamDomain, SurfaceFunction};

/// A seashell surface. Both `u` and `v` run over `[0, 2π]`.
#[derive(Debug, Clone, Copy)]
pub struct Seashell {
    name: &'static str,
    /// Uniform scale.
    pub radius: f64,
    /// Number of turns.
    pub turns: f64,
    /// Height of the spire relative to the radius.
    pub height: f64,
    /// Height growth exponent.
    pub power: f64,
    /// Downward shift, in radii.
    pub z_offset: f64,
    /// Translation applied after the shape is built.
    pub center: Vec3,
}

impl Seashell {
    /// Periwinkle: N = 4.6, H = 2, p = 2.
    pub fn periwinkle(radius: f64) -> Self {
        Self::preset("Periwinkle Sea Shell", radius, 4.6, 2.0, 2.0, 1.5)
    }

    /// Top shell: N = 7.6, H = 2.5, p = 1.3.
    pub fn top_shell(radius: f64) -> Self {
        Self::preset("Top Sea Shell", radius, 7.6, 2.5, 1.3, 1.75)
    }

    /// Turret shell: a tall, tightly wound spire (N = 12, H = 6, p = 1.5).
    pub fn turret_shell(radius: f64) -> Self {
        Self::preset("Turret Sea Shell", radius, 12.0, 6.0, 1.5, 3.0)
    }

    /// Cone shell: few turns with a linear rise (N = 3.6, H = 3, p = 1).
    pub fn cone_shell(radius: f64) -> Self {
        Self::preset("Cone Sea Shell", radius, 3.6, 3.0, 1.0, 1.5)
    }

    fn preset(
        name: &'static str,
        radius: f64,
        turns: f64,
        height: f64,
        power: f64,
        z_offset: f64,
    ) -> Self {
        Self {
            name,
            radius,
            turns,
            height,
            power,
            z_offset,
            center: Vec3::zeros(),
        }
    }

    /// Translate the shell so its origin lands on `center`.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }
}

impl SurfaceFunction for Seashell {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius;
        let w = u / TAU;
        let (sn, cn) = (self.turns * u).sin_cos();
        let (sv, cv) = v.sin_cos();
        let tube = r * w * (1.0 + cv);
        Point3::new(
            self.center.x + tube * cn,
            self.center.y + tube * sn,
            self.center.z + r * (w * sv + self.height * w.powf(self.power)) - r * self.z_offset,
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (0.0, TAU))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
