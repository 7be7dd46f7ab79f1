//! Non-orientable and algebraic surfaces plus the superellipsoid family.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use surfmesh_math::Point3;

use crate::{ParamDomain, SurfaceFunction};

// =============================================================================
// Boy's surface
// =============================================================================

/// Boy's surface, an immersion of the real projective plane.
///
/// With `A = 2/3`, `B = √2` and `0 <= u, v <= π`:
/// ```text
/// d = B - sin(2u) sin(3v)
/// x = r A (cos(u) cos(2v) + B sin(u) cos(v)) cos(u) / d
/// y = r A (cos(u) sin(2v) - B sin(u) sin(v)) cos(u) / d
/// z = r B cos²(u) / d - r
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoySurface {
    /// Uniform scale.
    pub radius: f64,
}

impl BoySurface {
    /// Create a Boy's surface scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for BoySurface {
    fn point(&self, u: f64, v: f64) -> Point3 {
        const A: f64 = 2.0 / 3.0;
        let r = self.radius;
        let (su, cu) = u.sin_cos();
        let d = SQRT_2 - (2.0 * u).sin() * (3.0 * v).sin();
        Point3::new(
            r * A * ((cu * (2.0 * v).cos() + SQRT_2 * su * v.cos()) * cu) / d,
            r * A * ((cu * (2.0 * v).sin() - SQRT_2 * su * v.sin()) * cu) / d,
            r * SQRT_2 * (cu * cu) / d - r,
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, PI), (0.0, PI))
    }

    fn name(&self) -> &'static str {
        "Boy's Surface"
    }
}

// =============================================================================
// Steiner's Roman surface
// =============================================================================

/// Steiner's Roman surface.
///
/// `0 <= u <= π`, `-π/2 <= v <= π/2`:
/// ```text
/// x = r/2 sin(2u) cos²(v)
/// y = r/2 sin(u)  sin(2v)
/// z = r/2 cos(u)  sin(2v)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SteinerSurface {
    /// Uniform scale.
    pub radius: f64,
}

impl SteinerSurface {
    /// Create a Steiner surface scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for SteinerSurface {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let s = 0.5 * self.radius;
        let cv = v.cos();
        let s2v = (2.0 * v).sin();
        Point3::new(
            s * (2.0 * u).sin() * cv * cv,
            s * u.sin() * s2v,
            s * u.cos() * s2v,
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, PI), (-FRAC_PI_2, FRAC_PI_2))
    }

    fn name(&self) -> &'static str {
        "Steiner Surface"
    }
}

// =============================================================================
// Klein bottle
// =============================================================================

/// The classic "bottle" immersion of the Klein bottle, scaled by `r/16`.
///
/// With `c = 4 (1 - cos(u)/2)` and `0 <= u, v <= 2π`:
/// ```text
/// u <  π: x = 6 cos(u)(1 + sin(u)) + c cos(u) cos(v),  y = 16 sin(u) + c sin(u) cos(v)
/// u >= π: x = 6 cos(u)(1 + sin(u)) + c cos(v + π),     y = 16 sin(u)
/// z = c sin(v)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KleinBottle {
    /// Uniform scale.
    pub radius: f64,
}

impl KleinBottle {
    /// Create a Klein bottle scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for KleinBottle {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let s = self.radius / 16.0;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let c = 4.0 * (1.0 - 0.5 * cu);
        let (x, y) = if u < PI {
            (6.0 * cu * (1.0 + su) + c * cu * cv, 16.0 * su + c * su * cv)
        } else {
            (6.0 * cu * (1.0 + su) + c * (v + PI).cos(), 16.0 * su)
        };
        Point3::new(s * x, s * y, s * c * sv)
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (0.0, TAU))
    }

    fn name(&self) -> &'static str {
        "Klein Bottle"
    }
}

// =============================================================================
// Superellipsoid
// =============================================================================

/// Superellipsoid with independent axis scales and exponents.
///
/// `u` is latitude in `[-π/2, π/2]`, `v` longitude in `[-π, π]`, and
/// `c(w, n) = sign(cos w)|cos w|^n`, `s(w, n) = sign(sin w)|sin w|^n`:
/// ```text
/// x = r sx c(u, n1) c(v, n2)
/// y = r sy c(u, n1) s(v, n2)
/// z = r sz s(u, n1)
/// ```
/// `n1 = n2 = 1` is an ellipsoid; exponents towards 0 square it off,
/// exponents above 2 pinch it.
#[derive(Debug, Clone, Copy)]
pub struct SuperEllipsoid {
    /// Uniform scale.
    pub radius: f64,
    /// X axis scale.
    pub scale_x: f64,
    /// Y axis scale.
    pub scale_y: f64,
    /// Z axis scale.
    pub scale_z: f64,
    /// Latitude exponent.
    pub n1: f64,
    /// Longitude exponent.
    pub n2: f64,
}

impl SuperEllipsoid {
    /// Create a superellipsoid.
    pub fn new(radius: f64, scale: [f64; 3], n1: f64, n2: f64) -> Self {
        Self {
            radius,
            scale_x: scale[0],
            scale_y: scale[1],
            scale_z: scale[2],
            n1,
            n2,
        }
    }

    /// A sphere of the given radius.
    pub fn sphere(radius: f64) -> Self {
        Self::new(radius, [1.0, 1.0, 1.0], 1.0, 1.0)
    }
}

fn signed_pow(x: f64, n: f64) -> f64 {
    x.signum() * x.abs().powf(n)
}

impl SurfaceFunction for SuperEllipsoid {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let cu_n = signed_pow(cu, self.n1);
        Point3::new(
            self.radius * self.scale_x * cu_n * signed_pow(cv, self.n2),
            self.radius * self.scale_y * cu_n * signed_pow(sv, self.n2),
            self.radius * self.scale_z * signed_pow(su, self.n1),
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((-FRAC_PI_2, FRAC_PI_2), (-PI, PI))
    }

    fn name(&self) -> &'static str {
        "Super Ellipsoid"
    }
}

// =============================================================================
// Double cone
// =============================================================================

/// Two right circular cones joined at their apex on the origin.
///
/// `0 <= u <= 2π`, `-1 <= v <= 1`: `(r v cos(u), r v sin(u), r v)`.
/// Every `u` maps `v = 0` to the same point, so normals there are degenerate.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCone {
    /// Radius of each cone's base (and its height).
    pub radius: f64,
}

impl DoubleCone {
    /// Create a double cone of the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for DoubleCone {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let rv = self.radius * v;
        let (su, cu) = u.sin_cos();
        Point3::new(rv * cu, rv * su, rv)
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (-1.0, 1.0))
    }

    fn name(&self) -> &'static str {
        "Double Cone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_superellipsoid_is_sphere() {
        let s = SuperEllipsoid::sphere(2.5);
        for i in 0..=10 {
            for j in 0..=10 {
                let u = -FRAC_PI_2 + PI * i as f64 / 10.0;
                let v = -PI + TAU * j as f64 / 10.0;
                let p = s.point(u, v);
                assert_relative_eq!(p.coords.norm(), 2.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_superellipsoid_scales_axes() {
        let s = SuperEllipsoid::new(1.0, [2.0, 3.0, 4.0], 1.0, 1.0);
        let top = s.point(FRAC_PI_2, 0.0);
        assert_relative_eq!(top.z, 4.0, epsilon = 1e-12);
        let side = s.point(0.0, FRAC_PI_2);
        assert_relative_eq!(side.y, 3.0, epsilon = 1e-12);
        let front = s.point(0.0, 0.0);
        assert_relative_eq!(front.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_double_cone_apex() {
        let cone = DoubleCone::new(1.5);
        for k in 0..6 {
            let p = cone.point(k as f64, 0.0);
            assert_eq!(p, Point3::origin());
        }
        let rim = cone.point(0.0, 1.0);
        assert!((rim - Point3::new(1.5, 0.0, 1.5)).norm() < 1e-12);
    }

    #[test]
    fn test_boy_denominator_never_vanishes() {
        let boy = BoySurface::new(1.0);
        let d = boy.domain();
        for i in 0..=32 {
            for j in 0..=32 {
                let u = d.first_u + d.u_span() * i as f64 / 32.0;
                let v = d.first_v + d.v_span() * j as f64 / 32.0;
                let p = boy.point(u, v);
                assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
            }
        }
    }

    #[test]
    fn test_steiner_symmetric() {
        let s = SteinerSurface::new(2.0);
        let a = s.point(0.4, 0.3);
        let b = s.point(0.4, -0.3);
        // Flipping v flips the y/z pair and keeps x
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, -b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, -b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_klein_bottle_branches_meet_at_pi() {
        let k = KleinBottle::new(16.0);
        for j in 0..8 {
            let v = TAU * j as f64 / 8.0;
            let below = k.point(PI - 1e-9, v);
            let at = k.point(PI, v);
            assert!((below - at).norm() < 1e-6);
        }
    }
}
