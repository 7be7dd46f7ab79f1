//! Toroidal surfaces (after Paul Bourke's catalogue of toroidal shapes).

use std::f64::consts::{FRAC_PI_3, PI, SQRT_2, TAU};

use surfmesh_math::Point3;

use crate::{ParamDomain, SurfaceFunction};

const TWO_PI_3: f64 = 2.0 * FRAC_PI_3;

// =============================================================================
// Apple
// =============================================================================

/// Apple surface.
///
/// Parameterization, `0 <= u <= 2π`, `-π <= v <= π`:
/// ```text
/// x = r cos(u) (4 + 3.8 cos(v))
/// y = r sin(u) (4 + 3.8 cos(v))
/// z = r ((cos(v) + sin(v) - 1)(1 + sin(v)) ln(1 - π v / 10) + 7.5 sin(v))
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AppleSurface {
    /// Uniform scale.
    pub radius: f64,
}

impl AppleSurface {
    /// Create an apple surface scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for AppleSurface {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let ring = 4.0 + 3.8 * cv;
        Point3::new(
            r * cu * ring,
            r * su * ring,
            r * ((cv + sv - 1.0) * (1.0 + sv) * (1.0 - PI * v / 10.0).ln() + 7.5 * sv),
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (-PI, PI))
    }

    fn name(&self) -> &'static str {
        "Apple Surface"
    }
}

// =============================================================================
// Limpet torus
// =============================================================================

/// Limpet torus, shifted down by one radius so it sits around the origin.
///
/// ```text
/// x = r cos(u) / (√2 + sin(v))
/// y = r sin(u) / (√2 + sin(v))
/// z = r / (√2 + cos(v)) - r
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LimpetTorus {
    /// Uniform scale.
    pub radius: f64,
}

impl LimpetTorus {
    /// Create a limpet torus scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for LimpetTorus {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        Point3::new(
            r * cu / (SQRT_2 + sv),
            r * su / (SQRT_2 + sv),
            r / (SQRT_2 + cv) - r,
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (0.0, TAU))
    }

    fn name(&self) -> &'static str {
        "Limpet Torus"
    }
}

// =============================================================================
// Triaxial hexatorus
// =============================================================================

/// Triaxial hexatorus: three limpet-like lobes phase-shifted by 2π/3.
///
/// ```text
/// x = r sin(u)        / (√2 + cos(v))
/// y = r sin(u + 2π/3) / (√2 + cos(v + 2π/3))
/// z = r cos(u - 2π/3) / (√2 + cos(v - 2π/3))
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TriaxialHexatorus {
    /// Uniform scale.
    pub radius: f64,
}

impl TriaxialHexatorus {
    /// Create a triaxial hexatorus scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for TriaxialHexatorus {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius;
        Point3::new(
            r * u.sin() / (SQRT_2 + v.cos()),
            r * (u + TWO_PI_3).sin() / (SQRT_2 + (v + TWO_PI_3).cos()),
            r * (u - TWO_PI_3).cos() / (SQRT_2 + (v - TWO_PI_3).cos()),
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (0.0, TAU))
    }

    fn name(&self) -> &'static str {
        "Triaxial Hexatorus"
    }
}

// =============================================================================
// Saddle torus
// =============================================================================

/// Saddle torus: a ring whose tube and sweep are both phase-shifted per axis,
/// giving saddle-shaped bends at three places around the loop.
///
/// ```text
/// x = r/3 (2 + cos(u))        cos(v)
/// y = r/3 (2 + cos(u + 2π/3)) cos(v + 2π/3)
/// z = r/3 (2 + cos(u - 2π/3)) cos(v - 2π/3)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SaddleTorus {
    /// Uniform scale.
    pub radius: f64,
}

impl SaddleTorus {
    /// Create a saddle torus scaled by `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceFunction for SaddleTorus {
    fn point(&self, u: f64, v: f64) -> Point3 {
        let s = self.radius / 3.0;
        Point3::new(
            s * (2.0 + u.cos()) * v.cos(),
            s * (2.0 + (u + TWO_PI_3).cos()) * (v + TWO_PI_3).cos(),
            s * (2.0 + (u - TWO_PI_3).cos()) * (v - TWO_PI_3).cos(),
        )
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new((0.0, TAU), (0.0, TAU))
    }

    fn name(&self) -> &'static str {
        "Saddle Torus"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_closed_in_u(surface: &dyn SurfaceFunction) {
        let d = surface.domain();
        for k in 0..8 {
            let v = d.first_v + d.v_span() * k as f64 / 8.0;
            let a = surface.point(d.first_u, v);
            let b = surface.point(d.last_u, v);
            assert!((a - b).norm() < 1e-9, "{} not closed at v={v}", surface.name());
        }
    }

    #[test]
    fn test_apple_axis_points() {
        let apple = AppleSurface::new(1.0);
        // u = 0, v = 0: x = 4 + 3.8, z = (1 + 0 - 1) * ... = 0
        let p = apple.point(0.0, 0.0);
        assert_relative_eq!(p.x, 7.8, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apple_finite_on_domain_edges() {
        let apple = AppleSurface::new(0.5);
        let d = apple.domain();
        for v in [d.first_v, d.last_v] {
            let p = apple.point(1.0, v);
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }

    #[test]
    fn test_limpet_scales_with_radius() {
        let a = LimpetTorus::new(1.0).point(0.3, 1.1);
        let b = LimpetTorus::new(2.0).point(0.3, 1.1);
        assert_relative_eq!(b.x, 2.0 * a.x, epsilon = 1e-12);
        assert_relative_eq!(b.y, 2.0 * a.y, epsilon = 1e-12);
        assert_relative_eq!(b.z, 2.0 * a.z, epsilon = 1e-12);
    }

    #[test]
    fn test_toroidal_surfaces_close_in_u() {
        assert_closed_in_u(&AppleSurface::new(1.0));
        assert_closed_in_u(&LimpetTorus::new(1.0));
        assert_closed_in_u(&TriaxialHexatorus::new(1.0));
        assert_closed_in_u(&SaddleTorus::new(1.0));
    }

    #[test]
    fn test_saddle_torus_bounded_by_radius() {
        let torus = SaddleTorus::new(3.0);
        for i in 0..16 {
            for j in 0..16 {
                let p = torus.point(i as f64 * 0.4, j as f64 * 0.4);
                assert!(p.coords.norm() <= 3.0 * 3f64.sqrt() + 1e-9);
            }
        }
    }
}
