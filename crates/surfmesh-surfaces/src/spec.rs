//! Serializable surface descriptions.
//!
//! [`SurfaceSpec`] is what configuration files and the CLI deal in; it is
//! validated and turned into a boxed [`SurfaceFunction`] with [`SurfaceSpec::build`].

use serde::{Deserialize, Serialize};
use surfmesh_math::Vec3;

use crate::error::require_positive;
use crate::{
    AppleSurface, BoySurface, DoubleCone, KleinBottle, LimpetTorus, Result, SaddleTorus, Seashell,
    SteinerSurface, SuperEllipsoid, SurfaceFunction, TriaxialHexatorus,
};

fn default_radius() -> f64 {
    1.0
}

fn unit() -> f64 {
    1.0
}

/// A parametric surface and its shape parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceSpec {
    /// [`AppleSurface`].
    Apple {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`BoySurface`].
    Boy {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`KleinBottle`].
    KleinBottle {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`LimpetTorus`].
    LimpetTorus {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`SaddleTorus`].
    SaddleTorus {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`SteinerSurface`].
    Steiner {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`TriaxialHexatorus`].
    TriaxialHexatorus {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`DoubleCone`].
    DoubleCone {
        /// Base radius.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`SuperEllipsoid`].
    SuperEllipsoid {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
        /// X axis scale.
        #[serde(default = "unit")]
        scale_x: f64,
        /// Y axis scale.
        #[serde(default = "unit")]
        scale_y: f64,
        /// Z axis scale.
        #[serde(default = "unit")]
        scale_z: f64,
        /// Latitude exponent.
        #[serde(default = "unit")]
        n1: f64,
        /// Longitude exponent.
        #[serde(default = "unit")]
        n2: f64,
    },
    /// [`Seashell::periwinkle`].
    Periwinkle {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`Seashell::top_shell`].
    TopShell {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
        /// Where the shell's origin is placed.
        #[serde(default)]
        center: [f64; 3],
    },
    /// [`Seashell::turret_shell`].
    TurretShell {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
    /// [`Seashell::cone_shell`].
    ConeShell {
        /// Uniform scale.
        #[serde(default = "default_radius")]
        radius: f64,
    },
}

impl SurfaceSpec {
    /// Snake-case kind tag, as used in configuration files.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Apple { .. } => "apple",
            Self::Boy { .. } => "boy",
            Self::KleinBottle { .. } => "klein_bottle",
            Self::LimpetTorus { .. } => "limpet_torus",
            Self::SaddleTorus { .. } => "saddle_torus",
            Self::Steiner { .. } => "steiner",
            Self::TriaxialHexatorus { .. } => "triaxial_hexatorus",
            Self::DoubleCone { .. } => "double_cone",
            Self::SuperEllipsoid { .. } => "super_ellipsoid",
            Self::Periwinkle { .. } => "periwinkle",
            Self::TopShell { .. } => "top_shell",
            Self::TurretShell { .. } => "turret_shell",
            Self::ConeShell { .. } => "cone_shell",
        }
    }

    /// Every surface kind with default parameters and the given radius.
    pub fn catalog(radius: f64) -> Vec<SurfaceSpec> {
        vec![
            Self::Apple { radius },
            Self::Boy { radius },
            Self::KleinBottle { radius },
            Self::LimpetTorus { radius },
            Self::SaddleTorus { radius },
            Self::Steiner { radius },
            Self::TriaxialHexatorus { radius },
            Self::DoubleCone { radius },
            Self::SuperEllipsoid {
                radius,
                scale_x: 1.0,
                scale_y: 1.0,
                scale_z: 1.0,
                n1: 1.0,
                n2: 1.0,
            },
            Self::Periwinkle { radius },
            Self::TopShell {
                radius,
                center: [0.0; 3],
            },
            Self::TurretShell { radius },
            Self::ConeShell { radius },
        ]
    }

    /// Look up a kind tag and give it default parameters.
    pub fn from_kind(kind: &str, radius: f64) -> Option<SurfaceSpec> {
        Self::catalog(radius).into_iter().find(|s| s.kind() == kind)
    }

    /// The uniform scale shared by every variant.
    pub fn radius(&self) -> f64 {
        match *self {
            Self::Apple { radius }
            | Self::Boy { radius }
            | Self::KleinBottle { radius }
            | Self::LimpetTorus { radius }
            | Self::SaddleTorus { radius }
            | Self::Steiner { radius }
            | Self::TriaxialHexatorus { radius }
            | Self::DoubleCone { radius }
            | Self::SuperEllipsoid { radius, .. }
            | Self::Periwinkle { radius }
            | Self::TopShell { radius, .. }
            | Self::TurretShell { radius }
            | Self::ConeShell { radius } => radius,
        }
    }

    /// Reject non-finite or non-positive size parameters.
    pub fn validate(&self) -> Result<()> {
        require_positive("radius", self.radius())?;
        if let Self::SuperEllipsoid {
            scale_x,
            scale_y,
            scale_z,
            n1,
            n2,
            ..
        } = *self
        {
            require_positive("scale_x", scale_x)?;
            require_positive("scale_y", scale_y)?;
            require_positive("scale_z", scale_z)?;
            require_positive("n1", n1)?;
            require_positive("n2", n2)?;
        }
        Ok(())
    }

    /// Validate and construct the surface.
    pub fn build(&self) -> Result<Box<dyn SurfaceFunction>> {
        self.validate()?;
        let surface: Box<dyn SurfaceFunction> = match *self {
            Self::Apple { radius } => Box::new(AppleSurface::new(radius)),
            Self::Boy { radius } => Box::new(BoySurface::new(radius)),
            Self::KleinBottle { radius } => Box::new(KleinBottle::new(radius)),
            Self::LimpetTorus { radius } => Box::new(LimpetTorus::new(radius)),
            Self::SaddleTorus { radius } => Box::new(SaddleTorus::new(radius)),
            Self::Steiner { radius } => Box::new(SteinerSurface::new(radius)),
            Self::TriaxialHexatorus { radius } => Box::new(TriaxialHexatorus::new(radius)),
            Self::DoubleCone { radius } => Box::new(DoubleCone::new(radius)),
            Self::SuperEllipsoid {
                radius,
                scale_x,
                scale_y,
                scale_z,
                n1,
                n2,
            } => Box::new(SuperEllipsoid::new(radius, [scale_x, scale_y, scale_z], n1, n2)),
            Self::Periwinkle { radius } => Box::new(Seashell::periwinkle(radius)),
            Self::TopShell { radius, center } => Box::new(
                Seashell::top_shell(radius).with_center(Vec3::new(center[0], center[1], center[2])),
            ),
            Self::TurretShell { radius } => Box::new(Seashell::turret_shell(radius)),
            Self::ConeShell { radius } => Box::new(Seashell::cone_shell(radius)),
        };
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceError;

    #[test]
    fn test_catalog_builds_every_kind() {
        let catalog = SurfaceSpec::catalog(1.0);
        assert_eq!(catalog.len(), 13);
        for spec in &catalog {
            let surface = spec.build().unwrap();
            let d = surface.domain();
            let p = surface.point(
                d.first_u + 0.5 * d.u_span(),
                d.first_v + 0.5 * d.v_span(),
            );
            assert!(
                p.x.is_finite() && p.y.is_finite() && p.z.is_finite(),
                "{} produced {:?}",
                spec.kind(),
                p
            );
        }
    }

    #[test]
    fn test_from_kind() {
        let spec = SurfaceSpec::from_kind("limpet_torus", 2.0).unwrap();
        assert_eq!(spec, SurfaceSpec::LimpetTorus { radius: 2.0 });
        assert!(SurfaceSpec::from_kind("teapot", 1.0).is_none());
    }

    #[test]
    fn test_rejects_bad_radius() {
        let err = SurfaceSpec::Apple { radius: 0.0 }.build().unwrap_err();
        assert_eq!(
            err,
            SurfaceError::InvalidParameter {
                name: "radius",
                value: 0.0
            }
        );
        assert!(SurfaceSpec::Boy { radius: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_exponent() {
        let spec = SurfaceSpec::SuperEllipsoid {
            radius: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            n1: -2.0,
            n2: 1.0,
        };
        assert!(matches!(
            spec.validate(),
            Err(SurfaceError::InvalidParameter { name: "n1", .. })
        ));
    }

    #[test]
    fn test_toml_tagged_form() {
        let spec: SurfaceSpec = toml::from_str(
            r#"
            kind = "super_ellipsoid"
            radius = 2.0
            n1 = 0.5
            "#,
        )
        .unwrap();
        match spec {
            SurfaceSpec::SuperEllipsoid {
                radius, n1, n2, scale_x, ..
            } => {
                assert_eq!(radius, 2.0);
                assert_eq!(n1, 0.5);
                assert_eq!(n2, 1.0);
                assert_eq!(scale_x, 1.0);
            }
            other => panic!("unexpected spec {other:?}"),
        }
    }

    #[test]
    fn test_json_defaults_radius() {
        let spec: SurfaceSpec = serde_json::from_str(r#"{"kind":"top_shell"}"#).unwrap();
        assert_eq!(
            spec,
            SurfaceSpec::TopShell {
                radius: 1.0,
                center: [0.0; 3]
            }
        );
    }
}
