//! TOML build configuration and argument parsing helpers.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use surfmesh::{MeshSettings, SurfaceSpec, Transform};

/// A full build described in a TOML file.
///
/// ```toml
/// [surface]
/// kind = "top_shell"
/// radius = 2.0
///
/// [mesh]
/// slices = 64
/// stacks = 48
///
/// [transform]
/// translate = [0.0, 0.0, 1.5]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub surface: SurfaceSpec,
    #[serde(default)]
    pub mesh: MeshSettings,
    #[serde(default)]
    pub transform: Option<TransformConfig>,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.surface.validate()?;
        config.mesh.validate()?;
        Ok(config)
    }
}

/// Scale, then rotate about X, Y and Z (degrees), then translate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub scale: [f64; 3],
    pub rotate_deg: [f64; 3],
    pub translate: [f64; 3],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale: [1.0; 3],
            rotate_deg: [0.0; 3],
            translate: [0.0; 3],
        }
    }
}

impl TransformConfig {
    pub fn to_transform(&self) -> Transform {
        let [sx, sy, sz] = self.scale;
        let [rx, ry, rz] = self.rotate_deg.map(f64::to_radians);
        let [tx, ty, tz] = self.translate;
        Transform::translation(tx, ty, tz)
            .then(&Transform::rotation_z(rz))
            .then(&Transform::rotation_y(ry))
            .then(&Transform::rotation_x(rx))
            .then(&Transform::scale(sx, sy, sz))
    }
}

/// Parse `x,y,z` into three floats.
pub fn parse_triple(s: &str) -> std::result::Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected x,y,z but got '{s}'"));
    };
    let num = |p: &str| {
        p.parse::<f64>()
            .map_err(|e| format!("bad component '{p}': {e}"))
    };
    Ok([num(x)?, num(y)?, num(z)?])
}
