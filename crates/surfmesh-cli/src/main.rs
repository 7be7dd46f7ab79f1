//! surfmesh CLI - build, measure and pick procedural surface meshes.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use surfmesh::surfmesh_math::{Point3, Vec3};
use surfmesh::{ConeParams, MeshSettings, Model, PlaneParams, Ray, SurfaceSpec, Transform};

mod config;
mod report;

use config::{parse_triple, BuildConfig};
use report::{BuildSummary, PickSummary};

#[derive(Parser)]
#[command(name = "surfmesh")]
#[command(about = "Procedural parametric surface meshing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every shape kind and its parameter domain
    List,
    /// Build a mesh and report its counts, bounds, area and volume
    Build {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Read the surface, mesh settings and transform from a TOML file
        #[arg(long, conflicts_with = "kind")]
        config: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cast a ray at a mesh and report the hit
    Pick {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        origin: [f64; 3],
        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        direction: [f64; 3],
        /// Report the nearest hit rather than the first one in mesh order
        #[arg(long)]
        closest: bool,
        /// Print the hit as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ShapeArgs {
    /// Surface kind, `cone` or `plane`
    kind: Option<String>,
    /// Surface scale or cone base radius
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    /// Cone height
    #[arg(long, default_value_t = 2.0)]
    height: f64,
    /// Plane edge length
    #[arg(long, default_value_t = 10.0)]
    size: f64,
    /// Subdivisions along u
    #[arg(long, default_value_t = 32)]
    slices: u32,
    /// Subdivisions along v
    #[arg(long, default_value_t = 32)]
    stacks: u32,
    /// Emit quads instead of triangles
    #[arg(long)]
    quads: bool,
}

impl ShapeArgs {
    fn settings(&self) -> MeshSettings {
        let settings = MeshSettings::new(self.slices, self.stacks);
        if self.quads {
            settings.with_quads()
        } else {
            settings
        }
    }

    fn build(&self) -> Result<Model> {
        let Some(kind) = self.kind.as_deref() else {
            bail!("no shape kind given (see `surfmesh list`)");
        };
        let settings = self.settings();
        let model = match kind {
            "cone" => Model::cone(
                &ConeParams {
                    radius: self.radius,
                    height: self.height,
                },
                &settings,
            )?,
            "plane" => Model::plane(
                &PlaneParams {
                    x_size: self.size,
                    y_size: self.size,
                    ..PlaneParams::default()
                },
                &settings,
            )?,
            _ => {
                let spec = SurfaceSpec::from_kind(kind, self.radius)
                    .with_context(|| format!("unknown shape kind '{kind}'"))?;
                Model::from_spec(&spec, &settings)?
            }
        };
        Ok(model)
    }
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::List => list_kinds()?,
        Commands::Build {
            shape,
            config,
            json,
        } => {
            let model = match config {
                Some(path) => build_from_config(&path)?,
                None => shape.build()?,
            };
            let summary = BuildSummary::new(&model)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                summary.print();
            }
        }
        Commands::Pick {
            shape,
            origin,
            direction,
            closest,
            json,
        } => {
            let model = shape.build()?;
            let ray = Ray::new(Point3::from(origin), Vec3::from(direction));
            let hit = if closest {
                model.pick_closest(&ray)?
            } else {
                model.pick(&ray)?
            };
            let summary = hit.as_ref().map(PickSummary::from);
            match (summary, json) {
                (summary, true) => println!("{}", serde_json::to_string_pretty(&summary)?),
                (Some(summary), false) => summary.print(),
                (None, false) => println!("No hit"),
            }
        }
    }
    Ok(())
}

fn list_kinds() -> Result<()> {
    println!("{:<20} {:<24} {:<14} {:<14}", "kind", "name", "u range", "v range");
    for spec in SurfaceSpec::catalog(1.0) {
        let surface = spec.build()?;
        let d = surface.domain();
        println!(
            "{:<20} {:<24} {:<14} {:<14}",
            spec.kind(),
            surface.name(),
            format!("{:.3}..{:.3}", d.first_u, d.last_u),
            format!("{:.3}..{:.3}", d.first_v, d.last_v),
        );
    }
    println!("{:<20} {:<24} {:<14} {:<14}", "cone", "Cone", "0..2π", "0..height");
    println!("{:<20} {:<24} {:<14} {:<14}", "plane", "Plane", "x extent", "y extent");
    Ok(())
}

fn build_from_config(path: &Path) -> Result<Model> {
    let config = BuildConfig::load(path)?;
    log::info!(
        "building {} at {}x{} from {}",
        config.surface.kind(),
        config.mesh.slices,
        config.mesh.stacks,
        path.display()
    );
    let mut model = Model::from_spec(&config.surface, &config.mesh)?;
    let transform = config
        .transform
        .as_ref()
        .map_or_else(Transform::identity, |t| t.to_transform());
    model.set_transform(transform)?;
    Ok(model)
}
