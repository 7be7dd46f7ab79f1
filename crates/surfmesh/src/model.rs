//! A mesh placed in the world.

use surfmesh_analysis::{bounding_sphere, BoundingSphere, MeshProperties};
use surfmesh_math::Transform;
use surfmesh_raytrace::{
    closest_hit_in_triangles, first_hit_in_grid, first_hit_in_triangles, MeshHit, Ray,
};
use surfmesh_surfaces::{SurfaceFunction, SurfaceSpec};
use surfmesh_tessellate::{
    build_cone, build_plane, build_surface_mesh, BuildReport, ConeParams, Mesh, MeshSettings,
    PlaneParams,
};

use crate::transform::{transform_normals, transform_points};
use crate::Result;

/// A mesh in local space plus its transform and the derived world-space data.
///
/// World positions, world normals and the bounding sphere are recomputed
/// whenever the transform changes; the local mesh never is.
#[derive(Debug, Clone)]
pub struct Model {
    mesh: Mesh,
    report: Option<BuildReport>,
    transform: Transform,
    world_positions: Vec<f32>,
    world_normals: Vec<f32>,
    bounding_sphere: BoundingSphere,
}

impl Model {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Build a surface from its description.
    pub fn from_spec(spec: &SurfaceSpec, settings: &MeshSettings) -> Result<Self> {
        let surface = spec.build()?;
        Self::from_surface(surface.as_ref(), settings)
    }

    /// Sample an arbitrary surface function.
    pub fn from_surface(surface: &dyn SurfaceFunction, settings: &MeshSettings) -> Result<Self> {
        let built = build_surface_mesh(surface, settings)?;
        Self::with_report(built.mesh, Some(built.report))
    }

    /// Build a closed cone.
    pub fn cone(params: &ConeParams, settings: &MeshSettings) -> Result<Self> {
        Self::with_report(build_cone(params, settings)?, None)
    }

    /// Build a flat plane.
    pub fn plane(params: &PlaneParams, settings: &MeshSettings) -> Result<Self> {
        Self::with_report(build_plane(params, settings)?, None)
    }

    /// Wrap an existing mesh, e.g. one assembled from importer output.
    pub fn from_mesh(mesh: Mesh) -> Result<Self> {
        mesh.validate()?;
        Self::with_report(mesh, None)
    }

    fn with_report(mesh: Mesh, report: Option<BuildReport>) -> Result<Self> {
        let bounding_sphere = bounding_sphere(&mesh.positions)?;
        Ok(Self {
            world_positions: mesh.positions.clone(),
            world_normals: mesh.normals.clone(),
            mesh,
            report,
            transform: Transform::identity(),
            bounding_sphere,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Display name of the mesh.
    pub fn name(&self) -> &str {
        &self.mesh.name
    }

    /// The mesh in local space.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Current local-to-world transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Positions after the transform.
    pub fn world_positions(&self) -> &[f32] {
        &self.world_positions
    }

    /// Normals after the transform (rotation part only, not renormalized).
    pub fn world_normals(&self) -> &[f32] {
        &self.world_normals
    }

    /// Bounding sphere of the world positions.
    pub fn bounding_sphere(&self) -> &BoundingSphere {
        &self.bounding_sphere
    }

    /// Sampling diagnostics, for models built from a surface function.
    pub fn build_report(&self) -> Option<&BuildReport> {
        self.report.as_ref()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Replace the transform and recompute everything derived from it.
    pub fn set_transform(&mut self, transform: Transform) -> Result<()> {
        let world_positions = transform_points(&self.mesh.positions, &transform);
        self.bounding_sphere = bounding_sphere(&world_positions)?;
        self.world_normals = transform_normals(&self.mesh.normals, &transform);
        self.world_positions = world_positions;
        self.transform = transform;
        log::debug!(
            "{}: bounding sphere r={:.4} at {:?}",
            self.mesh.name,
            self.bounding_sphere.radius,
            self.bounding_sphere.center
        );
        Ok(())
    }

    /// First triangle hit by a world-space ray, in mesh order.
    ///
    /// Grid meshes are walked cell by cell, then any triangles outside the
    /// grid (a cone's cap) are tried. The hit is the first found, not the
    /// nearest; see [`Model::pick_closest`].
    pub fn pick(&self, ray: &Ray) -> Result<Option<MeshHit>> {
        let hit = match self.mesh.grid {
            Some(layout) => match first_hit_in_grid(&self.world_positions, layout, ray)? {
                Some(hit) => Some(hit),
                None => first_hit_in_triangles(
                    &self.world_positions,
                    &self.mesh.extra_triangle_indices(),
                    ray,
                )?,
            },
            None => {
                first_hit_in_triangles(&self.world_positions, &self.mesh.triangle_indices(), ray)?
            }
        };
        Ok(hit)
    }

    /// Nearest triangle hit by a world-space ray.
    pub fn pick_closest(&self, ray: &Ray) -> Result<Option<MeshHit>> {
        Ok(closest_hit_in_triangles(
            &self.world_positions,
            &self.mesh.triangle_indices(),
            ray,
        )?)
    }

    /// Surface area and volume of the world-space mesh.
    pub fn properties(&self) -> Result<MeshProperties> {
        Ok(MeshProperties::from_indexed(
            &self.world_positions,
            &self.mesh.triangle_indices(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};
    use surfmesh_math::{point_at, Point3, Vec3};
    use surfmesh_tessellate::{BuildStatus, FaceTopology, MeshError, RawArrays};

    fn sphere_model(radius: f64) -> Model {
        let spec = SurfaceSpec::SuperEllipsoid {
            radius,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            n1: 1.0,
            n2: 1.0,
        };
        Model::from_spec(&spec, &MeshSettings::new(32, 32)).unwrap()
    }

    #[test]
    fn test_sphere_bounds() {
        let model = sphere_model(2.0);
        let s = model.bounding_sphere();
        assert!(s.radius >= 2.0 - 1e-5 && s.radius < 2.2);
        for v in 0..model.mesh().vertex_count() {
            assert!(s.contains(&point_at(model.world_positions(), v), 1e-5));
        }
        let report = model.build_report().unwrap();
        assert_eq!(report.status(), BuildStatus::Clean);
    }

    #[test]
    fn test_set_transform_keeps_local_mesh() {
        let mut model = sphere_model(1.0);
        let local = model.mesh().positions.clone();
        let before = *model.bounding_sphere();

        model.set_transform(Transform::translation(5.0, 0.0, -1.0)).unwrap();
        assert_eq!(model.mesh().positions, local);
        let p = point_at(model.world_positions(), 10);
        let q = point_at(&local, 10);
        assert!((p - q - Vec3::new(5.0, 0.0, -1.0)).norm() < 1e-5);

        let after = model.bounding_sphere();
        assert!((after.center - before.center - Vec3::new(5.0, 0.0, -1.0)).norm() < 1e-4);
        assert_relative_eq!(after.radius, before.radius, epsilon = 1e-4);

        // Back to identity restores the local arrays
        model.set_transform(Transform::identity()).unwrap();
        assert_eq!(model.world_positions(), &local[..]);
    }

    #[test]
    fn test_world_normals_follow_rotation_only() {
        let mut model = sphere_model(1.0);
        let t = Transform::translation(3.0, 3.0, 3.0).then(&Transform::rotation_x(FRAC_PI_2));
        model.set_transform(t.clone()).unwrap();
        for v in [0, 100, 500] {
            let local = point_at(&model.mesh().normals, v).coords;
            let world = point_at(model.world_normals(), v).coords;
            assert!((world - t.apply_vec(&local)).norm() < 1e-5);
        }

        model.set_transform(Transform::scale(2.0, 2.0, 2.0)).unwrap();
        let n = point_at(model.world_normals(), 100).coords;
        assert_relative_eq!(n.norm(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cone_volume_and_area() {
        let (s, t) = (32, 10);
        let model = Model::cone(&ConeParams::default(), &MeshSettings::new(s, t)).unwrap();
        let props = model.properties().unwrap();
        // Inscribed polygonal cone: (1/3) h * (s/2) sin(2π/s)
        let base_area = s as f64 / 2.0 * (TAU / s as f64).sin();
        assert_relative_eq!(props.volume, base_area * 2.0 / 3.0, epsilon = 1e-4);
        assert!(props.surface_area < PI * (1.0 + 5f64.sqrt()));
        assert!(props.surface_area > 0.99 * PI * (1.0 + 5f64.sqrt()));
        assert_eq!(props.triangle_count, 2 * 32 * 10 + 32);

        // Rigid motions leave both untouched
        let mut moved = model.clone();
        moved
            .set_transform(Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_y(0.4)))
            .unwrap();
        let moved_props = moved.properties().unwrap();
        assert_relative_eq!(moved_props.volume, props.volume, epsilon = 1e-4);
        assert_relative_eq!(moved_props.surface_area, props.surface_area, epsilon = 1e-4);
    }

    #[test]
    fn test_pick_is_first_hit_not_closest() {
        let model = Model::cone(&ConeParams::default(), &MeshSettings::new(32, 10)).unwrap();
        // Straight up from below: enters through the cap, leaves through the side
        let ray = Ray::new(Point3::new(0.2, 0.1, -5.0), Vec3::z());

        let first = model.pick(&ray).unwrap().unwrap();
        assert!(first.hit.point.z > 0.0);

        let closest = model.pick_closest(&ray).unwrap().unwrap();
        assert_relative_eq!(closest.hit.point.z, -1.0, epsilon = 1e-6);
        assert!(closest.hit.t < first.hit.t);
    }

    #[test]
    fn test_pick_reaches_cap_outside_grid() {
        let model = Model::cone(&ConeParams::default(), &MeshSettings::new(16, 4)).unwrap();
        // From inside the cone straight down: only the cap is in the way
        let ray = Ray::new(Point3::new(0.3, -0.2, -0.5), -Vec3::z());
        let hit = model.pick(&ray).unwrap().unwrap();
        assert_relative_eq!(hit.hit.point.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(hit.hit.t, 0.5, epsilon = 1e-6);
        let cap_start = 17 * 5;
        assert!(hit.triangle.iter().all(|&i| i as usize >= cap_start));
    }

    #[test]
    fn test_pick_transformed_plane() {
        let mut model = Model::plane(&PlaneParams::default(), &MeshSettings::new(10, 10)).unwrap();
        model.set_transform(Transform::translation(0.0, 0.0, 3.0)).unwrap();
        let ray = Ray::new(Point3::new(0.3, 0.3, 10.0), -Vec3::z());
        let hit = model.pick(&ray).unwrap().unwrap();
        assert_relative_eq!(hit.hit.point.z, 3.0, epsilon = 1e-6);
        assert_relative_eq!(hit.hit.t, 7.0, epsilon = 1e-6);

        let miss = Ray::new(Point3::new(30.0, 0.0, 10.0), -Vec3::z());
        assert!(model.pick(&miss).unwrap().is_none());
    }

    #[test]
    fn test_from_mesh_uses_index_list() {
        let mesh = Mesh::from_raw_arrays(
            "tri",
            RawArrays {
                positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
                indices: vec![0, 1, 2],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap();
        let model = Model::from_mesh(mesh).unwrap();
        assert!(model.build_report().is_none());
        let ray = Ray::new(Point3::new(0.2, 0.2, 1.0), -Vec3::z());
        let hit = model.pick(&ray).unwrap().unwrap();
        assert_eq!(hit.triangle, [0, 1, 2]);
    }

    #[test]
    fn test_errors_are_wrapped() {
        let err = Model::from_spec(&SurfaceSpec::Apple { radius: -1.0 }, &MeshSettings::default())
            .unwrap_err();
        assert!(matches!(err, ModelError::Surface(_)));

        let err = Model::from_spec(&SurfaceSpec::Apple { radius: 1.0 }, &MeshSettings::new(0, 4))
            .unwrap_err();
        assert!(matches!(err, ModelError::Mesh(MeshError::ZeroSlices)));

        let empty = Mesh::new("empty", FaceTopology::Triangles);
        assert!(matches!(
            Model::from_mesh(empty),
            Err(ModelError::Analysis(_))
        ));
    }
}
