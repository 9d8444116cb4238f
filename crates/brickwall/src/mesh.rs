//! Triangle meshes of laid-out bricks.

use brickwall_math::{Point3, Transform, Vec3};

use crate::assembly::{Building, WorldBrick};

/// Indexed triangle mesh, flat f32 buffers ready for upload or export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
    /// Flat array of vertex normals, same length as `vertices`.
    pub normals: Vec<f32>,
}

/// Unit-box faces: outward normal and four corners (CCW seen from outside),
/// corners given as ±1 per axis.
const BOX_FACES: [([f64; 3], [[f64; 3]; 4]); 6] = [
    ([1.0, 0.0, 0.0], [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]]),
    ([-1.0, 0.0, 0.0], [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]]),
    ([0.0, 1.0, 0.0], [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]]),
    ([0.0, -1.0, 0.0], [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]]),
    ([0.0, 0.0, 1.0], [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]),
    ([0.0, 0.0, -1.0], [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]]),
];

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append an oriented box: 24 vertices (flat-shaded faces), 12 triangles.
    pub fn push_box(&mut self, size: &Vec3, center: &Point3, yaw: f64) {
        let place = Transform::translation(center.x, center.y, center.z)
            .then(&Transform::rotation_y(yaw));
        let half = *size / 2.0;

        for (normal, corners) in BOX_FACES.iter() {
            let base = self.num_vertices() as u32;
            let n = place.apply_vec(&Vec3::new(normal[0], normal[1], normal[2]));
            for c in corners {
                let local = Point3::new(c[0] * half.x, c[1] * half.y, c[2] * half.z);
                let p = place.apply_point(&local);
                self.vertices
                    .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
                self.normals
                    .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
            }
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    /// Append one brick.
    pub fn push_brick(&mut self, brick: &WorldBrick) {
        self.push_box(&brick.size, &brick.center, brick.yaw);
    }
}

/// Mesh every brick of a building.
pub fn building_mesh(building: &Building) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    for brick in building.bricks() {
        mesh.push_brick(brick);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::assemble_building;
    use crate::bond::BondType;
    use crate::design::{Dimensions, STANDARD_BRICK};

    fn corner(mesh: &TriangleMesh, i: usize) -> Vec3 {
        Vec3::new(
            mesh.vertices[i * 3] as f64,
            mesh.vertices[i * 3 + 1] as f64,
            mesh.vertices[i * 3 + 2] as f64,
        )
    }

    #[test]
    fn box_counts() {
        let mut mesh = TriangleMesh::new();
        mesh.push_box(&Vec3::new(250.0, 65.0, 120.0), &Point3::origin(), 0.0);
        assert_eq!(mesh.num_vertices(), 24);
        assert_eq!(mesh.num_triangles(), 12);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
    }

    #[test]
    fn box_faces_wind_outward() {
        let mut mesh = TriangleMesh::new();
        mesh.push_box(&Vec3::new(2.0, 4.0, 6.0), &Point3::origin(), 0.0);
        for tri in mesh.indices.chunks(3) {
            let a = corner(&mesh, tri[0] as usize);
            let b = corner(&mesh, tri[1] as usize);
            let c = corner(&mesh, tri[2] as usize);
            let n = (b - a).cross(&(c - a));
            let centroid = (a + b + c) / 3.0;
            assert!(n.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn yaw_rotates_box() {
        let mut mesh = TriangleMesh::new();
        mesh.push_box(
            &Vec3::new(250.0, 65.0, 120.0),
            &Point3::new(1000.0, 0.0, 0.0),
            std::f64::consts::FRAC_PI_2,
        );
        let (mut min_z, mut max_z) = (f64::MAX, f64::MIN);
        for i in 0..mesh.num_vertices() {
            let v = corner(&mesh, i);
            min_z = min_z.min(v.z);
            max_z = max_z.max(v.z);
            assert!((v.x - 1000.0).abs() <= 60.0 + 1e-3);
        }
        assert!((max_z - min_z - 250.0).abs() < 1e-3);
    }

    #[test]
    fn building_mesh_has_one_box_per_brick() {
        let fp = Dimensions::new(2000.0, 1500.0, 300.0);
        let building = assemble_building(&fp, &STANDARD_BRICK, 10.0, BondType::OneBrick);
        let mesh = building_mesh(&building);
        assert_eq!(mesh.num_triangles(), building.placed_count() * 12);
    }
}
