//! File output: binary STL meshes and JSON scene documents.

use std::io::Write;
use std::path::Path;

use crate::error::{BrickError, Result};
use crate::mesh::{building_mesh, TriangleMesh};
use crate::report::Report;
use crate::session::{RenderContext, SceneRenderer};

const STL_TITLE: &[u8] = b"brickwall STL export";

/// Encode a mesh as binary STL.
///
/// The building frame is Y-up; STL consumers expect Z-up, so Y and Z are
/// swapped (with Y negated to keep the handedness) on the way out.
pub fn stl_bytes(mesh: &TriangleMesh) -> Vec<u8> {
    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    let mut header = [b' '; 80];
    header[..STL_TITLE.len()].copy_from_slice(STL_TITLE);
    data.extend_from_slice(&header);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    let vertex = |i: u32| {
        let i = i as usize * 3;
        let v = &mesh.vertices[i..i + 3];
        [v[0], -v[2], v[1]]
    };

    for tri in mesh.indices.chunks_exact(3) {
        let v0 = vertex(tri[0]);
        let v1 = vertex(tri[1]);
        let v2 = vertex(tri[2]);

        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-10 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0, 0.0, 1.0)
        };

        for c in [nx, ny, nz] {
            data.extend_from_slice(&c.to_le_bytes());
        }
        for v in [v0, v1, v2] {
            for c in v {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    data
}

/// Write a mesh to a binary STL file.
pub fn write_stl(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<()> {
    if mesh.is_empty() {
        return Err(BrickError::EmptyGeometry);
    }
    std::fs::write(path, stl_bytes(mesh))?;
    Ok(())
}

/// Renderer that writes the scene document as pretty JSON.
pub struct JsonSceneWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonSceneWriter<W> {
    /// Write scenes to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SceneRenderer for JsonSceneWriter<W> {
    fn render(&mut self, report: &Report, _ctx: &RenderContext) -> Result<()> {
        let json = report.to_scene().to_json()?;
        self.out.write_all(json.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Renderer that writes every brick as a binary STL mesh.
pub struct StlWriter<W: Write> {
    out: W,
}

impl<W: Write> StlWriter<W> {
    /// Write meshes to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SceneRenderer for StlWriter<W> {
    fn render(&mut self, report: &Report, _ctx: &RenderContext) -> Result<()> {
        let mesh = building_mesh(&report.building);
        if mesh.is_empty() {
            return Err(BrickError::EmptyGeometry);
        }
        self.out.write_all(&stl_bytes(&mesh))?;
        self.out.flush()?;
        Ok(())
    }
}
