//! Scene documents for the brickwall renderer handoff.
//!
//! A [`SceneDocument`] is the sole contract between the layout engine and
//! whatever draws the walls. It is purely declarative: every brick is an
//! oriented box in building coordinates, grouped per wall, plus the two
//! brick counts (area estimate and placed) reported side by side.
//!
//! The building frame is right-handed with Y up, X along the footprint
//! length and Z along the footprint width. Units are millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current scene format version.
pub const SCENE_VERSION: &str = "0.1";

/// 3D vector with f64 components (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Which side of the footprint a wall stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    /// +Z side, full footprint length.
    Front,
    /// −Z side, full footprint length.
    Back,
    /// −X side, between the front and back walls.
    Left,
    /// +X side, between the front and back walls.
    Right,
}

impl WallSide {
    /// All sides in assembly order.
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    /// Lowercase name used in documents and logs.
    pub fn name(&self) -> &'static str {
        match self {
            WallSide::Front => "front",
            WallSide::Back => "back",
            WallSide::Left => "left",
            WallSide::Right => "right",
        }
    }
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// How a brick was cut, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickKind {
    /// Uncut brick.
    #[default]
    Full,
    /// Half-length piece starting an offset course.
    Bat,
    /// Piece clipped to the end of the course.
    Closer,
}

/// One brick, as an oriented box in building coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBrick {
    /// Box size in the brick's own axes: x = length along the wall,
    /// y = height, z = depth through the wall.
    pub size: Vec3,
    /// Box centre in building coordinates.
    pub center: Vec3,
    /// Rotation about the vertical axis in degrees.
    pub yaw_degrees: f64,
    /// Cut kind.
    #[serde(default)]
    pub kind: BrickKind,
    /// Course (row) index, 0 at the base.
    pub course: u32,
}

/// One wall of the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneWall {
    /// Footprint side.
    pub side: WallSide,
    /// Effective wall length (mm).
    pub length: f64,
    /// True when the wall had no span left and was not generated.
    #[serde(default)]
    pub omitted: bool,
    /// Translation of the wall's local origin in building coordinates.
    pub translation: Vec3,
    /// Rotation of the wall about the vertical axis in degrees.
    pub yaw_degrees: f64,
    /// Bricks in building coordinates.
    pub bricks: Vec<SceneBrick>,
}

/// Derived quantities shown next to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSummary {
    /// Bond name (e.g. "one-and-a-half-brick").
    pub wall_type: String,
    /// Footprint length, width and wall height.
    pub footprint: Vec3,
    /// Derived wall thickness (mm).
    pub wall_thickness: f64,
    /// Area-based brick estimate.
    pub estimated_brick_count: u64,
    /// Number of bricks actually laid out in the model.
    pub placed_brick_count: u64,
}

/// A brickwall scene, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Format version string.
    pub version: String,
    /// Derived quantities.
    pub summary: SceneSummary,
    /// Walls in assembly order (front, back, left, right).
    pub walls: Vec<SceneWall>,
}

impl SceneDocument {
    /// Create a document with no walls.
    pub fn new(summary: SceneSummary) -> Self {
        Self {
            version: SCENE_VERSION.to_string(),
            summary,
            walls: Vec::new(),
        }
    }

    /// Total number of bricks across all walls.
    pub fn brick_count(&self) -> usize {
        self.walls.iter().map(|w| w.bricks.len()).sum()
    }

    /// Look up a wall by side.
    pub fn wall(&self, side: WallSide) -> Option<&SceneWall> {
        self.walls.iter().find(|w| w.side == side)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SceneSummary {
        SceneSummary {
            wall_type: "half".to_string(),
            footprint: Vec3::new(6000.0, 4000.0, 3000.0),
            wall_thickness: 120.0,
            estimated_brick_count: 3004,
            placed_brick_count: 1,
        }
    }

    #[test]
    fn roundtrip_document() {
        let mut doc = SceneDocument::new(summary());
        doc.walls.push(SceneWall {
            side: WallSide::Front,
            length: 6000.0,
            omitted: false,
            translation: Vec3::new(0.0, 0.0, 1940.0),
            yaw_degrees: 0.0,
            bricks: vec![SceneBrick {
                size: Vec3::new(250.0, 65.0, 120.0),
                center: Vec3::new(-2875.0, 32.5, 1940.0),
                yaw_degrees: 0.0,
                kind: BrickKind::Full,
                course: 0,
            }],
        });
        doc.walls.push(SceneWall {
            side: WallSide::Left,
            length: 0.0,
            omitted: true,
            translation: Vec3::new(-2940.0, 0.0, 0.0),
            yaw_degrees: -90.0,
            bricks: Vec::new(),
        });

        let json = doc.to_json().expect("serialize");
        let restored = SceneDocument::from_json(&json).expect("deserialize");

        assert_eq!(doc, restored);
        assert_eq!(restored.brick_count(), 1);
        assert!(restored.wall(WallSide::Left).unwrap().omitted);
        assert!(restored.wall(WallSide::Right).is_none());
    }

    #[test]
    fn empty_document() {
        let doc = SceneDocument::new(summary());
        assert_eq!(doc.version, SCENE_VERSION);
        assert!(doc.walls.is_empty());
        assert_eq!(doc.brick_count(), 0);
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&WallSide::Right).unwrap();
        assert_eq!(json, r#""right""#);
        let json = serde_json::to_string(&BrickKind::Closer).unwrap();
        assert_eq!(json, r#""closer""#);
        let restored: BrickKind = serde_json::from_str(r#""bat""#).unwrap();
        assert_eq!(restored, BrickKind::Bat);
    }

    #[test]
    fn kind_defaults_to_full() {
        let json = r#"{"size":{"x":1.0,"y":1.0,"z":1.0},"center":{"x":0.0,"y":0.0,"z":0.0},"yaw_degrees":0.0,"course":3}"#;
        let brick: SceneBrick = serde_json::from_str(json).unwrap();
        assert_eq!(brick.kind, BrickKind::Full);
        assert_eq!(brick.course, 3);
    }
}
