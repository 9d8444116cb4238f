//! One full recomputation: validate, assemble, estimate.

use brickwall_scene::{SceneBrick, SceneDocument, SceneSummary, SceneWall, Vec3 as SceneVec3};

use crate::assembly::{assemble_building, Building, PlacedWall};
use crate::design::Design;
use crate::error::Result;
use crate::estimate::estimate_brick_count;

/// Everything derived from one design.
///
/// `estimated_count` comes from facade area and `placed_count()` from the
/// laid-out model. They usually differ by a few percent and are shown side
/// by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The validated input.
    pub design: Design,
    /// Derived wall thickness (mm).
    pub thickness: f64,
    /// Area-based brick estimate.
    pub estimated_count: u64,
    /// The assembled walls.
    pub building: Building,
}

impl Report {
    /// Bricks actually laid out across all walls.
    pub fn placed_count(&self) -> u64 {
        self.building.placed_count() as u64
    }

    /// Convert to the renderer handoff document.
    pub fn to_scene(&self) -> SceneDocument {
        let house = self.design.house;
        let mut doc = SceneDocument::new(SceneSummary {
            wall_type: self.design.bond.name().to_string(),
            footprint: SceneVec3::new(house.length, house.width, house.height),
            wall_thickness: self.thickness,
            estimated_brick_count: self.estimated_count,
            placed_brick_count: self.placed_count(),
        });
        doc.walls = self.building.walls.iter().map(scene_wall).collect();
        doc
    }
}

fn scene_wall(wall: &PlacedWall) -> SceneWall {
    let t = wall.transform.translation;
    SceneWall {
        side: wall.side,
        length: wall.spec.length,
        omitted: wall.omitted,
        translation: SceneVec3::new(t.x, t.y, t.z),
        yaw_degrees: wall.transform.yaw_degrees(),
        bricks: wall
            .bricks
            .iter()
            .map(|b| SceneBrick {
                size: SceneVec3::new(b.size.x, b.size.y, b.size.z),
                center: SceneVec3::new(b.center.x, b.center.y, b.center.z),
                yaw_degrees: b.yaw.to_degrees(),
                kind: b.kind,
                course: b.course,
            })
            .collect(),
    }
}

/// Validate `design` and derive the full report.
pub fn compute(design: &Design) -> Result<Report> {
    design.validate()?;

    let thickness = design.wall_thickness();
    tracing::debug!(bond = %design.bond, thickness, "assembling building");

    let building = assemble_building(&design.house, &design.brick, design.mortar, design.bond);
    let estimated_count = estimate_brick_count(
        &design.house,
        &design.brick,
        design.mortar,
        design.bond,
        thickness,
    );

    tracing::info!(
        estimated = estimated_count,
        placed = building.placed_count(),
        "brick counts"
    );

    Ok(Report {
        design: *design,
        thickness,
        estimated_count,
        building,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bond::BondType;
    use crate::design::Dimensions;
    use crate::error::{BrickError, Field};
    use brickwall_scene::WallSide;

    #[test]
    fn compute_default_design() {
        let report = compute(&Design::default()).unwrap();
        assert_eq!(report.thickness, 120.0);
        assert_eq!(report.estimated_count, 3004);
        assert!(report.placed_count() > 0);
    }

    #[test]
    fn counts_are_independent() {
        for bond in BondType::ALL {
            let design = Design {
                bond,
                ..Default::default()
            };
            let report = compute(&design).unwrap();
            assert!(report.placed_count() > 0);
            assert!(report.estimated_count > 0);
        }
    }

    #[test]
    fn invalid_design_is_rejected() {
        let design = Design {
            house: Dimensions::new(-1.0, 4000.0, 3000.0),
            ..Default::default()
        };
        match compute(&design) {
            Err(BrickError::Validation(errors)) => assert!(errors.contains(Field::HouseLength)),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn scene_mirrors_report() {
        let report = compute(&Design::default()).unwrap();
        let scene = report.to_scene();
        assert_eq!(scene.summary.wall_type, "half-brick");
        assert_eq!(scene.summary.estimated_brick_count, report.estimated_count);
        assert_eq!(scene.summary.placed_brick_count, report.placed_count());
        assert_eq!(scene.brick_count() as u64, report.placed_count());
        assert_eq!(scene.walls.len(), 4);
        let right = scene.wall(WallSide::Right).unwrap();
        assert_eq!(right.length, 3760.0);
        assert!((right.yaw_degrees - 90.0).abs() < 1e-9);
    }
}
