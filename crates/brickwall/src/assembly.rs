//! Four-wall assembly: effective wall lengths and wall placement in the
//! building frame.
//!
//! Front and back walls run the full footprint length; the side walls sit
//! between them and lose one wall thickness at each end. Every wall is laid
//! out in its own local frame and then moved into place, so local
//! coordinates are never shared between walls.

use std::f64::consts::{FRAC_PI_2, PI};

use brickwall_math::{Point3, Transform, Vec3};
use brickwall_scene::{BrickKind, WallSide};

use crate::bond::BondType;
use crate::design::Dimensions;
use crate::layout::{lay_out_wall, WallLayout};

/// Length, height and thickness of one wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    /// Effective length along the wall (mm).
    pub length: f64,
    /// Wall height (mm).
    pub height: f64,
    /// Wall thickness (mm).
    pub thickness: f64,
}

/// Placement of a wall's local frame in the building frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTransform {
    /// Position of the local origin (wall centre line, at the base).
    pub translation: Vec3,
    /// Rotation about the vertical axis (radians).
    pub yaw: f64,
}

impl WallTransform {
    /// Local-to-building matrix: rotate, then translate.
    pub fn matrix(&self) -> Transform {
        Transform::translation(self.translation.x, self.translation.y, self.translation.z)
            .then(&Transform::rotation_y(self.yaw))
    }

    /// Rotation in degrees.
    pub fn yaw_degrees(&self) -> f64 {
        self.yaw.to_degrees()
    }
}

/// One brick in building coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBrick {
    /// Box size in the brick's own axes (length, height, depth).
    pub size: Vec3,
    /// Box centre in building coordinates.
    pub center: Point3,
    /// Rotation about the vertical axis (radians).
    pub yaw: f64,
    /// Cut kind.
    pub kind: BrickKind,
    /// Course index.
    pub course: u32,
}

/// One assembled wall.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWall {
    /// Footprint side.
    pub side: WallSide,
    /// Effective dimensions.
    pub spec: WallSpec,
    /// Local-to-building placement.
    pub transform: WallTransform,
    /// Layout in the wall's local frame.
    pub layout: WallLayout,
    /// The same bricks in building coordinates.
    pub bricks: Vec<WorldBrick>,
    /// True when the wall had no span and was skipped.
    pub omitted: bool,
}

/// All four walls of a building.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Footprint length/width and wall height.
    pub footprint: Dimensions,
    /// Bond used for every wall.
    pub bond: BondType,
    /// Wall thickness (mm).
    pub thickness: f64,
    /// Front, back, left, right.
    pub walls: Vec<PlacedWall>,
}

impl Building {
    /// Bricks laid across all walls.
    pub fn placed_count(&self) -> usize {
        self.walls.iter().map(|w| w.bricks.len()).sum()
    }

    /// Look up a wall by side.
    pub fn wall(&self, side: WallSide) -> Option<&PlacedWall> {
        self.walls.iter().find(|w| w.side == side)
    }

    /// All bricks in building coordinates.
    pub fn bricks(&self) -> impl Iterator<Item = &WorldBrick> {
        self.walls.iter().flat_map(|w| w.bricks.iter())
    }
}

/// Span left for a side wall between the front and back walls, clamped at 0.
pub fn side_wall_length(footprint_width: f64, thickness: f64) -> f64 {
    (footprint_width - 2.0 * thickness).max(0.0)
}

/// Length and placement of the wall on `side`.
pub fn wall_frame(side: WallSide, footprint: &Dimensions, thickness: f64) -> (f64, WallTransform) {
    let z = footprint.width / 2.0 - thickness / 2.0;
    let x = footprint.length / 2.0 - thickness / 2.0;
    match side {
        WallSide::Front => (
            footprint.length,
            WallTransform {
                translation: Vec3::new(0.0, 0.0, z),
                yaw: 0.0,
            },
        ),
        WallSide::Back => (
            footprint.length,
            WallTransform {
                translation: Vec3::new(0.0, 0.0, -z),
                yaw: PI,
            },
        ),
        WallSide::Left => (
            side_wall_length(footprint.width, thickness),
            WallTransform {
                translation: Vec3::new(-x, 0.0, 0.0),
                yaw: -FRAC_PI_2,
            },
        ),
        WallSide::Right => (
            side_wall_length(footprint.width, thickness),
            WallTransform {
                translation: Vec3::new(x, 0.0, 0.0),
                yaw: FRAC_PI_2,
            },
        ),
    }
}

/// Lay out and place all four walls.
pub fn assemble_building(
    footprint: &Dimensions,
    brick: &Dimensions,
    mortar: f64,
    bond: BondType,
) -> Building {
    let thickness = bond.wall_thickness(brick, mortar);
    let walls = WallSide::ALL
        .iter()
        .map(|&side| assemble_wall(side, footprint, brick, mortar, bond, thickness))
        .collect();

    Building {
        footprint: *footprint,
        bond,
        thickness,
        walls,
    }
}

fn assemble_wall(
    side: WallSide,
    footprint: &Dimensions,
    brick: &Dimensions,
    mortar: f64,
    bond: BondType,
    thickness: f64,
) -> PlacedWall {
    let (length, transform) = wall_frame(side, footprint, thickness);
    let spec = WallSpec {
        length,
        height: footprint.height,
        thickness,
    };

    if length <= 0.0 {
        tracing::warn!(
            %side,
            footprint_width = footprint.width,
            thickness,
            "footprint too narrow for side wall, omitting it"
        );
        return PlacedWall {
            side,
            spec,
            transform,
            layout: WallLayout::default(),
            bricks: Vec::new(),
            omitted: true,
        };
    }

    let layout = lay_out_wall(length, footprint.height, brick, mortar, bond);
    let matrix = transform.matrix();
    let bricks = layout
        .placements
        .iter()
        .map(|p| WorldBrick {
            size: Vec3::new(p.length, p.height, p.depth),
            center: matrix.apply_point(&p.center),
            yaw: transform.yaw,
            kind: p.kind,
            course: p.course,
        })
        .collect::<Vec<_>>();

    tracing::debug!(%side, length, rows = layout.rows, bricks = bricks.len(), "wall laid out");

    PlacedWall {
        side,
        spec,
        transform,
        layout,
        bricks,
        omitted: false,
    }
}
