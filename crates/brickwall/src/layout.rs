//! Course-by-course brick layout for a single wall.
//!
//! Wall-local frame: X runs along the wall from −length/2 to +length/2,
//! Y is up from the wall base, Z runs through the thickness with +Z on the
//! outer face.

use brickwall_math::{Point3, Tolerance};
use brickwall_scene::BrickKind;

use crate::bond::{BondType, LayerSpec};
use crate::design::Dimensions;

/// Lower bound for the minimum fragment length (mm).
pub const MIN_FRAGMENT_FLOOR: f64 = 20.0;

/// Shortest cut piece worth laying; anything shorter is left out.
pub fn min_fragment_length(brick: &Dimensions) -> f64 {
    (brick.length / 10.0).max(MIN_FRAGMENT_FLOOR)
}

/// Number of courses needed to reach `wall_height`.
pub fn row_count(wall_height: f64, brick_height: f64, mortar: f64) -> usize {
    let pitch = brick_height + mortar;
    if !(wall_height > 0.0) || !(pitch > 0.0) {
        return 0;
    }
    (wall_height / pitch).ceil() as usize
}

/// One brick in wall-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickPlacement {
    /// Extent along the wall (local X).
    pub length: f64,
    /// Extent up the wall (local Y).
    pub height: f64,
    /// Extent through the wall (local Z).
    pub depth: f64,
    /// Box centre.
    pub center: Point3,
    /// Cut kind.
    pub kind: BrickKind,
    /// Course index, 0 at the base.
    pub course: u32,
}

impl BrickPlacement {
    /// Local X of the brick's left end.
    pub fn min_x(&self) -> f64 {
        self.center.x - self.length / 2.0
    }

    /// Local X of the brick's right end.
    pub fn max_x(&self) -> f64 {
        self.center.x + self.length / 2.0
    }
}

/// Layout of one wall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallLayout {
    /// Bricks, course by course, outer leaf first, left to right.
    pub placements: Vec<BrickPlacement>,
    /// Courses laid.
    pub rows: usize,
}

impl WallLayout {
    /// Number of bricks laid.
    pub fn count(&self) -> usize {
        self.placements.len()
    }

    /// Bricks in course `row`.
    pub fn course(&self, row: usize) -> impl Iterator<Item = &BrickPlacement> {
        self.placements
            .iter()
            .filter(move |p| p.course as usize == row)
    }
}

/// Lay out every course of a wall.
///
/// Pure: the same arguments always produce the same layout. A wall with no
/// length or height yields an empty layout.
pub fn lay_out_wall(
    wall_length: f64,
    wall_height: f64,
    brick: &Dimensions,
    mortar: f64,
    bond: BondType,
) -> WallLayout {
    let mut layout = WallLayout::default();
    if !(wall_length > 0.0) || !(wall_height > 0.0) {
        return layout;
    }

    let pitch = brick.height + mortar;
    let rows = row_count(wall_height, brick.height, mortar);
    let min_fragment = min_fragment_length(brick);

    for row in 0..rows {
        let base = row as f64 * pitch;
        if base >= wall_height {
            break;
        }

        for layer in bond.layers(row, brick, mortar) {
            let course = Course {
                row,
                center_y: base + brick.height / 2.0,
                layer,
                brick,
                mortar,
                wall_length,
                min_fragment,
            };
            course.lay(&mut layout.placements);
        }
        layout.rows += 1;
    }

    if layout.placements.is_empty() {
        tracing::warn!(
            wall_length,
            wall_height,
            %bond,
            "wall too short for any brick"
        );
    }

    layout
}

/// One leaf of one course.
struct Course<'a> {
    row: usize,
    center_y: f64,
    layer: LayerSpec,
    brick: &'a Dimensions,
    mortar: f64,
    wall_length: f64,
    min_fragment: f64,
}

impl Course<'_> {
    fn lay(&self, out: &mut Vec<BrickPlacement>) {
        let tol = Tolerance::DEFAULT.linear;
        let unit = self.layer.orientation.face_length(self.brick);
        let pitch = unit + self.mortar;
        let end = self.wall_length / 2.0;
        let mut cursor = -end;

        if self.row % 2 == 1 {
            let bat = unit / 2.0;
            if bat >= self.min_fragment && bat <= self.wall_length + tol {
                out.push(self.brick_at(cursor, bat, BrickKind::Bat));
                cursor += bat + self.mortar;
            } else {
                tracing::trace!(row = self.row, bat, "bat below minimum, shifting by half a pitch");
                cursor += pitch / 2.0;
            }
        }

        loop {
            let remaining = end - cursor;
            if remaining <= tol {
                break;
            }
            if remaining + tol >= unit {
                out.push(self.brick_at(cursor, unit, BrickKind::Full));
                cursor += pitch;
                continue;
            }
            if remaining >= self.min_fragment {
                out.push(self.brick_at(cursor, remaining, BrickKind::Closer));
            } else {
                tracing::trace!(row = self.row, remaining, "dropping sliver at course end");
            }
            break;
        }
    }

    fn brick_at(&self, start: f64, length: f64, kind: BrickKind) -> BrickPlacement {
        BrickPlacement {
            length,
            height: self.brick.height,
            depth: self.layer.depth,
            center: Point3::new(start + length / 2.0, self.center_y, self.layer.offset),
            kind,
            course: self.row as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::STANDARD_BRICK;
    use approx::assert_relative_eq;

    #[test]
    fn row_count_examples() {
        assert_eq!(row_count(3000.0, 65.0, 10.0), 40);
        assert_eq!(row_count(75.0, 65.0, 10.0), 1);
        assert_eq!(row_count(76.0, 65.0, 10.0), 2);
        assert_eq!(row_count(0.0, 65.0, 10.0), 0);
    }

    #[test]
    fn min_fragment_has_floor() {
        assert_eq!(min_fragment_length(&STANDARD_BRICK), 25.0);
        assert_eq!(min_fragment_length(&Dimensions::new(100.0, 50.0, 30.0)), 20.0);
    }

    #[test]
    fn layout_is_pure() {
        let a = lay_out_wall(3760.0, 3000.0, &STANDARD_BRICK, 10.0, BondType::OnePointFiveBrick);
        let b = lay_out_wall(3760.0, 3000.0, &STANDARD_BRICK, 10.0, BondType::OnePointFiveBrick);
        assert_eq!(a, b);
        assert!(a.count() > 0);
    }

    #[test]
    fn half_brick_wall_has_forty_courses() {
        let layout = lay_out_wall(6000.0, 3000.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        assert_eq!(layout.rows, 40);
        let top = layout.course(39).next().unwrap();
        assert_relative_eq!(top.center.y, 39.0 * 75.0 + 32.5);
        assert!(layout.course(40).next().is_none());
    }

    #[test]
    fn even_course_starts_at_wall_end_with_full_bricks() {
        let layout = lay_out_wall(6000.0, 75.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        let row: Vec<_> = layout.course(0).collect();
        assert_relative_eq!(row[0].min_x(), -3000.0);
        assert_eq!(row[0].kind, BrickKind::Full);
        // 23 bricks and their joints take 5980 mm; the 20 mm left is a sliver
        assert_eq!(row.len(), 23);
        assert!(row.iter().all(|b| b.kind == BrickKind::Full));
        assert!(row.last().unwrap().max_x() <= 3000.0 + 1e-9);
    }

    #[test]
    fn odd_course_starts_with_bat() {
        let layout = lay_out_wall(6000.0, 150.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        let row: Vec<_> = layout.course(1).collect();
        assert_eq!(row[0].kind, BrickKind::Bat);
        assert_relative_eq!(row[0].length, 125.0);
        assert_relative_eq!(row[0].min_x(), -3000.0);
        assert_relative_eq!(row[1].min_x(), -3000.0 + 135.0);
    }

    #[test]
    fn running_bond_offset_is_about_half_a_pitch() {
        let layout = lay_out_wall(6000.0, 150.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        let first_even = layout.course(0).next().unwrap();
        let first_odd_full = layout
            .course(1)
            .find(|b| b.kind == BrickKind::Full)
            .unwrap();
        let shift = first_odd_full.min_x() - first_even.min_x();
        assert_relative_eq!(shift, 130.0, epsilon = 10.0);
    }

    #[test]
    fn short_bat_degenerates_to_half_pitch_shift() {
        // bat = 15 mm is below the 20 mm floor
        let brick = Dimensions::new(30.0, 20.0, 10.0);
        let layout = lay_out_wall(400.0, 40.0, &brick, 10.0, BondType::HalfBrick);
        let row: Vec<_> = layout.course(1).collect();
        assert!(row.iter().all(|b| b.kind != BrickKind::Bat));
        assert_relative_eq!(row[0].min_x(), -200.0 + 20.0);
    }

    #[test]
    fn closer_clips_to_wall_end() {
        // 1000 mm: 3 full bricks (780 mm incl. joints), then a 220 mm closer
        let layout = lay_out_wall(1000.0, 75.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        let row: Vec<_> = layout.course(0).collect();
        assert_eq!(row.len(), 4);
        let closer = row[3];
        assert_eq!(closer.kind, BrickKind::Closer);
        assert_relative_eq!(closer.length, 220.0, epsilon = 1e-9);
        assert_relative_eq!(closer.max_x(), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn every_placement_has_positive_size() {
        for bond in BondType::ALL {
            for length in [30.0, 137.0, 1000.0, 3760.0] {
                let layout = lay_out_wall(length, 500.0, &STANDARD_BRICK, 10.0, bond);
                for p in &layout.placements {
                    assert!(p.length >= min_fragment_length(&STANDARD_BRICK) - 1e-9);
                    assert!(p.height > 0.0 && p.depth > 0.0);
                    assert!(p.min_x() >= -length / 2.0 - 1e-9);
                    assert!(p.max_x() <= length / 2.0 + 1e-6);
                }
            }
        }
    }

    #[test]
    fn degenerate_wall_is_empty() {
        assert_eq!(lay_out_wall(0.0, 3000.0, &STANDARD_BRICK, 10.0, BondType::OneBrick).count(), 0);
        assert_eq!(lay_out_wall(-50.0, 3000.0, &STANDARD_BRICK, 10.0, BondType::OneBrick).count(), 0);
        assert_eq!(lay_out_wall(1000.0, 0.0, &STANDARD_BRICK, 10.0, BondType::OneBrick).count(), 0);
    }

    #[test]
    fn wall_shorter_than_min_fragment_lays_nothing() {
        let layout = lay_out_wall(15.0, 300.0, &STANDARD_BRICK, 10.0, BondType::HalfBrick);
        assert_eq!(layout.count(), 0);
        assert_eq!(layout.rows, 4);
    }

    #[test]
    fn one_brick_courses_alternate_element_length() {
        let layout = lay_out_wall(2000.0, 150.0, &STANDARD_BRICK, 10.0, BondType::OneBrick);
        let header = layout.course(0).next().unwrap();
        assert_relative_eq!(header.length, 120.0);
        assert_relative_eq!(header.depth, 250.0);
        let stretcher = layout
            .course(1)
            .find(|b| b.kind == BrickKind::Full)
            .unwrap();
        assert_relative_eq!(stretcher.length, 250.0);
        assert_relative_eq!(stretcher.depth, 250.0);
    }

    #[test]
    fn two_brick_leaves_stay_aligned() {
        let layout = lay_out_wall(3000.0, 150.0, &STANDARD_BRICK, 10.0, BondType::TwoBrick);
        for row in 0..2 {
            let outer: Vec<_> = layout.course(row).filter(|b| b.center.z > 0.0).collect();
            let inner: Vec<_> = layout.course(row).filter(|b| b.center.z < 0.0).collect();
            assert_eq!(outer.len(), inner.len());
            for (o, i) in outer.iter().zip(&inner) {
                assert_relative_eq!(o.center.x, i.center.x);
                assert_relative_eq!(o.length, i.length);
            }
        }
    }
}
