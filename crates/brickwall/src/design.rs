//! Design parameters: footprint, brick, mortar and bond.

use serde::{Deserialize, Serialize};

use crate::bond::BondType;
use crate::error::{Field, ValidationErrors};

/// An axis-aligned box size in millimetres.
///
/// For a brick: length is the long face, width the short face, height the
/// course height. For a footprint: length runs along X, width along Z and
/// height is the wall height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Longest horizontal extent (mm).
    pub length: f64,
    /// Shorter horizontal extent (mm).
    pub width: f64,
    /// Vertical extent (mm).
    pub height: f64,
}

impl Dimensions {
    /// Create a new size.
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// Standard 250 × 120 × 65 mm brick.
pub const STANDARD_BRICK: Dimensions = Dimensions::new(250.0, 120.0, 65.0);

/// Standard 10 mm mortar joint.
pub const STANDARD_MORTAR: f64 = 10.0;

/// Most courses one wall may have.
pub const MAX_COURSES: u64 = 1_000;

/// Most bricks one leaf of one course may have.
pub const MAX_COURSE_BRICKS: u64 = 1_000;

/// Upper bound on bricks placed across the whole building.
pub const MAX_BRICKS: u64 = 1_000_000;

/// Everything needed to lay out and count a building's walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Footprint length/width and wall height (mm).
    pub house: Dimensions,
    /// Brick size (mm).
    pub brick: Dimensions,
    /// Mortar joint thickness (mm). Zero means dry stack.
    pub mortar: f64,
    /// Bond / wall type.
    #[serde(rename = "wall_type")]
    pub bond: BondType,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            house: Dimensions::new(6000.0, 4000.0, 3000.0),
            brick: STANDARD_BRICK,
            mortar: STANDARD_MORTAR,
            bond: BondType::HalfBrick,
        }
    }
}

impl Design {
    /// Derived wall thickness for this design (mm).
    pub fn wall_thickness(&self) -> f64 {
        self.bond.wall_thickness(&self.brick, self.mortar)
    }

    /// Check every numeric field, reporting all failures at once.
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let positive = [
            (Field::HouseLength, self.house.length),
            (Field::HouseWidth, self.house.width),
            (Field::HouseHeight, self.house.height),
            (Field::BrickLength, self.brick.length),
            (Field::BrickWidth, self.brick.width),
            (Field::BrickHeight, self.brick.height),
        ];
        for (field, value) in positive {
            check_positive(&mut errors, field, value);
        }

        if !self.mortar.is_finite() {
            errors.push(Field::Mortar, "must be a finite number");
        } else if self.mortar < 0.0 {
            errors.push(Field::Mortar, "must not be negative");
        }

        if errors.is_empty() {
            self.check_layout_size(&mut errors);
        }
        errors.into_result()
    }

    /// Reject designs whose layout would be too large to hold in memory.
    ///
    /// Uses a cheap upper bound: every wall as long as the longer footprint
    /// side, every course laid with the shorter exposed face.
    fn check_layout_size(&self, errors: &mut ValidationErrors) {
        let courses = (self.house.height / (self.brick.height + self.mortar)).ceil();
        if courses > MAX_COURSES as f64 {
            errors.push(
                Field::BrickHeight,
                format!("gives {} courses, more than {}", courses, MAX_COURSES),
            );
        }

        let headers = matches!(self.bond, BondType::OneBrick | BondType::OnePointFiveBrick);
        let (face, field) = if headers && self.brick.width < self.brick.length {
            (self.brick.width, Field::BrickWidth)
        } else {
            (self.brick.length, Field::BrickLength)
        };
        let span = self.house.length.max(self.house.width);
        // +1 for the bat on shifted courses
        let per_course = (span / (face + self.mortar)).ceil() + 1.0;
        if per_course > MAX_COURSE_BRICKS as f64 {
            errors.push(
                field,
                format!(
                    "gives {} bricks per course, more than {}",
                    per_course, MAX_COURSE_BRICKS
                ),
            );
        }

        if errors.is_empty() {
            let bound = courses * per_course * self.bond.leaf_count() as f64 * 4.0;
            if bound > MAX_BRICKS as f64 {
                errors.push(
                    Field::HouseLength,
                    format!("house needs up to {} bricks, more than {}", bound, MAX_BRICKS),
                );
            }
        }
    }
}

fn check_positive(errors: &mut ValidationErrors, field: Field, value: f64) {
    if !value.is_finite() {
        errors.push(field, "must be a finite number");
    } else if value <= 0.0 {
        errors.push(field, "must be greater than zero");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_design_is_valid() {
        let design = Design::default();
        assert!(design.validate().is_ok());
        assert_eq!(design.wall_thickness(), 120.0);
    }

    #[test]
    fn zero_mortar_is_allowed() {
        let design = Design {
            mortar: 0.0,
            ..Default::default()
        };
        assert!(design.validate().is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let design = Design {
            house: Dimensions::new(0.0, -5.0, f64::NAN),
            brick: Dimensions::new(250.0, f64::INFINITY, 65.0),
            mortar: -1.0,
            bond: BondType::OneBrick,
        };
        let errors = design.validate().unwrap_err();
        assert_eq!(errors.fields.len(), 5);
        assert!(errors.contains(Field::HouseLength));
        assert!(errors.contains(Field::HouseWidth));
        assert!(errors.contains(Field::HouseHeight));
        assert!(errors.contains(Field::BrickWidth));
        assert!(errors.contains(Field::Mortar));
        assert!(!errors.contains(Field::BrickLength));
    }

    #[test]
    fn non_finite_reason() {
        let design = Design {
            mortar: f64::NAN,
            ..Default::default()
        };
        let errors = design.validate().unwrap_err();
        assert_eq!(errors.fields[0].reason, "must be a finite number");
    }

    #[test]
    fn tiny_bricks_are_rejected() {
        let design = Design {
            brick: Dimensions::new(1.0, 1.0, 1.0),
            mortar: 0.0,
            bond: BondType::TwoBrick,
            ..Default::default()
        };
        let errors = design.validate().unwrap_err();
        assert_eq!(
            errors.for_field(Field::BrickHeight).next().unwrap().reason,
            "gives 3000 courses, more than 1000"
        );
        assert_eq!(
            errors.for_field(Field::BrickLength).next().unwrap().reason,
            "gives 6001 bricks per course, more than 1000"
        );
        assert_eq!(errors.fields.len(), 2);
    }

    #[test]
    fn header_courses_check_brick_width() {
        let design = Design {
            brick: Dimensions::new(250.0, 2.0, 65.0),
            mortar: 0.0,
            bond: BondType::OneBrick,
            ..Default::default()
        };
        let errors = design.validate().unwrap_err();
        assert!(errors.contains(Field::BrickWidth));
        assert!(!errors.contains(Field::BrickLength));

        let stretchers = Design {
            bond: BondType::HalfBrick,
            ..design
        };
        assert!(stretchers.validate().is_ok());
    }

    #[test]
    fn huge_house_is_rejected() {
        let design = Design {
            house: Dimensions::new(250_000.0, 250_000.0, 50_000.0),
            ..Default::default()
        };
        // 667 courses of 963 bricks on four walls
        let errors = design.validate().unwrap_err();
        assert_eq!(errors.fields.len(), 1);
        assert_eq!(
            errors.fields[0].reason,
            "house needs up to 2569284 bricks, more than 1000000"
        );
        assert_eq!(errors.fields[0].field, Field::HouseLength);
    }

    #[test]
    fn large_but_sane_house_is_accepted() {
        let design = Design {
            house: Dimensions::new(60_000.0, 40_000.0, 12_000.0),
            bond: BondType::TwoBrick,
            ..Default::default()
        };
        assert!(design.validate().is_ok());
    }
}
