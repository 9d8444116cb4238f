//! Area-based brick quantity estimate.
//!
//! This is deliberately coarser than the laid-out model: it counts facade
//! area against a single stretcher leaf and scales by the bond's layer
//! multiplier. Cut pieces, dropped slivers and header courses make the
//! placed count drift from this figure. Both numbers are reported; neither
//! is corrected towards the other.

use crate::assembly::side_wall_length;
use crate::bond::BondType;
use crate::design::Dimensions;

const MM2_PER_M2: f64 = 1_000_000.0;
const MM_PER_M: f64 = 1000.0;

/// Outer facade area of all four walls in square metres.
///
/// Side walls use their clamped effective length.
pub fn facade_area_m2(footprint: &Dimensions, thickness: f64) -> f64 {
    let front_back = 2.0 * footprint.length * footprint.height;
    let sides = 2.0 * side_wall_length(footprint.width, thickness) * footprint.height;
    (front_back + sides) / MM2_PER_M2
}

/// Bricks per square metre of a single stretcher leaf, joints included.
pub fn bricks_per_square_meter(brick: &Dimensions, mortar: f64) -> f64 {
    let course_length = (brick.length + mortar) / MM_PER_M;
    let course_height = (brick.height + mortar) / MM_PER_M;
    1.0 / (course_length * course_height)
}

/// Estimated number of bricks for the whole building, rounded up.
pub fn estimate_brick_count(
    footprint: &Dimensions,
    brick: &Dimensions,
    mortar: f64,
    bond: BondType,
    thickness: f64,
) -> u64 {
    let area = facade_area_m2(footprint, thickness);
    if !(area > 0.0) {
        return 0;
    }
    let per_m2 = bricks_per_square_meter(brick, mortar);
    (area * per_m2 * f64::from(bond.layer_multiplier())).ceil() as u64
}
