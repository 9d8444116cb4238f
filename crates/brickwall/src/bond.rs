//! Wall bonds and the per-row layer policy.
//!
//! Every bond is described the same way: for a given course it yields the
//! layers laid side by side through the wall's depth, each with a depth
//! offset, a face orientation and a box depth. The shared course routine in
//! [`crate::layout`] does the rest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::design::Dimensions;

/// Wall type, named by how many brick lengths thick the wall is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BondType {
    /// Single stretcher leaf, one brick width thick.
    #[default]
    #[serde(rename = "half-brick", alias = "half")]
    HalfBrick,
    /// Alternating stretcher and header courses, one brick length thick.
    #[serde(rename = "one-brick", alias = "one")]
    OneBrick,
    /// A header leaf and a stretcher leaf that swap sides every course.
    #[serde(
        rename = "one-and-a-half-brick",
        alias = "one-and-a-half",
        alias = "1.5"
    )]
    OnePointFiveBrick,
    /// Two stretcher leaves, each one brick length deep.
    #[serde(rename = "two-brick", alias = "two")]
    TwoBrick,
}

/// Which face of the brick shows on the wall surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Long face exposed.
    Stretcher,
    /// Short face exposed.
    Header,
}

impl Orientation {
    /// Element length along the wall for this orientation.
    pub fn face_length(&self, brick: &Dimensions) -> f64 {
        match self {
            Orientation::Stretcher => brick.length,
            Orientation::Header => brick.width,
        }
    }
}

/// One leaf of a course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    /// Centre of the leaf along the wall's depth axis (local Z, +Z outside).
    pub offset: f64,
    /// Exposed face.
    pub orientation: Orientation,
    /// Box depth through the wall.
    pub depth: f64,
}

impl LayerSpec {
    fn new(offset: f64, orientation: Orientation, depth: f64) -> Self {
        Self {
            offset,
            orientation,
            depth,
        }
    }
}

impl BondType {
    /// All bonds, thinnest first.
    pub const ALL: [BondType; 4] = [
        BondType::HalfBrick,
        BondType::OneBrick,
        BondType::OnePointFiveBrick,
        BondType::TwoBrick,
    ];

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            BondType::HalfBrick => "half-brick",
            BondType::OneBrick => "one-brick",
            BondType::OnePointFiveBrick => "one-and-a-half-brick",
            BondType::TwoBrick => "two-brick",
        }
    }

    /// Wall thickness for this bond (mm).
    pub fn wall_thickness(&self, brick: &Dimensions, mortar: f64) -> f64 {
        match self {
            BondType::HalfBrick => brick.width,
            BondType::OneBrick => brick.length,
            BondType::OnePointFiveBrick => brick.length + mortar + brick.width,
            BondType::TwoBrick => 2.0 * brick.length + mortar,
        }
    }

    /// Stretcher-face layers per unit of facade area, used by the estimator.
    pub fn layer_multiplier(&self) -> u32 {
        match self {
            BondType::HalfBrick => 1,
            BondType::OneBrick => 2,
            BondType::OnePointFiveBrick => 3,
            BondType::TwoBrick => 4,
        }
    }

    /// Leaves laid side by side in every course.
    pub fn leaf_count(&self) -> usize {
        match self {
            BondType::HalfBrick | BondType::OneBrick => 1,
            BondType::OnePointFiveBrick | BondType::TwoBrick => 2,
        }
    }

    /// Layers for course `row` (0 at the base), outer leaf first.
    pub fn layers(&self, row: usize, brick: &Dimensions, mortar: f64) -> Vec<LayerSpec> {
        let odd = row % 2 == 1;
        let thickness = self.wall_thickness(brick, mortar);
        match self {
            BondType::HalfBrick => {
                vec![LayerSpec::new(0.0, Orientation::Stretcher, brick.width)]
            }
            BondType::OneBrick => {
                let orientation = if odd {
                    Orientation::Stretcher
                } else {
                    Orientation::Header
                };
                vec![LayerSpec::new(0.0, orientation, brick.length)]
            }
            BondType::OnePointFiveBrick => {
                // Header leaves are a brick length deep, stretcher leaves a
                // brick width deep; the two leaves swap sides every course.
                let (outer, inner) = if odd {
                    (Orientation::Header, Orientation::Stretcher)
                } else {
                    (Orientation::Stretcher, Orientation::Header)
                };
                let outer_depth = leaf_depth(outer, brick);
                let inner_depth = leaf_depth(inner, brick);
                vec![
                    LayerSpec::new(thickness / 2.0 - outer_depth / 2.0, outer, outer_depth),
                    LayerSpec::new(-thickness / 2.0 + inner_depth / 2.0, inner, inner_depth),
                ]
            }
            BondType::TwoBrick => {
                let offset = (brick.length + mortar) / 2.0;
                vec![
                    LayerSpec::new(offset, Orientation::Stretcher, brick.length),
                    LayerSpec::new(-offset, Orientation::Stretcher, brick.length),
                ]
            }
        }
    }
}

fn leaf_depth(orientation: Orientation, brick: &Dimensions) -> f64 {
    match orientation {
        Orientation::Stretcher => brick.width,
        Orientation::Header => brick.length,
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised wall type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBond(pub String);

impl fmt::Display for UnknownBond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown wall type '{}' (expected half, one, one-and-a-half or two)",
            self.0
        )
    }
}

impl std::error::Error for UnknownBond {}

impl FromStr for BondType {
    type Err = UnknownBond;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "half" | "halfbrick" | "0.5" => Ok(BondType::HalfBrick),
            "one" | "onebrick" | "1" => Ok(BondType::OneBrick),
            "oneandahalf" | "oneandahalfbrick" | "onepointfive" | "onepointfivebrick" | "1.5" => {
                Ok(BondType::OnePointFiveBrick)
            }
            "two" | "twobrick" | "2" => Ok(BondType::TwoBrick),
            _ => Err(UnknownBond(s.to_string())),
        }
    }
}
