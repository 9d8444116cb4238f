//! Design input: TOML design files and raw text fields.
//!
//! Inputs are layered. [`Design::default`] is the base, a [`DesignFile`]
//! overrides whatever it sets, and flags or form fields override that. Both
//! layers are carried as a [`RawDesign`] (values still unparsed), so a bad
//! value in a file is reported against its field exactly like a bad flag.
//! Only the final merged design is validated, so every bad field is
//! reported in one pass.

use serde::{Deserialize, Serialize};
use std::path::Path;
use toml::Value;

use crate::bond::BondType;
use crate::design::Design;
use crate::error::{Field, Result, ValidationErrors};

/// Optional size overrides from a design file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialDimensions {
    /// Length override (mm).
    pub length: Option<Value>,
    /// Width override (mm).
    pub width: Option<Value>,
    /// Height override (mm).
    pub height: Option<Value>,
}

/// A design as written in a `.toml` file. Every key is optional.
///
/// Only the table layout is checked when parsing; values are checked by
/// [`RawDesign::resolve`].
///
/// ```toml
/// wall_type = "one-and-a-half"
/// mortar = 10.0
///
/// [house]
/// length = 6000.0
/// width = 4000.0
/// height = 3000.0
///
/// [brick]
/// length = 250.0
/// width = 120.0
/// height = 65.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignFile {
    /// Bond / wall type.
    pub wall_type: Option<Value>,
    /// Mortar joint (mm).
    pub mortar: Option<Value>,
    /// Footprint and wall height.
    #[serde(default)]
    pub house: PartialDimensions,
    /// Brick size.
    #[serde(default)]
    pub brick: PartialDimensions,
}

impl DesignFile {
    /// Parse a design file from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a design file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let file = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded design file");
        Ok(file)
    }

    /// The values set in this file, as unparsed fields.
    pub fn to_raw(&self) -> RawDesign {
        let text = |v: &Option<Value>| v.as_ref().map(value_text);
        RawDesign {
            house_length: text(&self.house.length),
            house_width: text(&self.house.width),
            house_height: text(&self.house.height),
            brick_length: text(&self.brick.length),
            brick_width: text(&self.brick.width),
            brick_height: text(&self.brick.height),
            mortar: text(&self.mortar),
            wall_type: text(&self.wall_type),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        other => other.to_string(),
    }
}

/// Unparsed field values, as typed into a form or passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDesign {
    /// Footprint length.
    pub house_length: Option<String>,
    /// Footprint width.
    pub house_width: Option<String>,
    /// Wall height.
    pub house_height: Option<String>,
    /// Brick length.
    pub brick_length: Option<String>,
    /// Brick width.
    pub brick_width: Option<String>,
    /// Brick height.
    pub brick_height: Option<String>,
    /// Mortar joint.
    pub mortar: Option<String>,
    /// Wall type name.
    pub wall_type: Option<String>,
}

impl RawDesign {
    /// Text set for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::HouseLength => &self.house_length,
            Field::HouseWidth => &self.house_width,
            Field::HouseHeight => &self.house_height,
            Field::BrickLength => &self.brick_length,
            Field::BrickWidth => &self.brick_width,
            Field::BrickHeight => &self.brick_height,
            Field::Mortar => &self.mortar,
            Field::WallType => &self.wall_type,
        };
        slot.as_deref()
    }

    /// Set the text for `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::HouseLength => self.house_length = value,
            Field::HouseWidth => self.house_width = value,
            Field::HouseHeight => self.house_height = value,
            Field::BrickLength => self.brick_length = value,
            Field::BrickWidth => self.brick_width = value,
            Field::BrickHeight => self.brick_height = value,
            Field::Mortar => self.mortar = value,
            Field::WallType => self.wall_type = value,
        }
    }

    /// Take every field set in `other`, keeping ours where `other` is unset.
    pub fn overlay(&mut self, other: &RawDesign) {
        for field in Field::ALL {
            if let Some(text) = other.get(field) {
                self.set(field, text);
            }
        }
    }

    /// Parse the fields that are set, overlay them onto `base`, and validate
    /// the result.
    ///
    /// Text that does not parse is reported once per field and is not
    /// re-reported by the numeric range checks.
    pub fn resolve(&self, base: Design) -> std::result::Result<Design, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut design = base;

        for field in Field::ALL {
            let Some(text) = self.get(field) else {
                continue;
            };
            let Some(slot) = number_slot(&mut design, field) else {
                match text.parse::<BondType>() {
                    Ok(bond) => design.bond = bond,
                    Err(e) => errors.push(field, e.to_string()),
                }
                continue;
            };
            match text.trim().parse::<f64>() {
                Ok(value) => *slot = value,
                Err(_) => errors.push(field, format!("'{}' is not a number", text.trim())),
            }
        }

        if let Err(range) = design.validate() {
            errors.merge(range);
        }
        errors.into_result().map(|()| design)
    }
}

fn number_slot(design: &mut Design, field: Field) -> Option<&mut f64> {
    match field {
        Field::HouseLength => Some(&mut design.house.length),
        Field::HouseWidth => Some(&mut design.house.width),
        Field::HouseHeight => Some(&mut design.house.height),
        Field::BrickLength => Some(&mut design.brick.length),
        Field::BrickWidth => Some(&mut design.brick.width),
        Field::BrickHeight => Some(&mut design.brick.height),
        Field::Mortar => Some(&mut design.mortar),
        Field::WallType => None,
    }
}
