//! Error types for brickwall.

use std::fmt;
use thiserror::Error;

/// An input field of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Footprint length (X extent).
    HouseLength,
    /// Footprint width (Z extent).
    HouseWidth,
    /// Wall height.
    HouseHeight,
    /// Brick length.
    BrickLength,
    /// Brick width.
    BrickWidth,
    /// Brick height.
    BrickHeight,
    /// Mortar joint thickness.
    Mortar,
    /// Bond / wall type.
    WallType,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::HouseLength,
        Field::HouseWidth,
        Field::HouseHeight,
        Field::BrickLength,
        Field::BrickWidth,
        Field::BrickHeight,
        Field::Mortar,
        Field::WallType,
    ];

    /// Snake-case field name, as used in design files and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::HouseLength => "house_length",
            Field::HouseWidth => "house_width",
            Field::HouseHeight => "house_height",
            Field::BrickLength => "brick_length",
            Field::BrickWidth => "brick_width",
            Field::BrickHeight => "brick_height",
            Field::Mortar => "mortar",
            Field::WallType => "wall_type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: Field,
    /// Human-readable reason.
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    /// Per-field failures.
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: Field, reason: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    /// True if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True if `field` has at least one failure.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }

    /// Failures for a single field.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.fields.iter().filter(move |e| e.field == field)
    }

    /// Append all failures from `other` whose field has not failed yet.
    pub fn merge(&mut self, other: ValidationErrors) {
        for err in other.fields {
            if !self.contains(err.field) {
                self.fields.push(err);
            }
        }
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(mut self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            self.fields
                .sort_by_key(|e| Field::ALL.iter().position(|f| *f == e.field));
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors that can occur while computing or exporting a design.
#[derive(Error, Debug)]
pub enum BrickError {
    /// One or more input fields were rejected.
    #[error("invalid design: {0}")]
    Validation(#[from] ValidationErrors),

    /// Design file could not be parsed.
    #[error("invalid design file: {0}")]
    Config(#[from] toml::de::Error),

    /// Scene document could not be serialized.
    #[error("scene serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The export has no bricks to write.
    #[error("empty geometry")]
    EmptyGeometry,
}

/// Result type for brickwall operations.
pub type Result<T> = std::result::Result<T, BrickError>;
