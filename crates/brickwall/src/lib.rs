#![warn(missing_docs)]

//! brickwall: parametric brick walls and brick quantities.
//!
//! Given a rectangular footprint, a brick size, a mortar joint and a wall
//! bond, this crate lays out every brick of the four exterior walls course
//! by course and estimates how many bricks the building needs.
//!
//! # Example
//!
//! ```rust
//! use brickwall::{compute, BondType, Design};
//!
//! let design = Design {
//!     bond: BondType::OnePointFiveBrick,
//!     ..Design::default()
//! };
//! let report = compute(&design).unwrap();
//! assert_eq!(report.thickness, 380.0);
//! println!("estimate: {}, placed: {}", report.estimated_count, report.placed_count());
//! ```
//!
//! The area estimate and the placed count are computed independently and
//! will not agree exactly; see [`estimate`].

pub mod assembly;
pub mod bond;
pub mod config;
pub mod design;
pub mod error;
pub mod estimate;
pub mod export;
pub mod layout;
pub mod mesh;
pub mod report;
pub mod session;

pub use assembly::{
    assemble_building, side_wall_length, wall_frame, Building, PlacedWall, WallSpec,
    WallTransform, WorldBrick,
};
pub use bond::{BondType, LayerSpec, Orientation, UnknownBond};
pub use config::{DesignFile, RawDesign};
pub use design::{Design, Dimensions, STANDARD_BRICK, STANDARD_MORTAR};
pub use error::{BrickError, Field, FieldError, Result, ValidationErrors};
pub use estimate::{bricks_per_square_meter, estimate_brick_count, facade_area_m2};
pub use export::{stl_bytes, write_stl, JsonSceneWriter, StlWriter};
pub use layout::{lay_out_wall, min_fragment_length, row_count, BrickPlacement, WallLayout};
pub use mesh::{building_mesh, TriangleMesh};
pub use report::{compute, Report};
pub use session::{Frame, RenderContext, SceneRenderer, Session};

pub use brickwall_scene::{BrickKind, SceneDocument, WallSide};
