//! Recompute-and-render state.
//!
//! A [`Session`] owns the only result that survives between recomputations
//! and replaces it wholesale. Renderers never see global state: they get
//! the report and an explicit [`RenderContext`] on every call.

use brickwall_math::Point3;

use crate::assembly::Building;
use crate::design::Design;
use crate::error::{BrickError, Result, ValidationErrors};
use crate::report::{compute, Report};

/// Camera distance as a multiple of the building's bounding diagonal.
pub const CAMERA_DISTANCE_FACTOR: f64 = 1.5;

/// What the session currently holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Frame {
    /// Nothing computed yet.
    #[default]
    Empty,
    /// Last recomputation succeeded.
    Ready(Report),
    /// Last recomputation was rejected; the previous result is gone.
    Invalid(ValidationErrors),
}

/// Per-call view parameters handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Point the camera looks at: footprint centre at half wall height.
    pub target: Point3,
    /// Suggested camera distance from `target` (mm).
    pub distance: f64,
    /// Number of frames rendered before this one in the session.
    pub frame: u64,
}

impl RenderContext {
    /// View framing the whole building.
    pub fn for_building(building: &Building, frame: u64) -> Self {
        let fp = building.footprint;
        let diagonal = (fp.length * fp.length + fp.width * fp.width + fp.height * fp.height).sqrt();
        Self {
            target: Point3::new(0.0, fp.height / 2.0, 0.0),
            distance: diagonal * CAMERA_DISTANCE_FACTOR,
            frame,
        }
    }
}

/// Consumer of assembled walls (scene graph, file writer, viewer...).
pub trait SceneRenderer {
    /// Draw a freshly computed report.
    fn render(&mut self, report: &Report, ctx: &RenderContext) -> Result<()>;

    /// Drop whatever was drawn last; called when there is nothing valid to show.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Holds the current frame and hands it to renderers.
#[derive(Debug, Default)]
pub struct Session {
    frame: Frame,
    rendered: u64,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current report, if the last recomputation succeeded.
    pub fn report(&self) -> Option<&Report> {
        match &self.frame {
            Frame::Ready(report) => Some(report),
            _ => None,
        }
    }

    /// Frames rendered so far.
    pub fn rendered(&self) -> u64 {
        self.rendered
    }

    /// Replace the current frame with a fresh computation of `design`.
    ///
    /// The previous result is released before the new one is built. On
    /// invalid input the frame becomes [`Frame::Invalid`] and nothing is
    /// computed.
    pub fn recompute(&mut self, design: &Design) -> &Frame {
        self.frame = Frame::Empty;
        self.frame = match compute(design) {
            Ok(report) => Frame::Ready(report),
            Err(BrickError::Validation(errors)) => {
                tracing::warn!(%errors, "design rejected");
                Frame::Invalid(errors)
            }
            Err(e) => {
                tracing::warn!(error = %e, "recomputation failed");
                Frame::Empty
            }
        };
        &self.frame
    }

    /// Hand the current frame to `renderer`.
    ///
    /// Returns true if a report was drawn, false if the renderer was
    /// cleared instead.
    pub fn render(&mut self, renderer: &mut dyn SceneRenderer) -> Result<bool> {
        match &self.frame {
            Frame::Ready(report) => {
                let ctx = RenderContext::for_building(&report.building, self.rendered);
                renderer.render(report, &ctx)?;
                self.rendered += 1;
                Ok(true)
            }
            Frame::Empty | Frame::Invalid(_) => {
                renderer.clear()?;
                Ok(false)
            }
        }
    }
}
