use log::{debug, info};

use crate::geometry::{Point, Region};
use crate::tools::{Tool, ToolAction};

/// The eraser tool: press begins an erase stroke, release commits the
/// region swept between press and release.
#[derive(Debug)]
pub struct EraserTool {
    /// Eraser width; the committed region is inflated by half of this
    /// on every side.
    width: f32,
    /// Where the in-progress stroke started, if any.
    stroke_start: Option<Point>,
}

impl EraserTool {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            stroke_start: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "eraser"
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<ToolAction> {
        debug!("erase stroke started at ({}, {})", pos.x, pos.y);
        self.stroke_start = Some(pos);
        Some(ToolAction::EraseStarted { at: pos })
    }

    fn on_pointer_up(&mut self, pos: Point) -> Option<ToolAction> {
        let start = self.stroke_start.take()?;
        let region = Region::from_corners(start, pos).expand(self.width / 2.0);
        info!(
            "erase committed: {}x{} at ({}, {})",
            region.width(),
            region.height(),
            region.min.x,
            region.min.y
        );
        Some(ToolAction::EraseCommitted { region })
    }
}
