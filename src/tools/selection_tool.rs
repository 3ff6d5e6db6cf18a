use log::{debug, info};

use crate::geometry::{Point, Region};
use crate::tools::{Tool, ToolAction};

/// The selection tool: press anchors a selection box, release commits
/// the rectangle between anchor and release point.
#[derive(Debug, Default)]
pub struct SelectionTool {
    /// Corner the in-progress selection was anchored at, if any.
    anchor: Option<Point>,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<ToolAction> {
        debug!("selection anchored at ({}, {})", pos.x, pos.y);
        self.anchor = Some(pos);
        Some(ToolAction::SelectionStarted { at: pos })
    }

    fn on_pointer_up(&mut self, pos: Point) -> Option<ToolAction> {
        let anchor = self.anchor.take()?;
        let region = Region::from_corners(anchor, pos);
        info!(
            "selection committed: {}x{} at ({}, {})",
            region.width(),
            region.height(),
            region.min.x,
            region.min.y
        );
        Some(ToolAction::SelectionCommitted { region })
    }
}
