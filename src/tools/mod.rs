use crate::config::ToolsConfig;
use crate::geometry::{Point, Region};

/// Tool trait defines the interface for all canvas tools.
///
/// A tool is a self-contained reaction to pointer input. It may keep
/// state for an in-progress gesture (a drag anchor, a stroke start) but
/// must never depend on the canvas that hosts it; the canvas routes
/// events to whichever tool is active without inspecting it.
pub trait Tool: Send {
    /// Stable identifier used in logs, events and the tool factory.
    fn name(&self) -> &'static str;

    /// Handle a pointer press on the canvas.
    /// Return the action this press **begins**, if any.
    fn on_pointer_down(&mut self, pos: Point) -> Option<ToolAction>;

    /// Handle a pointer release on the canvas.
    /// Return the action this release **commits**, if any. A release
    /// with no preceding press on this tool instance commits nothing.
    fn on_pointer_up(&mut self, pos: Point) -> Option<ToolAction>;
}

/// The observable outcome of dispatching a pointer event to a tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolAction {
    /// A selection gesture was anchored at `at`.
    SelectionStarted { at: Point },
    /// A selection box was committed.
    SelectionCommitted { region: Region },
    /// An erase stroke was begun at `at`.
    EraseStarted { at: Point },
    /// An erase stroke was committed; `region` is the swept area
    /// inflated by half the eraser width.
    EraseCommitted { region: Region },
}

// Tool implementations
mod eraser_tool;
mod selection_tool;

pub use eraser_tool::EraserTool;
pub use selection_tool::SelectionTool;

/// Factory function to create a new tool of the specified type.
///
/// Returns `None` for names no tool registers under.
pub fn new_tool(name: &str, config: &ToolsConfig) -> Option<Box<dyn Tool>> {
    match name {
        "selection" => Some(Box::new(SelectionTool::new())),
        "eraser" => Some(Box::new(EraserTool::new(config.eraser.width))),
        _ => None,
    }
}
