use crate::tools::ToolAction;

/// Events broadcast by the canvas as its observable side-effect channel.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// The active tool was replaced. `old` is `None` for the first
    /// assignment.
    ToolChanged {
        old: Option<&'static str>,
        new: &'static str,
    },
    /// The active tool reacted to a dispatched pointer event.
    Action(ToolAction),
}
