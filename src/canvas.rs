use log::{debug, info};
use thiserror::Error;

use crate::event::{CanvasEvent, EventBus};
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::tools::{Tool, ToolAction};

/// Errors that can occur when dispatching input to the canvas
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    /// A pointer event was dispatched before any tool was set
    #[error("no tool set on the canvas")]
    NoActiveTool,
}

/// The canvas holds the currently active tool and forwards pointer
/// events to it.
///
/// The canvas contains no per-tool logic: swapping the active tool via
/// [`Canvas::set_tool`] changes the behavior of every subsequent
/// dispatch, and adding a new [`Tool`] implementation requires no
/// change here. Dispatch is synchronous, so once `set_tool` returns no
/// event can reach the replaced tool.
pub struct Canvas {
    active_tool: Option<Box<dyn Tool>>,
    events: EventBus,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("active_tool", &self.active_tool_name())
            .field("events", &self.events)
            .finish()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a canvas with no active tool. Dispatching before the
    /// first [`Canvas::set_tool`] call fails with
    /// [`CanvasError::NoActiveTool`].
    pub fn new() -> Self {
        Self {
            active_tool: None,
            events: EventBus::new(),
        }
    }

    /// Creates a canvas with `tool` already active, for callers that
    /// want to rule out the unset state entirely.
    pub fn with_tool(tool: Box<dyn Tool>) -> Self {
        let mut canvas = Self::new();
        canvas.set_tool(tool);
        canvas
    }

    /// The event bus this canvas broadcasts on.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Replaces the active tool. Re-setting a tool of the same kind is
    /// allowed.
    ///
    /// Nothing is invoked on the incoming tool; only explicit event
    /// dispatch reaches a tool.
    pub fn set_tool(&mut self, tool: Box<dyn Tool>) {
        let old = self.active_tool_name();
        let new = tool.name();
        info!("active tool: {}", new);
        self.active_tool = Some(tool);
        self.events.emit(CanvasEvent::ToolChanged { old, new });
    }

    /// Name of the active tool, if one is set.
    pub fn active_tool_name(&self) -> Option<&'static str> {
        self.active_tool.as_deref().map(|tool| tool.name())
    }

    /// Forwards a pointer press to the active tool.
    pub fn pointer_down(&mut self, pos: Point) -> Result<Option<ToolAction>, CanvasError> {
        let tool = self.active_tool.as_deref_mut().ok_or(CanvasError::NoActiveTool)?;
        debug!("pointer down at ({}, {}) -> {}", pos.x, pos.y, tool.name());
        let action = tool.on_pointer_down(pos);
        Ok(self.broadcast(action))
    }

    /// Forwards a pointer release to the active tool.
    pub fn pointer_up(&mut self, pos: Point) -> Result<Option<ToolAction>, CanvasError> {
        let tool = self.active_tool.as_deref_mut().ok_or(CanvasError::NoActiveTool)?;
        debug!("pointer up at ({}, {}) -> {}", pos.x, pos.y, tool.name());
        let action = tool.on_pointer_up(pos);
        Ok(self.broadcast(action))
    }

    /// Routes an [`InputEvent`] to the matching dispatch method.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<ToolAction>, CanvasError> {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
        }
    }

    fn broadcast(&self, action: Option<ToolAction>) -> Option<ToolAction> {
        if let Some(action) = action {
            self.events.emit(CanvasEvent::Action(action));
        }
        action
    }
}
