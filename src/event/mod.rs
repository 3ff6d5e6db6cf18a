mod bus;
mod events;

pub use bus::EventBus;
pub use events::CanvasEvent;

/// Receives canvas events broadcast through an [`EventBus`].
pub trait EventHandler {
    fn handle_event(&mut self, event: &CanvasEvent);
}

/// Any `FnMut` closure over an event reference works as a handler, so
/// callers can subscribe without declaring a handler type.
impl<F> EventHandler for F
where
    F: FnMut(&CanvasEvent),
{
    fn handle_event(&mut self, event: &CanvasEvent) {
        self(event)
    }
}
