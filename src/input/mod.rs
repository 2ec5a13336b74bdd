pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::{EventHandled, InputEvent, MarkerEvent, PointerKind, RegionEvent};
pub use handler::{InteractionStateMachine, Repaint};
