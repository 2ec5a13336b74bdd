use crate::{core::geo::Point, layers::marker::MarkerId, regions::RegionId};
use serde::{Deserialize, Serialize};

/// The four pointer notifications a region or marker receives during a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Enter,
    Press,
    Release,
    Exit,
}

/// Input events the map consumes, already classified by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer notification targeted at one region shape
    Region {
        region: RegionId,
        kind: PointerKind,
        position: Point,
    },
    /// Pointer notification targeted at one marker
    Marker {
        marker: MarkerId,
        kind: PointerKind,
        position: Point,
    },
    /// Raw pointer movement in scene coordinates; the map hit-tests regions
    PointerMove { position: Point },
    /// Raw primary button press in scene coordinates
    PointerDown { position: Point },
    /// Raw primary button release in scene coordinates
    PointerUp { position: Point },
    /// Pointer left the widget
    PointerLeave,
    /// Scroll wheel; only the sign of `delta` matters
    Scroll { delta: f64, position: Point },
    /// Start of drag operation
    DragStart { position: Point },
    /// Drag in progress, pointer at `position`
    Drag { position: Point },
    /// End of drag operation
    DragEnd,
    /// Widget resize
    Resize { width: f64, height: f64 },
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

/// Delivered to host callbacks after the map applied its own region logic
#[derive(Debug, Clone, PartialEq)]
pub struct RegionEvent {
    pub region: RegionId,
    pub kind: PointerKind,
    pub position: Point,
}

/// Delivered to a marker's own handlers
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEvent {
    pub marker: MarkerId,
    pub kind: PointerKind,
    pub position: Point,
}

impl InputEvent {
    /// Gets the primary position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::Region { position, .. }
            | InputEvent::Marker { position, .. }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerDown { position }
            | InputEvent::PointerUp { position }
            | InputEvent::Scroll { position, .. }
            | InputEvent::DragStart { position }
            | InputEvent::Drag { position } => Some(*position),
            _ => None,
        }
    }

    /// Checks if this event changes the viewport rather than region state
    pub fn is_viewport_event(&self) -> bool {
        matches!(
            self,
            InputEvent::Scroll { .. }
                | InputEvent::DragStart { .. }
                | InputEvent::Drag { .. }
                | InputEvent::DragEnd
                | InputEvent::Resize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_position() {
        let press = InputEvent::Region {
            region: RegionId::new("DE"),
            kind: PointerKind::Press,
            position: Point::new(100.0, 200.0),
        };
        assert_eq!(press.position(), Some(Point::new(100.0, 200.0)));
        assert_eq!(InputEvent::DragEnd.position(), None);
    }

    #[test]
    fn test_event_classification() {
        let scroll = InputEvent::Scroll {
            delta: -3.0,
            position: Point::new(0.0, 0.0),
        };
        assert!(scroll.is_viewport_event());
        assert!(!InputEvent::PointerLeave.is_viewport_event());
    }

    #[test]
    fn test_events_deserialize_from_json() {
        let event: InputEvent = serde_json::from_str(
            r#"{"Region": {"region": "FR", "kind": "Enter", "position": {"x": 1.0, "y": 2.0}}}"#,
        )
        .unwrap();
        assert!(matches!(
            event,
            InputEvent::Region { kind: PointerKind::Enter, .. }
        ));
    }
}
