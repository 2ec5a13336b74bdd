use crate::{
    core::{style::Color, viewport::ViewTransform},
    layers::marker::{MarkerId, MarkerShape},
    regions::RegionId,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Commands issued to the host rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    /// Fill the widget background
    Background { color: Color },
    /// Restyle every path of a region
    PaintRegion {
        region: RegionId,
        fill: Color,
        stroke: Color,
    },
    /// Apply the viewport transform to the region group and the marker pane
    Transform { transform: ViewTransform },
    /// Add marker icons to the marker pane
    InsertMarkers { shapes: Vec<MarkerShape> },
    /// Take marker icons off the marker pane
    RemoveMarkers { ids: Vec<MarkerId> },
    /// Recolor one marker icon
    MarkerFill { id: MarkerId, fill: Color },
    /// Show or hide the whole marker pane
    MarkersVisible { visible: bool },
}

impl DrawCommand {
    /// Structural commands touch the render tree and must wait until the
    /// widget is attached to a live surface.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DrawCommand::InsertMarkers { .. } | DrawCommand::RemoveMarkers { .. }
        )
    }
}

/// Boundary between the map and the host rendering surface.
///
/// Style changes are queued immediately. Structural changes go through
/// [`RenderContext::defer`] and only reach the drawing queue on the tick
/// after the surface is attached.
#[derive(Debug, Default)]
pub struct RenderContext {
    attached: bool,
    drawing_queue: Vec<DrawCommand>,
    next_tick: VecDeque<DrawCommand>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command for the current frame
    pub fn push(&mut self, command: DrawCommand) {
        self.drawing_queue.push(command);
    }

    /// Run a command on the next UI tick
    pub fn defer(&mut self, command: DrawCommand) {
        self.next_tick.push_back(command);
    }

    pub fn attach(&mut self) {
        if !self.attached {
            log::debug!("Render surface attached, {} deferred command(s)", self.next_tick.len());
        }
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Moves deferred commands into the drawing queue once attached.
    /// Returns how many were released.
    pub fn tick(&mut self) -> usize {
        if !self.attached {
            return 0;
        }
        let released = self.next_tick.len();
        self.drawing_queue.extend(self.next_tick.drain(..));
        released
    }

    /// Hands the queued commands to the host
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.drawing_queue)
    }

    /// Number of commands still waiting for a tick
    pub fn pending(&self) -> usize {
        self.next_tick.len()
    }
}
