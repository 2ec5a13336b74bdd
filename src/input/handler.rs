//! Hover, press and toggle-selection protocol for regions.
//!
//! Every event yields the repaints it implies. The color of a repaint
//! follows one precedence: a region's override color, then the interactive
//! state color, then the theme fill. Selection bookkeeping only moves while
//! selection is enabled; hover visuals only while hover is enabled.

use crate::{
    core::style::{Color, Theme},
    input::events::PointerKind,
    regions::{RegionId, RegionRegistry},
    Result,
};

/// New fill for every path of a region
#[derive(Debug, Clone, PartialEq)]
pub struct Repaint {
    pub region: RegionId,
    pub fill: Color,
}

impl Repaint {
    fn new(region: &RegionId, fill: Color) -> Self {
        Self {
            region: region.clone(),
            fill,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionStateMachine {
    hover_enabled: bool,
    selection_enabled: bool,
    selected: Option<RegionId>,
    // last region left selected by a release; a release on it deselects
    former_selected: Option<RegionId>,
}

impl InteractionStateMachine {
    pub fn new(hover_enabled: bool, selection_enabled: bool) -> Self {
        Self {
            hover_enabled,
            selection_enabled,
            ..Self::default()
        }
    }

    pub fn is_hover_enabled(&self) -> bool {
        self.hover_enabled
    }

    pub fn set_hover_enabled(&mut self, enabled: bool) {
        self.hover_enabled = enabled;
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    pub fn selected(&self) -> Option<&RegionId> {
        self.selected.as_ref()
    }

    /// Replaces the selection without repainting anything
    pub fn set_selected(&mut self, region: Option<RegionId>) {
        self.selected = region;
    }

    pub fn former_selected(&self) -> Option<&RegionId> {
        self.former_selected.as_ref()
    }

    fn is_selected(&self, region: &RegionId) -> bool {
        self.selected.as_ref() == Some(region)
    }

    /// Applies one pointer event on `region` and returns the repaints in
    /// the order they must be applied.
    pub fn handle(
        &mut self,
        kind: PointerKind,
        region: &RegionId,
        registry: &RegionRegistry,
        theme: &Theme,
    ) -> Result<Vec<Repaint>> {
        let target = registry.region(region.as_str())?;
        let mut repaints = Vec::new();

        match kind {
            PointerKind::Enter => {
                if self.hover_enabled {
                    let fill = if self.selection_enabled && self.is_selected(region) {
                        theme.selected_color
                    } else {
                        theme.hover_color
                    };
                    repaints.push(Repaint::new(region, fill));
                }
            }
            PointerKind::Press => {
                if self.selection_enabled {
                    match self.selected.clone() {
                        None => {
                            self.selected = Some(region.clone());
                            repaints.push(Repaint::new(region, theme.selected_color));
                        }
                        Some(current) => {
                            // restore the old selection; the release decides what happens next
                            let fill = registry.region(current.as_str())?.resting_fill(theme);
                            repaints.push(Repaint::new(&current, fill));
                        }
                    }
                } else if self.hover_enabled {
                    repaints.push(Repaint::new(region, theme.pressed_color));
                }
            }
            PointerKind::Release => {
                if self.selection_enabled {
                    let fill = if self.former_selected.as_ref() == Some(region) {
                        self.selected = None;
                        target.resting_fill(theme)
                    } else {
                        self.selected = Some(region.clone());
                        theme.selected_color
                    };
                    self.former_selected = self.selected.clone();
                    repaints.push(Repaint::new(region, fill));
                } else if self.hover_enabled {
                    repaints.push(Repaint::new(region, theme.hover_color));
                }
            }
            PointerKind::Exit => {
                if self.hover_enabled {
                    let selected = self.is_selected(region);
                    let state_fill = if self.selection_enabled && selected {
                        theme.selected_color
                    } else {
                        theme.fill_color
                    };
                    let fill = match target.override_color() {
                        Some(color) if !selected => color,
                        _ => state_fill,
                    };
                    repaints.push(Repaint::new(region, fill));
                }
            }
        }

        if !repaints.is_empty() {
            log::debug!("{:?} on {} -> {} repaint(s)", kind, region, repaints.len());
        }
        Ok(repaints)
    }
}
