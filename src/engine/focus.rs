use crate::document::ViewId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The host's currently selected display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub view: ViewId,
    /// Transient input surface (minibuffer, command palette, popup prompt).
    #[serde(default)]
    pub overlay: bool,
    #[serde(default = "yes")]
    pub live: bool,
    #[serde(default = "yes")]
    pub visible: bool,
}

fn yes() -> bool {
    true
}

impl Surface {
    pub fn view(view: ViewId) -> Self {
        Self {
            view,
            overlay: false,
            live: true,
            visible: true,
        }
    }

    pub fn overlay(view: ViewId) -> Self {
        Self {
            overlay: true,
            ..Self::view(view)
        }
    }
}

/// Tracks which view counts as active for focus-conditional segments.
#[derive(Debug, Default)]
pub struct FocusTracker {
    active_view: Option<ViewId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_active_view(&self) -> Option<ViewId> {
        self.active_view
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.active_view == Some(view)
    }

    /// Record the host's selected surface. A live, visible overlay never
    /// takes the active slot, so segments on the view underneath keep their
    /// active rendering while the overlay has keyboard focus. Returns whether
    /// the active view changed.
    pub fn update(&mut self, selected: Option<Surface>) -> bool {
        let Some(surface) = selected else {
            return false;
        };
        if surface.overlay && surface.live && surface.visible {
            debug!(overlay = %surface.view, "ignoring overlay focus");
            return false;
        }
        if self.active_view == Some(surface.view) {
            return false;
        }
        debug!(from = ?self.active_view, to = %surface.view, "active view changed");
        self.active_view = Some(surface.view);
        true
    }

    /// Forget `view` if it was active, e.g. when it closes.
    pub fn forget(&mut self, view: ViewId) {
        if self.active_view == Some(view) {
            self.active_view = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_view_becomes_active() {
        let mut focus = FocusTracker::new();
        assert!(focus.update(Some(Surface::view(ViewId(1)))));
        assert!(focus.is_active(ViewId(1)));
        assert!(!focus.update(Some(Surface::view(ViewId(1)))));
    }

    #[test]
    fn test_visible_overlay_does_not_steal_focus() {
        let mut focus = FocusTracker::new();
        focus.update(Some(Surface::view(ViewId(1))));
        assert!(!focus.update(Some(Surface::overlay(ViewId(99)))));
        assert_eq!(focus.current_active_view(), Some(ViewId(1)));
    }

    #[test]
    fn test_hidden_overlay_counts_as_selected() {
        let mut focus = FocusTracker::new();
        focus.update(Some(Surface::view(ViewId(1))));
        let hidden = Surface {
            visible: false,
            ..Surface::overlay(ViewId(99))
        };
        assert!(focus.update(Some(hidden)));
        assert!(focus.is_active(ViewId(99)));
    }

    #[test]
    fn test_no_selection_keeps_previous() {
        let mut focus = FocusTracker::new();
        focus.update(Some(Surface::view(ViewId(3))));
        assert!(!focus.update(None));
        assert!(focus.is_active(ViewId(3)));
    }
}
