//! Dropdown menu visibility controller.

use crate::events::Click;

/// Two-state visibility flag for the mobile navigation dropdown.
///
/// Starts hidden. A toggle click flips it; a document-level click hides it
/// unless the click landed inside the menu. The dispatcher must route a
/// [`Click::Toggle`] to [`Menu::on_toggle_click`] only, never additionally to
/// [`Menu::on_document_click`] in the same dispatch (the original page stops
/// propagation of the toggle click for exactly this reason).
#[derive(Debug, Default)]
pub struct Menu {
    visible: bool,
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility; returns the new state.
    pub const fn on_toggle_click(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Document-level handler: an outside click forces the menu hidden,
    /// a click inside the menu leaves it as it is.
    pub const fn on_document_click(&mut self, click: Click) {
        if matches!(click, Click::Outside) {
            self.visible = false;
        }
    }

    /// Single-dispatch routing for drivers: a toggle click goes to the toggle
    /// handler only, everything else to the document handler.
    pub const fn dispatch(&mut self, click: Click) {
        match click {
            Click::Toggle => {
                self.on_toggle_click();
            }
            other => self.on_document_click(other),
        }
    }
}
