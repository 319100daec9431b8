//! Shared page chrome state: mobile menu, image overlay, header condensing,
//! and the booking handoff between service cards and the contact form.
//!
//! DESIGN
//! ======
//! All of this lives in one `RwSignal<UiState>` provided as context so the
//! header, menu, gallery, and contact form stay decoupled from each other.
//! Components mutate the state through the small methods below rather than
//! poking fields, which keeps paired flags (open + transition suppression)
//! consistent.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A gallery image shown in the fullscreen overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// Page-level interaction state shared across components.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the mobile menu panel is slid into view.
    pub menu_open: bool,
    /// Suppress the slide transition on the next menu close. Set when a menu
    /// link navigates to another route so the panel does not animate over
    /// the incoming page.
    pub menu_instant: bool,
    /// The single overlay slot. `Some` while the fullscreen image viewer is up.
    pub overlay: Option<GalleryImage>,
    /// Whether the window has scrolled past the header condensing threshold.
    pub header_scrolled: bool,
    /// Bumped once per "book this service" click so the contact form can tell
    /// a fresh request from one it has already handled.
    pub booking_seq: u64,
    /// Title of the most recently requested service.
    pub booking_service: Option<String>,
}

impl UiState {
    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.menu_instant = false;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.menu_instant = false;
    }

    /// Close the menu with its slide transition suppressed.
    pub fn close_menu_without_transition(&mut self) {
        self.menu_open = false;
        self.menu_instant = true;
    }

    pub fn open_overlay(&mut self, image: GalleryImage) {
        self.overlay = Some(image);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Whether body scrolling should be suppressed. True while either
    /// fullscreen surface (menu panel or image overlay) is up.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.menu_open || self.overlay.is_some()
    }

    /// Record a booking request for the named service.
    pub fn request_booking(&mut self, service: &str) {
        self.booking_seq += 1;
        self.booking_service = Some(service.to_owned());
    }
}
