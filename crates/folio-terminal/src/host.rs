//! Side-effect collaborator interface provided by the host page.
//!
//! Navigation, link opening, and surface mounting are fire-and-forget:
//! the session dispatches the request and assumes success for
//! transcript purposes. No confirmation round-trip is modeled, so a
//! host that fails to open a link simply swallows the failure.

/// Capabilities the host page supplies to the terminal.
pub trait HostServices {
    /// Scroll the host page to the element for `section_id`, leaving
    /// `header_offset` pixels of headroom above it so a fixed header
    /// does not cover the target.
    fn scroll_to_section(&mut self, section_id: &str, header_offset: i32);

    /// Open a web URL in a new tab.
    fn open_url(&mut self, url: &str);

    /// Hand `address` to the user's mail client.
    fn open_mail(&mut self, address: &str);

    /// Show the resume preview surface.
    fn show_resume(&mut self);

    /// Mount the embedded game surface, maximized.
    fn open_game(&mut self);
}
