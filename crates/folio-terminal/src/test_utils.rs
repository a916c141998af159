//! Shared test helpers for the terminal crates.
//!
//! Public so downstream crates can reuse the host double in their own
//! tests.

use crate::host::HostServices;

/// Everything a [`RecordingHost`] was asked to do, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ScrollTo { section: String, header_offset: i32 },
    OpenUrl(String),
    OpenMail(String),
    ShowResume,
    OpenGame,
}

/// Host double that records every side-effect request.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }
}

impl HostServices for RecordingHost {
    fn scroll_to_section(&mut self, section_id: &str, header_offset: i32) {
        self.calls.push(HostCall::ScrollTo {
            section: section_id.to_string(),
            header_offset,
        });
    }

    fn open_url(&mut self, url: &str) {
        self.calls.push(HostCall::OpenUrl(url.to_string()));
    }

    fn open_mail(&mut self, address: &str) {
        self.calls.push(HostCall::OpenMail(address.to_string()));
    }

    fn show_resume(&mut self) {
        self.calls.push(HostCall::ShowResume);
    }

    fn open_game(&mut self) {
        self.calls.push(HostCall::OpenGame);
    }
}
