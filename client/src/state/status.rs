//! Transient status message region shown after signup/unregister.
//!
//! DESIGN
//! ======
//! `Hidden -> Visible(text, tone) -> Hidden`. Every `show` bumps a sequence
//! number; the hide timer is armed for that sequence and `hide` ignores any
//! sequence other than the latest, so an older timer can never cut a newer
//! message short. The timer handle itself lives in the banner component.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// How long a status message stays visible.
pub const STATUS_DISPLAY_MS: u32 = 5_000;

/// Styling of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StatusState {
    pub current: Option<StatusMessage>,
    seq: u64,
}

impl StatusState {
    /// Show `message`, replacing whatever is visible. Returns its sequence.
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.seq += 1;
        self.current = Some(message);
        self.seq
    }

    /// Hide the message shown as `seq`. Returns whether it was hidden.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Sequence of the visible message, if any.
    #[must_use]
    pub fn visible_seq(&self) -> Option<u64> {
        self.current.as_ref().map(|_| self.seq)
    }

    /// CSS class for the message region.
    #[must_use]
    pub fn class(&self) -> &'static str {
        self.current.as_ref().map_or("hidden", |message| message.tone.class())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |message| message.text.as_str())
    }
}
