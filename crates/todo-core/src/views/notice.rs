//! Self-clearing success messages

use std::time::Duration;

/// How long a success message stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Success message that clears itself after [`NOTICE_TTL`].
///
/// Each `show` bumps a generation number. A timer scheduled for an older
/// message passes its generation to `expire` and leaves newer text alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    text: Option<String>,
    generation: u64,
}

impl Notice {
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = Some(text.into());
        self.generation
    }

    /// Clears the message if it is still the one shown at `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.text.is_some() {
            self.text = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Generation of the message currently shown.
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
