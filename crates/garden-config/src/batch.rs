//! Batch analysis settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Pause between items, in milliseconds. Zero disables the pause.
    ///
    /// Only useful when the batch feeds a rate-limited upstream service; the
    /// scoring itself has no limit.
    #[serde(default)]
    pub delay_ms: u64,
}

impl BatchConfig {
    /// Inter-item delay, `None` when disabled.
    #[must_use]
    pub const fn delay(&self) -> Option<Duration> {
        if self.delay_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.delay_ms))
        }
    }
}
