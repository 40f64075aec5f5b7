/*!
 * Platform Log Sinks
 * Receivers for human-readable scheduling narration
 */

use parking_lot::Mutex;
use tracing::info;

/// Sink for scheduling narration
///
/// Logging never fails from the scheduler's point of view.
pub trait Platform: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards narration to the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPlatform;

impl Platform for TracingPlatform {
    fn log(&self, message: &str) {
        info!(target: "sched::platform", "{}", message);
    }
}

/// Buffers narration in memory, mainly for assertions in tests
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    lines: Mutex<Vec<String>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line logged so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return every line logged so far
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Platform for RecordingPlatform {
    fn log(&self, message: &str) {
        self.lines.lock().push(message.to_owned());
    }
}
