//! Logging helpers.

use std::time::Instant;

/// RAII guard that logs how long a benchmark case took end to end
/// (allocation, randomization, every timed pass, teardown) when dropped.
///
/// # Example
/// ```ignore
/// let _t = Timed::info("vector<vec3>");
/// // ... allocate, fill, measure ...
/// // logs "vector<vec3>: 1.234s" when _t is dropped
/// ```
pub struct Timed {
    name: String,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Create a new timer that logs at INFO level.
    pub fn info(name: impl Into<String>) -> Self {
        Self::with_level(name.into(), log::Level::Info)
    }

    /// Create a new timer that logs at DEBUG level.
    pub fn debug(name: impl Into<String>) -> Self {
        Self::with_level(name.into(), log::Level::Debug)
    }

    fn with_level(name: String, level: log::Level) -> Self {
        log::trace!("{}...", name);
        Self {
            name,
            start: Instant::now(),
            level,
        }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::log!(self.level, "{}: {:.3?}", self.name, elapsed);
    }
}
