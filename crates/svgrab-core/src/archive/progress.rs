//! Progress reporting for archive assembly.

/// Observer invoked with integer percentages while an archive is built.
///
/// Implementations receive monotonically non-decreasing values; on a
/// successful run the observer is called at least once and the final
/// value is exactly 100. No return value is expected; notification is
/// fire-and-forget.
pub trait ProgressObserver {
    /// Called with the current completion percentage (0–100).
    fn on_progress(&mut self, percent: u8);
}

/// Observer that discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {
    fn on_progress(&mut self, _percent: u8) {}
}
