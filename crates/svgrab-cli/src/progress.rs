//! Progress bar implementation for CLI operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use svgrab_core::ProgressObserver;

/// CLI progress bar wrapper implementing `ProgressObserver`.
///
/// Displays a percentage bar while the archive is assembled when running
/// in a TTY. Automatically cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a new CLI progress bar.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(100);

        // Template: "Packaging [████████░░░░] 42%"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message(message.to_string());

        Self { bar }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for CliProgress {
    fn on_progress(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_positions_track_percentages() {
        let mut progress = CliProgress::new("Packaging");
        progress.on_progress(40);
        assert_eq!(progress.bar.position(), 40);
        progress.on_progress(100);
        assert_eq!(progress.bar.position(), 100);
    }
}
