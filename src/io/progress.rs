//! Batch progress display for generating many maps

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maps of a batch are finished
///
/// Failed maps are counted separately so a batch can carry on past them.
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    failed: usize,
}

impl ProgressManager {
    /// Create a progress bar for `total` maps
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
            failed: 0,
        }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self {
            bar,
            completed: 0,
            failed: 0,
        }
    }

    /// Record a finished map
    pub fn complete_map(&mut self, seed: u64) {
        self.completed += 1;
        self.bar.set_message(format!("seed {seed}"));
        self.bar.inc(1);
    }

    /// Record a map that could not be generated
    pub fn fail_map(&mut self, seed: u64) {
        self.failed += 1;
        self.bar.set_message(format!("seed {seed} failed"));
        self.bar.inc(1);
    }

    /// Maps generated so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Maps that failed so far
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Maps accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} generated, {} failed",
            self.completed, self.failed
        ));
    }
}
