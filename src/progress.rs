//! Progress bar display for payload deployment

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the file deployment step
pub struct DeployProgress {
    bar: ProgressBar,
}

impl DeployProgress {
    /// Create a new progress display with total manifest entry count
    pub fn new(total_entries: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_entries);
        bar.set_style(style);

        Self { bar }
    }

    /// Show the entry currently being copied
    pub fn update_entry(&self, source: &str) {
        self.bar.set_message(source.to_string());
    }

    /// Mark one entry as deployed
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
