//! Batch progress display

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS_BAR, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks files processed in a batch
///
/// Small batches stay silent and leave reporting to the logger.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Show a bar if the batch is large enough to warrant one
    pub fn initialize(&mut self, file_count: usize) {
        self.completed = 0;
        if file_count >= MIN_FILES_FOR_PROGRESS_BAR {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is on screen
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Files completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Name the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.into_owned());
        }
    }

    /// Count a finished file
    pub fn complete_file(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Run `f` with the bar hidden so terminal output does not tear it
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        if let Some(ref bar) = self.bar {
            return bar.suspend(f);
        }
        f()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
