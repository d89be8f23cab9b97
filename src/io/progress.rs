//! Progress display for long generation runs

use crate::algorithm::generator::StepEvent;
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_CELLS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells ({{eta}})"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks visited cells while the backtracker runs
///
/// Small grids finish faster than a bar can draw, so the bar stays hidden
/// below `PROGRESS_MIN_CELLS` cells or when output is suppressed.
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a progress display for a grid of `cell_count` cells
    pub fn new(cell_count: usize, visible: bool) -> Self {
        let bar = if visible && cell_count >= PROGRESS_MIN_CELLS {
            let bar = ProgressBar::new(cell_count as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_message("Carving");
            // The start cell is visited before the first step
            bar.set_position(1);
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Whether the bar is drawn at all
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Advance on every newly visited cell
    pub fn observe(&self, event: &StepEvent) {
        if matches!(event, StepEvent::Carved { .. }) {
            self.bar.inc(1);
        }
    }

    /// Number of cells counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
