use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

/// Batch progress on stderr; bars are only drawn when stderr is a terminal
pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let bar_style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(bar_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// Bar for a batch of `total` documents, hidden when not interactive
    pub fn start_batch(&mut self, total: usize) -> ProgressBar {
        let pb = if self.is_interactive() {
            self.create_progress_bar(total as u64, "Drawing documents")
        } else {
            ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
        };
        self.current_bar = Some(pb.clone());
        pb
    }

    /// Clear the bar without printing a summary
    pub fn abort_batch(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn finish_batch(&mut self, succeeded: usize, failed: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();

        if failed == 0 {
            eprintln!(
                "{} Drew {} {}",
                style("✓").green().bold(),
                style(succeeded).bold(),
                pluralize("document", succeeded)
            );
        } else {
            eprintln!(
                "{} Drew {} {}, {} failed",
                style("⚠").yellow().bold(),
                style(succeeded).bold(),
                pluralize("document", succeeded),
                style(failed).red().bold()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_bar_tracks_total() {
        let mut reporter = ProgressReporter::new();
        let bar = reporter.start_batch(7);

        assert_eq!(bar.length(), Some(7));
        bar.inc(2);
        assert_eq!(bar.position(), 2);

        reporter.finish_batch(2, 0);
        assert!(reporter.current_bar.is_none());
    }
}
