use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::outbound::ProgressReporter;
use crate::scan_monitoring::domain::ScanProgress;

/// StderrProgressReporter adapter for reporting watch progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for rich progress bar display.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn get_or_create_progress_bar(&self) -> ProgressBar {
        let mut pb_option = self.progress_bar.lock().unwrap();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(100);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/100 ({percent}%) - {msg}",
                    )
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.lock().unwrap().as_ref() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_poll(&self, progress: &ScanProgress) {
        let pb = self.get_or_create_progress_bar();
        pb.set_position(u64::from(progress.progress.min(100)));
        pb.set_message(progress.current_step.clone());
    }

    fn report_warning(&self, message: &str) {
        let pb_option = self.progress_bar.lock().unwrap();
        // Print above the bar so the warning isn't overdrawn by the next tick
        if let Some(pb) = pb_option.as_ref() {
            pb.println(format!("⚠️  {}", message));
        } else {
            eprintln!("⚠️  {}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
