// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for certificate batch checks
// reference: uses indicatif for progress bars and tracks processing metrics

use crate::models::CertificateResult;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub certificates_checked: usize,
    pub certificates_failed: usize,
    pub keyword_hits: usize,
    pub duration_secs: u64,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.certificates_checked + self.certificates_failed;
        if total == 0 {
            return 0.0;
        }
        (self.certificates_checked as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    checked: AtomicUsize,
    failed: AtomicUsize,
    keyword_hits: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            checked: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            keyword_hits: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, result: &CertificateResult) {
        if result.is_failed() {
            self.failed.fetch_add(1, Ordering::SeqCst);
        } else {
            self.checked.fetch_add(1, Ordering::SeqCst);
        }
        if result.found {
            self.keyword_hits.fetch_add(1, Ordering::SeqCst);
        }
        self.main_bar.set_message(result.number.clone());
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Check complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> BatchStats {
        BatchStats {
            certificates_checked: self.checked.load(Ordering::SeqCst),
            certificates_failed: self.failed.load(Ordering::SeqCst),
            keyword_hits: self.keyword_hits.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs(),
        }
    }

    fn update_detail_bar(&self) {
        let hits = self.keyword_hits.load(Ordering::SeqCst);
        let failed = self.failed.load(Ordering::SeqCst);

        self.detail_bar
            .set_message(format!("Keyword hits: {} | Failed: {}", hits, failed));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" }));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
