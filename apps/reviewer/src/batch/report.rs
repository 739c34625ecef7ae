use std::path::Path;

use tracing::info;

/// Counters for one batch run. Every discovered directory entry other than a
/// subdirectory lands in exactly one of `unsupported`, `missing_email`, `failed`
/// or `rows_written`. Entries that cannot be inspected count as `failed`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub discovered: usize,
    pub unsupported: usize,
    pub missing_email: usize,
    pub failed: usize,
    pub rows_written: usize,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
}

impl BatchReport {
    pub fn log_summary(&self, output_path: &Path) {
        info!(
            "Batch complete: {} entries, {} reviewed, {} without email, {} failed, {} unsupported",
            self.discovered, self.rows_written, self.missing_email, self.failed, self.unsupported
        );
        info!(
            "Notifications: {} sent, {} failed",
            self.notifications_sent, self.notifications_failed
        );
        info!("Resume feedback saved to {}", output_path.display());
    }
}
