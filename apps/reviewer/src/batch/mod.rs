//! Batch Orchestrator — walks the resume folder one file at a time.
//!
//! Per file: extract text → locate email → generate feedback → record row →
//! notify. Extraction and generation failures are contained to the file that
//! caused them. Rows live only in memory until the single export at the end,
//! so a crash mid-run loses them.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

pub mod report;

pub use report::BatchReport;

use crate::email_locator::find_email;
use crate::errors::AppError;
use crate::export::write_feedback_export;
use crate::extract::{extract_text, DocumentFormat};
use crate::feedback::FeedbackGenerator;
use crate::models::{ResultRow, ResumeFile};
use crate::notifier::{feedback_email_body, Notifier, FEEDBACK_SUBJECT};

/// Outcome of reviewing a single resume, before notification.
enum Review {
    Ready { email: String, feedback: String },
    MissingEmail,
}

pub struct BatchProcessor {
    generator: Arc<dyn FeedbackGenerator>,
    notifier: Arc<dyn Notifier>,
    resume_dir: PathBuf,
    output_path: PathBuf,
}

impl BatchProcessor {
    pub fn new(
        generator: Arc<dyn FeedbackGenerator>,
        notifier: Arc<dyn Notifier>,
        resume_dir: PathBuf,
        output_path: PathBuf,
    ) -> Self {
        Self {
            generator,
            notifier,
            resume_dir,
            output_path,
        }
    }

    /// Processes every supported resume and writes the export.
    ///
    /// Returns `Err` only when the folder cannot be listed or the export cannot
    /// be written; per-file failures are logged and counted in the report.
    pub async fn run(&self) -> Result<BatchReport, AppError> {
        let mut report = BatchReport::default();
        let resumes = self.discover(&mut report).await?;
        info!(
            "Found {} resume(s) in {}",
            resumes.len(),
            self.resume_dir.display()
        );

        let mut rows: Vec<ResultRow> = Vec::new();

        for resume in &resumes {
            let (email, feedback) = match self.review(resume).await {
                Ok(Review::Ready { email, feedback }) => (email, feedback),
                Ok(Review::MissingEmail) => {
                    warn!("Could not find email in {}", resume.filename);
                    report.missing_email += 1;
                    continue;
                }
                Err(e) => {
                    error!("Skipping {}: {e}", resume.filename);
                    report.failed += 1;
                    continue;
                }
            };

            let body = feedback_email_body(&feedback);
            rows.push(ResultRow {
                filename: resume.filename.clone(),
                email,
                feedback,
            });

            // The row stays recorded whatever the delivery outcome.
            let recipient = &rows[rows.len() - 1].email;
            match self.notifier.send(recipient, FEEDBACK_SUBJECT, &body).await {
                Ok(()) => {
                    info!("Email sent to {recipient}");
                    report.notifications_sent += 1;
                }
                Err(e) => {
                    error!("Failed to send email to {recipient}: {e}");
                    report.notifications_failed += 1;
                }
            }
        }

        write_feedback_export(&self.output_path, &rows)?;
        report.rows_written = rows.len();
        report.log_summary(&self.output_path);

        Ok(report)
    }

    async fn review(&self, resume: &ResumeFile) -> Result<Review, AppError> {
        let text = extract_text(&resume.path, resume.format).await?;

        let Some(email) = find_email(&text) else {
            return Ok(Review::MissingEmail);
        };

        info!("Processing {} for {}...", resume.filename, email);
        let feedback = self.generator.generate(&text).await?;

        Ok(Review::Ready {
            email: email.to_string(),
            feedback,
        })
    }

    /// Lists supported files in name order. Subdirectories are ignored and
    /// unsupported extensions are skipped without a visible log line. Entries
    /// whose metadata cannot be read (dangling symlinks) count as failed.
    async fn discover(&self, report: &mut BatchReport) -> Result<Vec<ResumeFile>, AppError> {
        let dir_err = |source| AppError::ResumeDir {
            path: self.resume_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.resume_dir)
            .await
            .map_err(dir_err)?;

        let mut resumes = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    report.discovered += 1;
                    report.failed += 1;
                    continue;
                }
            }

            report.discovered += 1;
            let filename = entry.file_name().to_string_lossy().into_owned();

            match DocumentFormat::from_path(&path) {
                Some(format) => resumes.push(ResumeFile {
                    filename,
                    path,
                    format,
                }),
                None => {
                    debug!("Ignoring unsupported file {filename}");
                    report.unsupported += 1;
                }
            }
        }

        resumes.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(resumes)
    }
}
