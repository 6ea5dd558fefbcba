pub mod batch;
pub mod trim;

use crate::document::{AnimationDocument, TrimReport};
use crate::error::Result;
use crate::trim::Trim;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A job knows which file to read, where to write, and how much to trim.
pub trait Job {
    /// Execute the job end to end: load, trim, save.
    fn run(&self) -> Result<JobOutcome>;
}

/// Result of a finished job: where it wrote + metadata.
#[derive(Debug)]
pub struct JobOutcome {
    pub label: &'static str,
    pub output: PathBuf,
    pub report: TrimReport,
    pub elapsed_ms: u128,
}

impl JobOutcome {
    /// Two-line human summary printed after a run.
    pub fn summary(&self) -> String {
        format!(
            "✓ Done! Trimmed animation saved to {}\n  Frames: {}",
            self.output.display(),
            self.report.frames
        )
    }
}

/// Format a one-line footer with timing and frame count.
pub fn footer(outcome: &JobOutcome) -> String {
    format!(
        "[{}] ok ({}ms, {} frames)",
        outcome.label, outcome.elapsed_ms, outcome.report.frames
    )
}

/// Load `input`, trim every frame, write `output`, measure time.
pub fn trim_file(label: &'static str, input: &Path, output: &Path, trim: Trim) -> Result<JobOutcome> {
    let start = Instant::now();

    info!("Loading {}...", input.display());
    let mut doc = AnimationDocument::load(input)?;
    info!("Original frames: {}", doc.frames().len());

    info!("Trimming {trim} lines from each frame...");
    let report = doc.trim_frames(trim);
    if let (Some(before), Some(after)) = (report.first_frame_lines_before, report.first_frame_lines_after) {
        info!("First frame: {before} lines before trimming, {after} after");
    }

    info!("Saving to {}...", output.display());
    doc.save(output)?;

    Ok(JobOutcome {
        label,
        output: output.to_path_buf(),
        report,
        elapsed_ms: start.elapsed().as_millis(),
    })
}
