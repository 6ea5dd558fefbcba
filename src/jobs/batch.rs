use super::{Job, JobOutcome, trim_file};
use crate::error::Result;
use crate::trim::Trim;
use std::path::PathBuf;

pub const BATCH_INPUT: &str = "animation_2.json";
pub const BATCH_OUTPUT: &str = "animation_3.json";
pub const BATCH_TOP_LINES: usize = 25;
pub const BATCH_BOTTOM_LINES: usize = 20;

/// Fixed job: `animation_2.json` -> `animation_3.json`, top 25 / bottom 20.
/// Config does not apply; only the directory can change.
pub struct BatchJob {
    dir: PathBuf,
}

impl BatchJob {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Job for BatchJob {
    fn run(&self) -> Result<JobOutcome> {
        trim_file(
            "batch",
            &self.dir.join(BATCH_INPUT),
            &self.dir.join(BATCH_OUTPUT),
            Trim::new(BATCH_TOP_LINES, BATCH_BOTTOM_LINES),
        )
    }
}
