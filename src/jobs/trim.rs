use super::{Job, JobOutcome, trim_file};
use crate::config::Config;
use crate::error::Result;
use crate::trim::Trim;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Parameterized job: one input file, trim counts from the command line or config.
pub struct TrimJob {
    input: PathBuf,
    output: PathBuf,
    trim: Trim,
}

impl TrimJob {
    pub fn new(
        input: PathBuf,
        top: Option<usize>,
        bottom: Option<usize>,
        output: Option<PathBuf>,
        cfg: &Config,
    ) -> Self {
        let output = output.unwrap_or_else(|| output_path_for(&input, &cfg.output_suffix));
        let trim = Trim::new(
            top.unwrap_or(cfg.top_lines),
            bottom.unwrap_or(cfg.bottom_lines),
        );
        Self { input, output, trim }
    }
}

impl Job for TrimJob {
    fn run(&self) -> Result<JobOutcome> {
        trim_file("trim", &self.input, &self.output, self.trim)
    }
}

/// `anim.json` -> `anim<suffix>.json`, in the same directory.
///
/// A file name without a `.json` extension gets `<suffix>.json` appended,
/// so the input is never overwritten.
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let base = match input.extension() {
        Some(ext) if ext == "json" => input.file_stem(),
        _ => input.file_name(),
    };
    let mut renamed = base.map(OsStr::to_os_string).unwrap_or_default();
    renamed.push(suffix);
    renamed.push(".json");
    input.with_file_name(renamed)
}
