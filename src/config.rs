use crate::error::{AppError, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG: &str = ".frametrim.toml";

/// Global + per-project configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Lines dropped from the top of each frame by `frametrim <input_file>`.
    pub top_lines: usize,
    /// Lines dropped from the bottom of each frame by `frametrim <input_file>`.
    pub bottom_lines: usize,
    /// Inserted before `.json` to name the output file.
    pub output_suffix: String,
    /// Show timing footer after each run.
    pub show_footer: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_lines: 25,
            bottom_lines: 20,
            output_suffix: "_trimmed".into(),
            show_footer: true,
        }
    }
}

impl Config {
    /// Load config with priority: .frametrim.toml (project) > ~/.config/frametrim/config.toml (global) > defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(path) = global_config_path()
            && let Some(global) = load_file(&path)
        {
            config = merge(config, global);
        }

        if let Some(project) = load_file(Path::new(PROJECT_CONFIG)) {
            config = merge(config, project);
        }

        config
    }

    /// Generate a default config file content.
    pub fn default_toml() -> &'static str {
        r#"# frametrim configuration
# Place in ~/.config/frametrim/config.toml (global) or .frametrim.toml (per-project)

# Default trim counts for `frametrim <input_file>` when none are given
top_lines = 25
bottom_lines = 20

# Output file name: <stem><output_suffix>.json
output_suffix = "_trimmed"

# Show timing footer after each run
show_footer = true
"#
    }

    /// Write the default config to `path`. Returns `false` if a file is already there.
    pub fn write_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        let write_err = |source: std::io::Error| AppError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        std::fs::write(path, Self::default_toml()).map_err(write_err)?;
        Ok(true)
    }
}

/// Partial config for TOML deserialization (all fields optional).
#[derive(Debug, Deserialize)]
struct PartialConfig {
    top_lines: Option<usize>,
    bottom_lines: Option<usize>,
    output_suffix: Option<String>,
    show_footer: Option<bool>,
}

pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("frametrim").join("config.toml"))
}

fn load_file(path: &Path) -> Option<PartialConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(partial) => {
            debug!("loaded config from {}", path.display());
            Some(partial)
        }
        Err(e) => {
            debug!("ignoring invalid config {}: {e}", path.display());
            None
        }
    }
}

fn merge(base: Config, partial: PartialConfig) -> Config {
    Config {
        top_lines: partial.top_lines.unwrap_or(base.top_lines),
        bottom_lines: partial.bottom_lines.unwrap_or(base.bottom_lines),
        output_suffix: partial.output_suffix.unwrap_or(base.output_suffix),
        show_footer: partial.show_footer.unwrap_or(base.show_footer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.top_lines, 25);
        assert_eq!(config.bottom_lines, 20);
        assert_eq!(config.output_suffix, "_trimmed");
        assert!(config.show_footer);
    }

    #[test]
    fn test_merge_partial() {
        let base = Config::default();
        let partial = PartialConfig {
            top_lines: Some(10),
            bottom_lines: None,
            output_suffix: None,
            show_footer: Some(false),
        };
        let merged = merge(base, partial);
        assert_eq!(merged.top_lines, 10);
        assert_eq!(merged.bottom_lines, 20); // kept default
        assert_eq!(merged.output_suffix, "_trimmed");
        assert!(!merged.show_footer);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
bottom_lines = 3
output_suffix = "_cut"
"#;
        let partial: PartialConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(partial.bottom_lines, Some(3));
        assert_eq!(partial.output_suffix.as_deref(), Some("_cut"));
        assert!(partial.top_lines.is_none());
    }

    #[test]
    fn test_default_toml_matches_defaults() {
        let partial: PartialConfig = toml::from_str(Config::default_toml()).unwrap();
        assert_eq!(merge(Config::default(), partial), Config::default());
    }

    #[test]
    fn test_invalid_file_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "top_lines = \"many\"").unwrap();
        assert!(load_file(&path).is_none());
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(Config::write_default(&path).unwrap());
        assert!(!Config::write_default(&path).unwrap());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, Config::default_toml());
    }
}
