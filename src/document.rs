//! The animation document: a JSON object with a `frames` array of strings
//! plus whatever metadata the generator wrote next to it.

use crate::error::{AppError, DocumentError, Result};
use crate::trim::{Trim, line_count};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

pub const FRAMES_KEY: &str = "frames";

/// A loaded animation. Metadata keys keep their original order and values;
/// only `frames` is ever rewritten.
#[derive(Debug, Clone)]
pub struct AnimationDocument {
    root: Map<String, Value>,
    frames: Vec<String>,
}

/// What a trim pass did, for progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimReport {
    pub frames: usize,
    pub first_frame_lines_before: Option<usize>,
    pub first_frame_lines_after: Option<usize>,
}

impl AnimationDocument {
    /// Read and validate a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_value(value)?)
    }

    /// Validate an already-parsed JSON value.
    pub fn from_value(value: Value) -> std::result::Result<Self, DocumentError> {
        let Value::Object(root) = value else {
            return Err(DocumentError::NotAnObject);
        };
        let frames = match root.get(FRAMES_KEY) {
            None => return Err(DocumentError::MissingFrames),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or(DocumentError::FrameNotString(i))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
            Some(_) => return Err(DocumentError::FramesNotArray),
        };
        Ok(Self { root, frames })
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Replace every frame with its trimmed form, in order.
    pub fn trim_frames(&mut self, trim: Trim) -> TrimReport {
        let first_frame_lines_before = self.frames.first().map(|f| line_count(f));

        self.frames = self.frames.iter().map(|f| trim.apply(f)).collect();

        TrimReport {
            frames: self.frames.len(),
            first_frame_lines_before,
            first_frame_lines_after: self.frames.first().map(|f| line_count(f)),
        }
    }

    /// Two-space indented JSON with non-ASCII left unescaped.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source: std::io::Error| AppError::Write {
            path: path.to_path_buf(),
            source,
        };

        let json = self.to_pretty_json().map_err(|e| write_err(e.into()))?;
        std::fs::write(path, json).map_err(write_err)
    }
}

impl Serialize for AnimationDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.root.len()))?;
        for (key, value) in &self.root {
            if key == FRAMES_KEY {
                map.serialize_entry(key, &self.frames)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
