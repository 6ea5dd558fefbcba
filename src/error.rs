use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a trimming run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("invalid animation document: {0}")]
    Document(#[from] DocumentError),
}

/// Shape problems in an otherwise well-formed JSON document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocumentError {
    #[error("top level is not a JSON object")]
    NotAnObject,

    #[error("missing `frames` key")]
    MissingFrames,

    #[error("`frames` is not an array")]
    FramesNotArray,

    #[error("frame {0} is not a string")]
    FrameNotString(usize),
}

pub type Result<T> = std::result::Result<T, AppError>;
