use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("object table is empty")]
    EmptyTable,

    #[error("duplicate object name {0:?}")]
    DuplicateName(String),

    #[error("object name {0:?} is reserved for the light pulse")]
    ReservedName(String),

    #[error("invalid distance for {name}: {distance} (must be finite and non-negative)")]
    InvalidDistance { name: String, distance: f64 },

    #[error("invalid radius for {name}: {radius} (must be finite and positive)")]
    InvalidRadius { name: String, radius: f64 },

    #[error("invalid propagation speed: {0} (must be finite and positive)")]
    InvalidSpeed(f64),

    #[error("invalid light size factor: {0} (must be finite and positive)")]
    InvalidLightSize(f64),

    #[error("{max_distance} km at {speed} km per frame needs more than {limit} frames")]
    TooManyFrames {
        max_distance: f64,
        speed: f64,
        limit: u32,
    },

    #[error("record {row} is missing column {column:?}")]
    MissingColumn { row: usize, column: String },

    #[error("record {row} column {column:?} has the wrong type (expected {expected})")]
    InvalidColumn {
        row: usize,
        column: String,
        expected: &'static str,
    },

    #[error("frame table has no rows")]
    EmptyFrameTable,

    #[error("unknown planetary system {0:?} (expected \"inner\" or \"outer\")")]
    UnknownSystem(String),

    #[error("failed to read backdrop image {path}: {source}")]
    Backdrop {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
