use thiserror::Error;

#[derive(Error, Debug)]
pub enum BpError {
    #[error("Missing marker: {marker}")]
    MissingMarker { marker: &'static str },
    #[error("Glyph stream ended while expecting {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("Invalid {field} field: {value}")]
    InvalidField { field: &'static str, value: String },
    #[error("Region {name} exceeds raster bounds")]
    RegionOutOfBounds { name: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BpError>;
