use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("failed to write `{key}` to local storage")]
    StorageWrite { key: String },

    #[error("saved lead data is malformed: {0}")]
    MalformedLead(#[from] serde_json::Error),

    #[error("processing failed: {0}")]
    Processing(String),
}
