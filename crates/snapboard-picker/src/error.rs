use thiserror::Error;

/// Errors raised while loading an overlay catalog.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
