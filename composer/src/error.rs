use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("{0} is not a valid email address.")]
    InvalidAddress(String),
    #[error("storage error for key {key}: {message}")]
    Storage { key: String, message: String },
    #[error("malformed record under {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ComposeError>;
