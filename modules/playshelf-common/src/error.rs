use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayshelfError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Activity not found: {id}")]
    NotFound { id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
