use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // capability and envelope failures carry a user-facing message already
    #[error("{0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}
