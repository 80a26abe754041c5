use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Error message supplied by the backend, shown to the user verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}
