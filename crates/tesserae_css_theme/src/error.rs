use thiserror::Error;

/// Errors raised while loading or parsing theme data.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid length \"{0}\", expected a number ending with 'px', 'em', 'rem' or '%'")]
    InvalidLength(String),
}
