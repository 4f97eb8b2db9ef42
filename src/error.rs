use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChastotaError {
    /// Malformed substitution key map.
    #[error("key map error: {0}")]
    KeyMap(String),

    /// Chart could not be drawn or saved.
    #[error("plot error: {0}")]
    Plot(String),

    /// Key map file is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
