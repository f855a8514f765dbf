#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
