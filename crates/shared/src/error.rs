use thiserror::Error;

/// Why a collection load failed. Viewers only ever see a generic message;
/// the variant is kept for the operator log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("unexpected response status {status}")]
    ResponseError { status: u16 },
    #[error("malformed response body: {0}")]
    ParseFailure(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "network_failure",
            Self::ResponseError { .. } => "response_error",
            Self::ParseFailure(_) => "parse_failure",
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::ParseFailure(value.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}
