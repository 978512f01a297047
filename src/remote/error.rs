use thiserror::Error;

/// Failure of a single remote plan request
#[derive(Error, Debug)]
pub enum RemotePlanError {
    /// Connection, DNS or timeout failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Plan service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The service answered but reported that it could not produce a plan
    #[error("Plan service reported a failure: {}", .message.as_deref().unwrap_or("no message"))]
    Application { message: Option<String> },

    #[error("Malformed plan response: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl RemotePlanError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, RemotePlanError::Network(e) if e.is_timeout())
    }

    /// Short label for logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RemotePlanError::Network(_) => "network",
            RemotePlanError::HttpStatus { .. } => "http_status",
            RemotePlanError::Application { .. } | RemotePlanError::MalformedPayload(_) => {
                "application"
            }
        }
    }
}
