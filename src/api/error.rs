use thiserror::Error;

/// Fallback message when a failed response carries no decodable error body.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a single backend call.
///
/// Transport-class variants (`Transport`, `Decode`) mean the backend was
/// unreachable or answered with a body we could not read. Application-class
/// variants (`Application`, `Rejected`) mean the backend answered with a
/// structured refusal. Callers that only need something to show the user
/// should use [`RequestError::user_message`].
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection refused, DNS failure, reset mid-body and so on.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful status whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx status. `message` is already display-ready.
    #[error("{message}")]
    Application { status: u16, message: String },

    /// 2xx status but the payload reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request was never sent (bad URL, missing form field).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RequestError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
