pub use reqwest::StatusCode;

/// Failure modes a gateway call can surface. Reads degrade to empty values
/// on `Rejected`-class statuses instead of returning this (the UI contract
/// treats "empty" and "failed" identically); writes propagate all three
/// variants so callers can tell a server rejection from a dead network.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the request: HTTP {status}")]
    Rejected { status: StatusCode },

    #[error("malformed response body: {0}")]
    Malformed(String),
}

impl GatewayError {
    pub fn rejected(status: StatusCode) -> Self {
        Self::Rejected { status }
    }

    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::Malformed(detail.to_string())
    }
}
