use cinelog_gateways::GatewayError;

/// Local precondition failures are their own variants so callers can tell
/// "nothing was attempted" from a request that went out and failed.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no active session; log in first")]
    NoSession,

    #[error("nothing to submit: set a rating or write some content")]
    EmptyDraft,

    #[error("no review selected")]
    NoSelection,

    #[error("review {0} is not in the loaded list")]
    UnknownReview(i64),

    #[error("movie {0} not found")]
    MovieNotFound(u64),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
