use thiserror::Error;

/// Failures absorbed by [`crate::UsageHistoryStore`].
///
/// None of these reach the caller of a history operation; they are handed
/// to the injected [`crate::DiagnosticSink`] and the operation falls back
/// to an empty log or becomes a no-op.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("malformed history data under {key}: {source}")]
    MalformedPersistedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store unavailable during {operation} of {key}: {reason}")]
    StoreUnavailable {
        operation: &'static str,
        key: String,
        reason: String,
    },

    #[error("failed to encode history: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HistoryError {
    pub fn unavailable(operation: &'static str, key: &str, reason: impl ToString) -> Self {
        HistoryError::StoreUnavailable {
            operation,
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
