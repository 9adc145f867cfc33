use serde::Serialize;
use thiserror::Error;

/// Why a remote save did not succeed.
///
/// Stored as data inside [`RemoteStatus::Failure`](crate::status::RemoteStatus::Failure);
/// nothing in the wrapper API returns it as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum WebDataError {
    #[error("bad url: {0}")]
    BadUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error")]
    NetworkError,
    #[error("server responded with status {0}")]
    BadStatus(u16),
    #[error("unexpected payload: {0}")]
    BadPayload(String),
}
