//! Lifecycle of a remote operation: not requested, in flight, or settled.

use std::fmt;

use serde::Serialize;

use crate::error::WebDataError;

/// Status of an asynchronous request whose success carries a `B`.
///
/// No transition order is enforced; any variant may follow any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum RemoteStatus<B, E = WebDataError> {
    NotAsked,
    Loading,
    Success(B),
    Failure(E),
}

impl<B, E> Default for RemoteStatus<B, E> {
    fn default() -> Self {
        Self::NotAsked
    }
}

impl<B, E> RemoteStatus<B, E> {
    pub const fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Whether the request has finished, successfully or not.
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    pub const fn success(&self) -> Option<&B> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub const fn failure(&self) -> Option<&E> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub const fn as_ref(&self) -> RemoteStatus<&B, &E> {
        match self {
            Self::NotAsked => RemoteStatus::NotAsked,
            Self::Loading => RemoteStatus::Loading,
            Self::Success(payload) => RemoteStatus::Success(payload),
            Self::Failure(err) => RemoteStatus::Failure(err),
        }
    }

    pub fn map<B2, F>(self, f: F) -> RemoteStatus<B2, E>
    where
        F: FnOnce(B) -> B2,
    {
        match self {
            Self::NotAsked => RemoteStatus::NotAsked,
            Self::Loading => RemoteStatus::Loading,
            Self::Success(payload) => RemoteStatus::Success(f(payload)),
            Self::Failure(err) => RemoteStatus::Failure(err),
        }
    }

    pub fn map_err<E2, F>(self, f: F) -> RemoteStatus<B, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::NotAsked => RemoteStatus::NotAsked,
            Self::Loading => RemoteStatus::Loading,
            Self::Success(payload) => RemoteStatus::Success(payload),
            Self::Failure(err) => RemoteStatus::Failure(f(err)),
        }
    }

    /// The success payload, or `default` for every other variant.
    pub fn with_default(self, default: B) -> B {
        match self {
            Self::Success(payload) => payload,
            _ => default,
        }
    }

    /// Stable lowercase label for logs and status lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotAsked => "not_asked",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

impl<B, E> From<Result<B, E>> for RemoteStatus<B, E> {
    fn from(result: Result<B, E>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Failure(err),
        }
    }
}

impl<B, E> fmt::Display for RemoteStatus<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Status = RemoteStatus<u32>;

    #[test]
    fn test_default_is_not_asked() {
        assert_eq!(Status::default(), RemoteStatus::NotAsked);
    }

    #[test]
    fn test_predicates() {
        assert!(Status::NotAsked.is_not_asked());
        assert!(Status::Loading.is_loading());
        assert!(Status::Success(1).is_success());
        assert!(Status::Failure(WebDataError::Timeout).is_failure());

        assert!(!Status::NotAsked.is_settled());
        assert!(!Status::Loading.is_settled());
        assert!(Status::Success(1).is_settled());
        assert!(Status::Failure(WebDataError::NetworkError).is_settled());
    }

    #[test]
    fn test_success_and_failure_accessors() {
        assert_eq!(Status::Success(7).success(), Some(&7));
        assert_eq!(Status::Loading.success(), None);
        assert_eq!(
            Status::Failure(WebDataError::Timeout).failure(),
            Some(&WebDataError::Timeout)
        );
        assert_eq!(Status::Success(7).failure(), None);
    }

    #[test]
    fn test_map_only_touches_success() {
        assert_eq!(Status::Success(2).map(|n| n * 3), RemoteStatus::Success(6));
        assert_eq!(Status::Loading.map(|n| n * 3), RemoteStatus::Loading);
        assert_eq!(
            Status::Failure(WebDataError::Timeout).map(|n| n * 3),
            RemoteStatus::Failure(WebDataError::Timeout)
        );
    }

    #[test]
    fn test_map_err_only_touches_failure() {
        let s = Status::Failure(WebDataError::BadStatus(500)).map_err(|e| e.to_string());
        assert_eq!(
            s,
            RemoteStatus::Failure("server responded with status 500".to_string())
        );
        let s = Status::Success(1).map_err(|e| e.to_string());
        assert_eq!(s, RemoteStatus::Success(1));
    }

    #[test]
    fn test_with_default() {
        assert_eq!(Status::Success(5).with_default(0), 5);
        assert_eq!(Status::NotAsked.with_default(0), 0);
        assert_eq!(Status::Failure(WebDataError::Timeout).with_default(0), 0);
    }

    #[test]
    fn test_from_result() {
        let ok: Status = Ok(1).into();
        assert_eq!(ok, RemoteStatus::Success(1));
        let err: Status = Err(WebDataError::NetworkError).into();
        assert_eq!(err, RemoteStatus::Failure(WebDataError::NetworkError));
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(Status::NotAsked.kind(), "not_asked");
        assert_eq!(Status::Loading.to_string(), "loading");
        assert_eq!(Status::Success(0).to_string(), "success");
        assert_eq!(Status::Failure(WebDataError::Timeout).to_string(), "failure");
    }

    #[test]
    fn test_as_ref_borrows_payload() {
        let s = RemoteStatus::<String>::Success("ok".to_string());
        assert_eq!(s.as_ref().map(String::len), RemoteStatus::Success(2));
    }

    #[test]
    fn test_serializes_unit_success() {
        let s: RemoteStatus<()> = RemoteStatus::Success(());
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"type":"Success","content":null}"#
        );
    }
}
