//! Error Types
//!
//! One enum per concern. Fetch failures are the only ones that reach the user,
//! through the localized messages below.

use thiserror::Error;

/// Prefix for a failed timetable load.
const FETCH_FAILED_PREFIX: &str = "시간표를 불러오는 중 오류가 발생했습니다";
/// Prefix for a failed configuration save.
const SAVE_FAILED_PREFIX: &str = "설정을 저장하는 중 오류가 발생했습니다";

/// Failure talking to the remote timetable service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status.
    #[error("Error: {0}")]
    Status(u16),

    /// The request never produced a response (DNS, connection, TLS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the timetable schema.
    #[error("invalid timetable response at `{path}`: {message}")]
    Decode { path: String, message: String },
}

impl FetchError {
    /// Message shown when loading a timetable fails.
    pub fn load_message(&self) -> String {
        format!("{}: {}", FETCH_FAILED_PREFIX, self)
    }

    /// Message shown when saving a new configuration fails.
    pub fn save_message(&self) -> String {
        format!("{}: {}", SAVE_FAILED_PREFIX, self)
    }

    pub(crate) fn decode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        FetchError::Decode {
            path,
            message: err.into_inner().to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Transport(err.to_string()),
        }
    }
}

/// Failure reading or writing persisted local state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a store action with a success/failure contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `save_config` was called without a staged draft.
    #[error("no pending configuration to save")]
    NoPendingConfig,

    /// A newer request was issued while this one was in flight; its result was dropped.
    #[error("request superseded by a newer one")]
    Superseded,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Invalid API configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config has an empty api url for the {0} environment")]
    EmptyApiUrl(&'static str),
}

/// Period layout could not be built from the given inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("lunch cannot be placed after period {lunch_after}: only {periods} periods exist")]
    LunchOutOfRange { lunch_after: u32, periods: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_service_wording() {
        let err = FetchError::Status(404);
        assert_eq!(err.to_string(), "Error: 404");
        assert_eq!(
            err.load_message(),
            "시간표를 불러오는 중 오류가 발생했습니다: Error: 404"
        );
        assert_eq!(
            err.save_message(),
            "설정을 저장하는 중 오류가 발생했습니다: Error: 404"
        );
    }

    #[test]
    fn test_decode_error_keeps_path() {
        let json = r#"{"day_time": [1]}"#;
        let de = &mut serde_json::Deserializer::from_str(json);
        let result: Result<crate::TimetableSnapshot, _> = serde_path_to_error::deserialize(de);
        let err = FetchError::decode(result.unwrap_err());
        match err {
            FetchError::Decode { path, .. } => assert_eq!(path, "day_time[0]"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
