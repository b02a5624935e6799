//! Remote Timetable Service
//!
//! The store only sees the [`TimetableService`] trait; the HTTP client below
//! is the production implementation and works on native and wasm targets.

use crate::config::ApiConfig;
use crate::domain::{ClassConfig, TimetableSnapshot, Week};
use crate::error::FetchError;

/// Source of weekly timetables.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread.
#[allow(async_fn_in_trait)]
pub trait TimetableService {
    async fn fetch_week(
        &self,
        config: &ClassConfig,
        week: Week,
    ) -> Result<TimetableSnapshot, FetchError>;
}

/// `GET {api_url}/timetable?grade=..&classno=..&week=..&schoolcode=..`
#[derive(Debug, Clone)]
pub struct HttpTimetableService {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTimetableService {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.api_url())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self) -> String {
        format!("{}/timetable", self.api_url.trim_end_matches('/'))
    }
}

/// Query pairs sent to the service.
pub fn query_params(config: &ClassConfig, week: Week) -> [(&'static str, &str); 4] {
    [
        ("grade", config.grade.as_str()),
        ("classno", config.class_no.as_str()),
        ("week", week.as_param()),
        ("schoolcode", config.school_code.as_str()),
    ]
}

/// Decode a response body, reporting the JSON path of the first mismatch.
pub fn decode_snapshot(body: &str) -> Result<TimetableSnapshot, FetchError> {
    let de = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(de).map_err(FetchError::decode)
}

impl TimetableService for HttpTimetableService {
    async fn fetch_week(
        &self,
        config: &ClassConfig,
        week: Week,
    ) -> Result<TimetableSnapshot, FetchError> {
        let url = self.endpoint();
        tracing::debug!(%url, grade = %config.grade, class = %config.class_no, week = week.as_param(), "requesting timetable");

        let params = query_params(config, week);
        let response = self
            .client
            .get(&url)
            .query(&params[..])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "timetable request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_snapshot(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let config = ClassConfig::default();
        let params = query_params(&config, Week::Next);
        assert_eq!(
            params,
            [
                ("grade", "3"),
                ("classno", "4"),
                ("week", "1"),
                ("schoolcode", "7081492"),
            ]
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let service = HttpTimetableService::new("http://localhost:8000/");
        assert_eq!(service.endpoint(), "http://localhost:8000/timetable");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode_snapshot(r#"{"day_time": [], "timetable": [[{"period": "x"}]], "update_date": ""}"#)
            .unwrap_err();
        match err {
            FetchError::Decode { path, .. } => assert_eq!(path, "timetable[0][0].period"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_accepts_valid_body() {
        let snapshot = decode_snapshot(
            r#"{"day_time": ["1(08:50~09:35)"], "timetable": [[{"period": 1, "subject": "국어", "teacher": "김*", "replaced": false, "original": null}]], "update_date": "(now)"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.period_count(), 1);
    }
}
