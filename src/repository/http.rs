use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ApiRequest, ApiTransport, Method};

/// reqwest-backed client for the content backend.
#[derive(Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
}

impl HttpRepository {
    /// Builds an anonymous client for `base_url` (e.g. `http://localhost:5000/api/v1`).
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }
}

impl ApiTransport for HttpRepository {
    async fn send(&self, request: ApiRequest) -> RepositoryResult<Value> {
        let url = format!("{}{}", self.base_url, request.path_and_query());
        log::debug!("{} {}", request.method.as_str(), url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::Network(e.to_string()))?;
        unwrap_envelope(status, &body)
    }
}

/// Maps a raw backend response onto the envelope's `data`.
///
/// Any 2xx is a success unless the body says `"success": false`; an empty
/// body (`204 No Content`) yields `null`.
fn unwrap_envelope(status: u16, body: &str) -> RepositoryResult<Value> {
    let envelope = serde_json::from_str::<Envelope>(body);
    match status {
        200..=299 if body.trim().is_empty() => Ok(Value::Null),
        200..=299 => {
            let envelope = envelope?;
            match envelope.success {
                Some(false) => Err(RepositoryError::Rejected(
                    envelope.message.unwrap_or_default(),
                )),
                _ => Ok(envelope.data),
            }
        }
        401 => Err(RepositoryError::Unauthorized),
        404 => Err(RepositoryError::NotFound),
        _ => {
            let message = envelope
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| body.trim().to_string());
            Err(RepositoryError::Status { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let data = unwrap_envelope(200, r#"{"success":true,"data":[{"_id":"1"}]}"#).unwrap();
        assert_eq!(data, json!([{"_id": "1"}]));
    }

    #[test]
    fn missing_data_is_null() {
        let data = unwrap_envelope(200, r#"{"success":true}"#).unwrap();
        assert_eq!(data, Value::Null);
    }

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(unwrap_envelope(204, ""), Ok(Value::Null));
        assert_eq!(unwrap_envelope(200, "  \n"), Ok(Value::Null));
    }

    #[test]
    fn envelope_without_success_flag_is_accepted() {
        assert_eq!(unwrap_envelope(200, r#"{"data":{}}"#), Ok(json!({})));
        assert_eq!(unwrap_envelope(201, r#"{"message":"Created"}"#), Ok(Value::Null));
    }

    #[test]
    fn unsuccessful_envelope_is_rejected() {
        let err = unwrap_envelope(200, r#"{"success":false,"message":"Email taken"}"#).unwrap_err();
        assert_eq!(err, RepositoryError::Rejected("Email taken".into()));
        assert_eq!(err.backend_message(), Some("Email taken"));
    }

    #[test]
    fn error_statuses_are_classified() {
        assert_eq!(unwrap_envelope(401, ""), Err(RepositoryError::Unauthorized));
        assert_eq!(unwrap_envelope(404, "{}"), Err(RepositoryError::NotFound));
        assert_eq!(
            unwrap_envelope(422, r#"{"success":false,"message":"Title is required"}"#),
            Err(RepositoryError::Status {
                status: 422,
                message: "Title is required".into()
            })
        );
        assert_eq!(
            unwrap_envelope(502, "Bad Gateway"),
            Err(RepositoryError::Status {
                status: 502,
                message: "Bad Gateway".into()
            })
        );
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert!(matches!(
            unwrap_envelope(200, "<html>"),
            Err(RepositoryError::Decode(_))
        ));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let repo = HttpRepository::new("http://localhost:5000/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(repo.base_url, "http://localhost:5000/api/v1");
        assert!(repo.authorized("t").token.is_some());
    }
}
