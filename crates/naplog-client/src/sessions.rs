//! In-progress session endpoints.

use naplog_core::SleepSession;
use naplog_core::entities::ActiveSessionResponse;
use naplog_core::requests::{EndSleepRequest, StartSleepRequest};

use crate::http::{check_response, decode_json};
use crate::{ClientError, SleepApiClient};

impl SleepApiClient {
    /// Fetch the session currently in progress, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn active_session(&self) -> Result<Option<SleepSession>, ClientError> {
        tracing::debug!("GET /active");
        let resp = check_response(self.http.get(self.url("/active")).send().await?).await?;
        let data: ActiveSessionResponse = decode_json(resp).await?;
        Ok(data.active_session)
    }

    /// Open a new session; the backend assigns the start time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    pub async fn start_sleep(&self) -> Result<(), ClientError> {
        tracing::debug!("POST /start");
        let req = self
            .http
            .post(self.url("/start"))
            .json(&StartSleepRequest::default());
        check_response(req.send().await?).await?;
        Ok(())
    }

    /// Close the most recent open session; the backend assigns the end time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status
    /// (including when no session is open).
    pub async fn end_sleep(&self) -> Result<(), ClientError> {
        tracing::debug!("POST /end");
        let req = self
            .http
            .post(self.url("/end"))
            .json(&EndSleepRequest::default());
        check_response(req.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::ClientError;
    use crate::testing::{FakeBackend, Reply};

    #[tokio::test]
    async fn active_session_decodes_session() {
        let backend = FakeBackend::start();
        backend.reply(
            "GET",
            "/active",
            Reply::ok(json!({ "active_session": { "id": 4, "start_time": "08:15 PM" } })),
        );

        let session = backend.client().active_session().await.unwrap();
        assert_eq!(session.map(|s| s.start_time).as_deref(), Some("08:15 PM"));
    }

    #[tokio::test]
    async fn active_session_none_when_null() {
        let backend = FakeBackend::start();
        backend.reply("GET", "/active", Reply::ok(json!({ "active_session": null })));

        assert!(backend.client().active_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn active_session_malformed_body_is_parse_error() {
        let backend = FakeBackend::start();
        backend.reply("GET", "/active", Reply::raw(200, "<html>oops</html>"));

        let err = backend.client().active_session().await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn start_sends_null_start_time_as_json() {
        let backend = FakeBackend::start();
        backend.reply("POST", "/start", Reply::json(201, json!({ "id": 1 })));

        backend.client().start_sleep().await.unwrap();

        let sent = backend.requests_to("POST", "/start");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].json(), json!({ "start_time": null }));
        assert_eq!(sent[0].content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn end_sends_null_fields() {
        let backend = FakeBackend::start();
        backend.reply("POST", "/end", Reply::ok(json!({ "message": "Sleep session ended" })));

        backend.client().end_sleep().await.unwrap();

        let sent = backend.requests_to("POST", "/end");
        assert_eq!(sent[0].json(), json!({ "sleep_id": null, "end_time": null }));
    }

    #[tokio::test]
    async fn end_without_session_is_api_error() {
        let backend = FakeBackend::start();
        backend.reply(
            "POST",
            "/end",
            Reply::json(400, json!({ "error": "No active sleep session found" })),
        );

        let err = backend.client().end_sleep().await.unwrap_err();
        assert_eq!(err.server_message(), Some("No active sleep session found"));
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let backend = FakeBackend::start();
        backend.reply(
            "GET",
            "/active",
            Reply::ok(json!({ "active_session": null })).delayed(std::time::Duration::from_secs(4)),
        );

        let err = backend.client().active_session().await.unwrap_err();
        match err {
            ClientError::Http(inner) => assert!(inner.is_timeout()),
            other => panic!("expected timeout, got {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let config = naplog_config::ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 1,
            ..Default::default()
        };
        let client = crate::SleepApiClient::new(&config).unwrap();
        let err = client.active_session().await.unwrap_err();
        assert!(err.is_transport());
    }
}
