//! Completed-nap endpoints.

use naplog_core::requests::{ManualNapRequest, UpdateNapRequest};

use crate::http::check_response;
use crate::{ClientError, SleepApiClient};

impl SleepApiClient {
    /// Record a completed nap with explicit `YYYY-MM-DD HH:MM` bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    /// The backend's validation message is available through
    /// [`ClientError::server_message`].
    pub async fn add_manual_nap(&self, body: &ManualNapRequest) -> Result<(), ClientError> {
        tracing::debug!(start = %body.start_time, end = %body.end_time, "POST /manual-nap");
        let req = self.http.post(self.url("/manual-nap")).json(body);
        check_response(req.send().await?).await?;
        Ok(())
    }

    /// Change the bounds of an existing nap.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    pub async fn update_nap(&self, id: i64, body: &UpdateNapRequest) -> Result<(), ClientError> {
        tracing::debug!(id, "PUT /nap");
        let req = self.http.put(self.url(&format!("/nap/{id}"))).json(body);
        check_response(req.send().await?).await?;
        Ok(())
    }

    /// Remove a single nap.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    pub async fn delete_nap(&self, id: i64) -> Result<(), ClientError> {
        tracing::debug!(id, "DELETE /nap");
        let resp = self.http.delete(self.url(&format!("/nap/{id}"))).send().await?;
        check_response(resp).await?;
        Ok(())
    }
}
