//! Per-day aggregate endpoints.

use chrono::NaiveDate;
use naplog_core::DailySummary;
use naplog_core::requests::ClearDayRequest;
use naplog_core::time::format_date;

use crate::http::{check_response, decode_json};
use crate::{ClientError, SleepApiClient};

impl SleepApiClient {
    /// Fetch the summary of completed naps for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn summary(&self, date: NaiveDate) -> Result<DailySummary, ClientError> {
        let date = format_date(date);
        tracing::debug!(%date, "GET /summary");
        let url = self.url(&format!("/summary?date={date}"));
        let resp = check_response(self.http.get(url).send().await?).await?;
        decode_json(resp).await
    }

    /// Delete every nap recorded on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or non-success status.
    pub async fn clear_day(&self, date: NaiveDate) -> Result<(), ClientError> {
        let body = ClearDayRequest {
            date: format_date(date),
        };
        tracing::debug!(date = %body.date, "POST /clear-day");
        let req = self.http.post(self.url("/clear-day")).json(&body);
        check_response(req.send().await?).await?;
        Ok(())
    }
}
