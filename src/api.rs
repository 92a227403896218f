use crate::clock::parse_server_date;
use crate::errors::ApiError;
use crate::models::{StatusResponse, StatusSnapshot, StopResponse, TotalResponse};
use reqwest::{header::DATE, Client, Response};
use tracing::{debug, warn};

/// Thin client over the remote time-tracker endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        let res = self.http.get(self.endpoint("status")).send().await.map_err(failed)?;
        let res = ensure_success(res, "Status request failed")?;

        let server_now = res
            .headers()
            .get(DATE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_server_date);
        let status: StatusResponse = res.json().await.map_err(failed)?;
        debug!(
            running = status.is_running,
            started_at = ?status.started_at,
            server_clock = server_now.is_some(),
            "fetched status"
        );

        Ok(StatusSnapshot { status, server_now })
    }

    pub async fn start(&self) -> Result<(), ApiError> {
        let res = self.http.post(self.endpoint("start")).send().await.map_err(failed)?;
        ensure_success(res, "Start failed")?;
        Ok(())
    }

    /// The body is read before the status check: failures carry their reason
    /// in the `error` field.
    pub async fn stop(&self) -> Result<StopResponse, ApiError> {
        let res = self.http.post(self.endpoint("stop")).send().await.map_err(failed)?;
        let status = res.status();
        let bytes = res.bytes().await.map_err(failed)?;
        let body: StopResponse = serde_json::from_slice(&bytes).map_err(failed)?;

        if !status.is_success() {
            let message = body
                .error
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| "Stop failed".to_string());
            warn!(%status, "stop rejected: {message}");
            return Err(ApiError::rejected(status, message));
        }

        Ok(body)
    }

    pub async fn total(&self) -> Result<TotalResponse, ApiError> {
        let res = self.http.get(self.endpoint("total")).send().await.map_err(failed)?;
        let res = ensure_success(res, "Total request failed")?;
        res.json().await.map_err(failed)
    }

    pub async fn reset(&self) -> Result<(), ApiError> {
        let res = self.http.post(self.endpoint("reset")).send().await.map_err(failed)?;
        ensure_success(res, "Reset failed")?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        let url = format!("{}/{path}", self.base_url);
        debug!("request {url}");
        url
    }
}

fn failed(err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    warn!("request failed: {err}");
    err
}

fn ensure_success(res: Response, message: &str) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    warn!(%status, url = %res.url(), "{message}");
    Err(ApiError::rejected(status, message))
}
