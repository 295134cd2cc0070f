use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One GET with query parameters. Non-2xx statuses are returned, not raised;
/// `Err` means the request never produced a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse>;
}

/// reqwest-backed transport shared by all services
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("impossibile creare il client HTTP")?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("GET {} -> {}", url, status);
        Ok(HttpResponse { status, body })
    }
}
