use crate::domain::error::{AppError, Result};
use crate::domain::request::TranslateRequest;
use async_trait::async_trait;
use url::Url;

/// What came back from the proxy: the status and the JSON body, if the body
/// was JSON at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

#[async_trait]
pub trait ProxyTransport: Send + Sync {
    /// Issues exactly one request. Fails with `ClientTransport` only when no
    /// response arrived.
    async fn send(&self, request: &TranslateRequest) -> Result<ProxyReply>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: translate_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn translate_endpoint(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| AppError::Internal(format!("Invalid proxy URL {}: {}", base_url, e)))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("api/translate")
        .map_err(|e| AppError::Internal(format!("Invalid proxy URL {}: {}", base_url, e)))
}

#[async_trait]
impl ProxyTransport for HttpTransport {
    async fn send(&self, request: &TranslateRequest) -> Result<ProxyReply> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ClientTransport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.ok();

        Ok(ProxyReply { status, body })
    }
}
