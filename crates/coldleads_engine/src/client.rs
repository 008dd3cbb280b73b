use std::time::Duration;

use coldleads_logging::{clip_for_log, leads_debug, leads_info, leads_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::{FailureKind, ServiceReply, TransportError};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const GENERATE_LEAD_PATH: &str = "generate-lead";

const LOGGED_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    /// `None` leaves connection setup unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the whole request unbounded.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: format!("{DEFAULT_API_BASE}/{GENERATE_LEAD_PATH}"),
            connect_timeout: None,
            request_timeout: None,
            max_response_bytes: 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn for_api_base(api_base: &str) -> Result<Self, TransportError> {
        Ok(Self {
            endpoint: endpoint_for(api_base)?,
            ..Self::default()
        })
    }
}

/// Resolve the generate-lead endpoint below `api_base`, keeping any base path.
pub fn endpoint_for(api_base: &str) -> Result<String, TransportError> {
    let mut base = Url::parse(api_base.trim())
        .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(GENERATE_LEAD_PATH)
        .map(String::from)
        .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))
}

#[derive(Serialize)]
struct GenerateLeadBody<'a> {
    url: &'a str,
}

#[async_trait::async_trait]
pub trait LeadService: Send + Sync {
    /// POST `url` to the service. Any HTTP status counts as a reply.
    async fn generate(&self, url: &str) -> Result<ServiceReply, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLeadService {
    settings: ClientSettings,
}

impl ReqwestLeadService {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_response_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_response_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    fn too_large(&self, actual: u64) -> TransportError {
        TransportError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_response_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl LeadService for ReqwestLeadService {
    async fn generate(&self, url: &str) -> Result<ServiceReply, TransportError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let payload = serde_json::to_vec(&GenerateLeadBody { url })
            .map_err(|err| TransportError::new(FailureKind::Body, err.to_string()))?;
        let client = self.build_client()?;

        leads_debug!("POST {} url={}", endpoint, url);
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        // Past the status line the reply counts; an unreadable body is classified as empty.
        let body = match self.read_body(response).await {
            Ok(body) => body,
            Err(err) => {
                leads_warn!("Discarding body of {} reply: {}", status, err);
                Vec::new()
            }
        };

        leads_info!("Lead service answered {} ({} bytes)", status, body.len());
        leads_debug!(
            "Response body: {}",
            clip_for_log(&String::from_utf8_lossy(&body), LOGGED_BODY_CHARS)
        );
        Ok(ServiceReply { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_body() || err.is_decode() {
        return TransportError::new(FailureKind::Body, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
