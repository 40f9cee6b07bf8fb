#![cfg(feature = "server")]
use anyhow::Context;
use dioxus::logger::tracing::{debug, error, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::error::Error as _;
use thiserror::Error;

use crate::backend::config::ServiceConfig;
use crate::shared::types::{extract_error_message, HistoryRecordDto, PredictionDto};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("sending GET {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} failed with status {status}")]
    Status {
        url: String,
        status: StatusCode,
        message: Option<String>,
    },
    #[error("decoding JSON from GET {url} failed: {reason}")]
    Decode { url: String, reason: String },
}

impl ServiceError {
    /// Message the service itself put in the error body, if any.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ServiceError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredixaClient {
    config: ServiceConfig,
    http: Client,
}

impl PredixaClient {
    pub fn new(config: &ServiceConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(t) = config.timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().context("building HTTP client")?;
        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ServiceError> {
        let url = self.config.url(path);
        info!("[predixa] GET {} {:?}", url, query);
        let res = match self
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!("[predixa] request error on GET {}: {}", url, e);
                if e.is_timeout() {
                    warn!("[predixa] hint: request timed out (see PREDIXA_TIMEOUT_SECS)");
                }
                if e.is_connect() {
                    warn!("[predixa] hint: connection failed (DNS/route/refused/TLS). Check PREDIXA_API_URL");
                }
                if e.is_builder() {
                    warn!("[predixa] hint: request build error (invalid URL)");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    debug!("[predixa] error chain: {}", chain.join(" -> "));
                }
                return Err(ServiceError::Transport { url, source: e });
            }
        };

        let status = res.status();
        let bytes = res.bytes().await.map_err(|e| ServiceError::Decode {
            url: url.clone(),
            reason: format!("reading body: {e}"),
        })?;

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            warn!(
                "[predixa] request failed: status={} body=\n{}",
                status,
                snippet(&bytes)
            );
            return Err(ServiceError::Status {
                url,
                status,
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            error!("[predixa] bad JSON from GET {}: {}\nBody snippet: {}", url, e, snippet(&bytes));
            ServiceError::Decode {
                url,
                reason: e.to_string(),
            }
        })
    }

    pub async fn predict(&self, days: i32) -> Result<PredictionDto, ServiceError> {
        self.get_json("/predict/", &[("days", days.to_string())])
            .await
    }

    /// Newest first, as the service orders it.
    pub async fn history(&self) -> Result<Vec<HistoryRecordDto>, ServiceError> {
        self.get_json("/history/", &[]).await
    }
}

fn snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(300).collect()
}
