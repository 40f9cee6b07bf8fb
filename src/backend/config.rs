#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

pub const API_URL_VAR: &str = "PREDIXA_API_URL";
pub const TIMEOUT_VAR: &str = "PREDIXA_TIMEOUT_SECS";

/// Where the Prediction Service lives. Resolved once at startup and handed
/// to the client; nothing downstream reads the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub api_base: String,
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        if api_base.is_empty() {
            return Err(anyhow!("{API_URL_VAR} is empty"));
        }
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(anyhow!(
                "{API_URL_VAR} must start with http:// or https://, got {api_base}"
            ));
        }
        Ok(Self {
            api_base,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base = lookup(API_URL_VAR).ok_or_else(|| anyhow!("{API_URL_VAR} not set"))?;
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(s) if !s.trim().is_empty() => {
                let secs: u64 = s
                    .trim()
                    .parse()
                    .with_context(|| format!("{TIMEOUT_VAR} must be whole seconds, got {s:?}"))?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };
        Ok(Self::new(&base)?.with_timeout(timeout))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
