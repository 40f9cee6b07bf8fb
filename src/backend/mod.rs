#![cfg(feature = "server")]

pub mod config;
pub mod predixa;

use once_cell::sync::OnceCell;

pub use config::ServiceConfig;
pub use predixa::PredixaClient;

pub static GLOBAL_CLIENT: OnceCell<PredixaClient> = OnceCell::new();

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));
    // dioxus may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

/// Builds the shared client from `config`. Later calls keep the first client.
pub fn init(config: &ServiceConfig) -> anyhow::Result<&'static PredixaClient> {
    GLOBAL_CLIENT.get_or_try_init(|| PredixaClient::new(config))
}
