use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod dashboard;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();

        // The service base URL is required; there is no sensible default.
        let config = match backend::ServiceConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[config] {e:#}");
                std::process::exit(1);
            }
        };
        let client = match backend::init(&config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[predixa] failed to init client: {e:#}");
                std::process::exit(1);
            }
        };
        eprintln!("[predixa] using service at {}", client.api_base());
    }
    dioxus::launch(app::App);
}
