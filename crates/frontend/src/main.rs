mod app;
mod auth;
mod client;
mod components;
mod config;
mod pages;
mod routes;
mod storage;

use app::{App, AppProps};
use auth::FrontendAuth;
use std::rc::Rc;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    let api = match client::create_client() {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create API client");
            return;
        }
    };
    let auth: FrontendAuth = talenthub_core::AuthContext::new(BrowserStorage::local(), api);

    yew::Renderer::<App>::with_props(AppProps {
        auth: Rc::new(auth),
    })
    .render();
}

/// Route `tracing` output to the browser console
fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
