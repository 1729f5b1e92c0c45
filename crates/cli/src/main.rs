//! Command-line driver for the create flow.
//!
//! `deckgen <topic> [slides] [theme]` submits one presentation request
//! to the configured service and prints the download and detail links.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckgen_client::api::PresentationApi;
use deckgen_client::config::ServiceConfig;
use deckgen_flow::controller::FormFlow;
use deckgen_flow::presenter::{present, ResultView};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(topic) = args.next() else {
        eprintln!("usage: deckgen <topic> [slides] [theme]");
        return ExitCode::FAILURE;
    };
    let slides = args.next().unwrap_or_else(|| "5".to_string());
    let theme = args.next().unwrap_or_else(|| "default".to_string());

    let config = ServiceConfig::from_env();
    tracing::info!(origin = %config.origin, "Using presentation service");
    let api = Arc::new(PresentationApi::new(&config));

    let mut flow = FormFlow::create(api);
    flow.set_topic(topic);
    flow.set_slide_count(&slides);
    flow.set_theme(theme);
    flow.submit().await;

    match present(flow.state(), &config) {
        ResultView::Success {
            download_href,
            detail_href,
            ..
        } => {
            println!("Download: {download_href}");
            println!("Details:  {detail_href}");
            ExitCode::SUCCESS
        }
        ResultView::Error { message, .. } => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
        _ => {
            for violation in flow.violations() {
                eprintln!("{}: {}", violation.field, violation.message);
            }
            ExitCode::FAILURE
        }
    }
}
