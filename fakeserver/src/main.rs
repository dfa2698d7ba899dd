//! Fake Trustpilot server binary.
//!
//! Serves the canned invitation-API and token routes for manual poking.

use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trustpilot_fakeserver::{FakeServer, Template};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let business_unit_id = env::var("BUSINESS_UNIT_ID").unwrap_or_else(|_| "123".to_string());

    let state = Arc::new(FakeServer::new(business_unit_id).with_templates(vec![Template {
        id: "template-1".to_string(),
        name: "Default".to_string(),
        is_default_template: true,
        locale: "en-US".to_string(),
        kind: "standard".to_string(),
    }]));

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("fake Trustpilot server listening on {addr}");

    trustpilot_fakeserver::run(listener, state).await?;

    Ok(())
}
