// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub Dashboard API server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p meraki-stub-server
//! ```
//!
//! Then point the example scripts at it by constructing the client with
//! `Client::with_base_url(API_KEY, "http://localhost:9090")`.

use anyhow::Result;
use dropshot::{ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use meraki_stub_server::{StubContext, api_description};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let log_config = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };
    let log = log_config.to_logger("meraki-stub-server")?;

    let context = Arc::new(StubContext::new());

    let config = ConfigDropshot {
        bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 9090)),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    tracing::info!("Stub Dashboard API server listening on http://localhost:9090");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /api/v1/organizations/{{organization_id}}/cellularGateway/esims/swap");
    tracing::info!(
        "  POST /api/v1/networks/{{network_id}}/floorPlans/autoLocate/jobs/{{job_id}}/recalculate"
    );
    tracing::info!("  PUT  /api/v1/organizations/{{organization_id}}/appliance/vpn/vpnFirewallRules");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
