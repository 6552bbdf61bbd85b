// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Meraki Dashboard API Client Library
//!
//! This client provides typed access to the subset of the Cisco Meraki
//! Dashboard API v1 used by this repository's example scripts: eSIM swaps,
//! floor-plan auto-locate job recalculation, and site-to-site VPN firewall
//! rule updates. The surface is documented by the `DashboardApi` trait in
//! the meraki-api crate.
//!
//! Every method performs exactly one HTTP request, sends the given payload
//! unmodified, and returns the response body as raw JSON. Responses are
//! deliberately untyped: callers print them verbatim and assert no schema.
//!
//! ## Usage
//!
//! ```ignore
//! use meraki_api::OrganizationId;
//! use meraki_client::Client;
//!
//! let dashboard = Client::new("your-api-key")?;
//!
//! let organization_id = OrganizationId::new("549236");
//! let response = dashboard
//!     .create_organization_cellular_gateway_esims_swap(&organization_id, &swaps)
//!     .await?;
//!
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use thiserror::Error;
use url::Url;

// Re-export the request model from the API crate for convenience
pub use meraki_api::{
    AutoLocateDevice, AutoLocatePosition, EsimSwap, EsimSwapTarget, EsimsSwapRequest, NetworkId,
    OrganizationId, RecalculateAutoLocateJobRequest, RulePolicy, RuleProtocol, VpnFirewallRule,
    VpnFirewallRulesUpdate,
};

/// Production Dashboard API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com";

/// Errors that can occur on the request path
#[derive(Error, Debug)]
pub enum Error {
    /// The base URL could not be parsed
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The API key contains bytes that cannot appear in an HTTP header
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// Transport-level failure (connect, timeout, body decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The dashboard answered with a non-success status
    #[error("dashboard API returned {status}: {body}")]
    Api {
        /// HTTP status returned by the dashboard
        status: StatusCode,
        /// Response body, verbatim
        body: String,
    },
}

/// A client for the Meraki Dashboard API.
///
/// The client holds a connection pool and the bearer API key; cloning is
/// cheap and all methods take `&self`.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client for the production Dashboard API.
    ///
    /// # Arguments
    /// * `api_key` - Dashboard API key, sent as a bearer token on every
    ///   request
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL.
    ///
    /// Used by integration tests and local stub runs; the `/api/v1` prefix
    /// is appended by the client and must not be part of `base_url`.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, Error> {
        let base = Url::parse(base_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("meraki-client/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Swap which profile an eSIM uses.
    ///
    /// # Arguments
    /// * `organization_id` - Organization the cellular gateways belong to
    /// * `swaps` - Swaps to perform, each pairing an EID with a target
    ///   account, communication plan, and rate plan
    pub async fn create_organization_cellular_gateway_esims_swap(
        &self,
        organization_id: &OrganizationId,
        swaps: &[EsimSwap],
    ) -> Result<serde_json::Value, Error> {
        let url = self.endpoint_url(&format!(
            "organizations/{organization_id}/cellularGateway/esims/swap"
        ));
        tracing::debug!(%organization_id, swaps = swaps.len(), "creating eSIM swap");

        let body = EsimsSwapRequest {
            swaps: swaps.to_vec(),
        };
        self.execute(self.http.post(&url).json(&body)).await
    }

    /// Recalculate a floor-plan auto-locate job.
    ///
    /// # Arguments
    /// * `network_id` - Network the floor plan belongs to
    /// * `job_id` - Identifier of the running auto-locate job
    /// * `devices` - Device positions seeding the recalculation; anchors are
    ///   held fixed
    pub async fn recalculate_network_floor_plans_auto_locate_job(
        &self,
        network_id: &NetworkId,
        job_id: &str,
        devices: &[AutoLocateDevice],
    ) -> Result<serde_json::Value, Error> {
        let url = self.endpoint_url(&format!(
            "networks/{network_id}/floorPlans/autoLocate/jobs/{job_id}/recalculate"
        ));
        tracing::debug!(%network_id, job_id, devices = devices.len(), "recalculating auto-locate job");

        let body = RecalculateAutoLocateJobRequest {
            devices: devices.to_vec(),
        };
        self.execute(self.http.post(&url).json(&body)).await
    }

    /// Replace an organization's site-to-site VPN firewall rules.
    ///
    /// # Arguments
    /// * `organization_id` - Organization whose rule set is replaced
    /// * `update` - Ordered rule list plus the default-rule syslog flag
    pub async fn update_organization_appliance_vpn_vpn_firewall_rules(
        &self,
        organization_id: &OrganizationId,
        update: &VpnFirewallRulesUpdate,
    ) -> Result<serde_json::Value, Error> {
        let url = self.endpoint_url(&format!(
            "organizations/{organization_id}/appliance/vpn/vpnFirewallRules"
        ));
        tracing::debug!(%organization_id, rules = update.rules.len(), "updating VPN firewall rules");

        self.execute(self.http.put(&url).json(update)).await
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, Error> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        Ok(response.json().await?)
    }
}
