// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Stub Meraki Dashboard API server for testing
//!
//! This crate provides a Dropshot-based HTTP server that implements the
//! Dashboard API trait with vendor-shaped canned responses. It can be used
//! for:
//!
//! - Integration testing of meraki-client without vendor credentials
//! - Running the example scripts locally against a throwaway dashboard
//! - Local development and demos
//!
//! The stub recognizes the identifiers of the vendor's read-only docs
//! sandbox and answers 404 for anything else, the way the real dashboard
//! answers for a foreign tenant. Every received call is recorded and
//! exposed through [`StubContext::recorded_calls`] so tests can assert on
//! exactly what went over the wire.

use dropshot::{HttpError, HttpResponseOk, Path, RequestContext, TypedBody};
use meraki_api::{
    AutoLocateJobPath, DashboardApi, EsimsSwapRequest, OrganizationPath,
    RecalculateAutoLocateJobRequest, VpnFirewallRulesUpdate,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Organization identifier of the vendor's read-only docs sandbox
pub const SANDBOX_ORGANIZATION_ID: &str = "549236";

/// Network identifier of the vendor's read-only docs sandbox
pub const SANDBOX_NETWORK_ID: &str = "L_646829496481105433";

// ============================================================================
// Call Recording
// ============================================================================

/// One call received by the stub, as it arrived on the wire
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Vendor operation id, e.g. "createOrganizationCellularGatewayEsimsSwap"
    pub operation: String,
    /// Organization path parameter, when the operation has one
    pub organization_id: Option<String>,
    /// Network path parameter, when the operation has one
    pub network_id: Option<String>,
    /// Job path parameter, when the operation has one
    pub job_id: Option<String>,
    /// Request body, decoded as raw JSON
    pub body: serde_json::Value,
}

// ============================================================================
// Server Context
// ============================================================================

/// Context for the stub dashboard server
#[derive(Debug)]
pub struct StubContext {
    known_organizations: Vec<String>,
    known_networks: Vec<String>,
    next_swap_id: AtomicU64,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubContext {
    /// Create a context that recognizes the docs-sandbox identifiers
    pub fn new() -> Self {
        Self {
            known_organizations: vec![SANDBOX_ORGANIZATION_ID.to_string()],
            known_networks: vec![SANDBOX_NETWORK_ID.to_string()],
            next_swap_id: AtomicU64::new(1),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls received so far, oldest first
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    fn knows_organization(&self, id: &str) -> bool {
        self.known_organizations.iter().any(|o| o == id)
    }

    fn knows_network(&self, id: &str) -> bool {
        self.known_networks.iter().any(|n| n == id)
    }

    fn record(&self, call: RecordedCall) {
        self.lock_calls().push(call);
    }

    fn next_swap_id(&self) -> u64 {
        self.next_swap_id.fetch_add(1, Ordering::Relaxed)
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        // Recover rather than panic if a handler died mid-push
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for StubContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub Dashboard API implementation
pub enum StubDashboardApi {}

impl DashboardApi for StubDashboardApi {
    type Context = Arc<StubContext>;

    async fn create_organization_cellular_gateway_esims_swap(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
        body: TypedBody<EsimsSwapRequest>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError> {
        let ctx = rqctx.context();
        let path = path.into_inner();
        let request = body.into_inner();

        if !ctx.knows_organization(path.organization_id.as_str()) {
            return Err(HttpError::for_not_found(
                None,
                format!("organization not found: {}", path.organization_id),
            ));
        }

        ctx.record(RecordedCall {
            operation: "createOrganizationCellularGatewayEsimsSwap".to_string(),
            organization_id: Some(path.organization_id.as_str().to_string()),
            network_id: None,
            job_id: None,
            body: to_recorded_body(&request)?,
        });

        let eids: Vec<&str> = request.swaps.iter().map(|s| s.eid.as_str()).collect();
        Ok(HttpResponseOk(json!({
            "id": ctx.next_swap_id().to_string(),
            "organizationId": path.organization_id.as_str(),
            "status": "in progress",
            "eids": eids,
        })))
    }

    async fn recalculate_network_floor_plans_auto_locate_job(
        rqctx: RequestContext<Self::Context>,
        path: Path<AutoLocateJobPath>,
        body: TypedBody<RecalculateAutoLocateJobRequest>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError> {
        let ctx = rqctx.context();
        let path = path.into_inner();
        let request = body.into_inner();

        if !ctx.knows_network(path.network_id.as_str()) {
            return Err(HttpError::for_not_found(
                None,
                format!("network not found: {}", path.network_id),
            ));
        }

        ctx.record(RecordedCall {
            operation: "recalculateNetworkFloorPlansAutoLocateJob".to_string(),
            organization_id: None,
            network_id: Some(path.network_id.as_str().to_string()),
            job_id: Some(path.job_id),
            body: to_recorded_body(&request)?,
        });

        Ok(HttpResponseOk(json!({ "success": true })))
    }

    async fn update_organization_appliance_vpn_vpn_firewall_rules(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
        body: TypedBody<VpnFirewallRulesUpdate>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError> {
        let ctx = rqctx.context();
        let path = path.into_inner();
        let request = body.into_inner();

        if !ctx.knows_organization(path.organization_id.as_str()) {
            return Err(HttpError::for_not_found(
                None,
                format!("organization not found: {}", path.organization_id),
            ));
        }

        ctx.record(RecordedCall {
            operation: "updateOrganizationApplianceVpnVpnFirewallRules".to_string(),
            organization_id: Some(path.organization_id.as_str().to_string()),
            network_id: None,
            job_id: None,
            body: to_recorded_body(&request)?,
        });

        // The dashboard echoes the submitted rules followed by the implicit
        // default rule.
        let mut rules: Vec<serde_json::Value> = request
            .rules
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()
            .map_err(|e| HttpError::for_internal_error(e.to_string()))?;
        rules.push(json!({
            "comment": "Default rule",
            "policy": "allow",
            "protocol": "Any",
            "srcPort": "Any",
            "srcCidr": "Any",
            "destPort": "Any",
            "destCidr": "Any",
            "syslogEnabled": request.syslog_default_rule.unwrap_or(false),
        }));

        Ok(HttpResponseOk(json!({ "rules": rules })))
    }
}

fn to_recorded_body<T: serde::Serialize>(request: &T) -> Result<serde_json::Value, HttpError> {
    serde_json::to_value(request).map_err(|e| HttpError::for_internal_error(e.to_string()))
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<Arc<StubContext>>, String> {
    meraki_api::dashboard_api_mod::api_description::<StubDashboardApi>().map_err(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_description_registers_all_endpoints() {
        api_description().expect("api description should build");
    }

    #[test]
    fn test_context_knows_sandbox_ids() {
        let ctx = StubContext::new();
        assert!(ctx.knows_organization(SANDBOX_ORGANIZATION_ID));
        assert!(ctx.knows_network(SANDBOX_NETWORK_ID));
        assert!(!ctx.knows_organization("000000"));
        assert!(!ctx.knows_network("N_1234"));
    }

    #[test]
    fn test_recorded_calls_accumulate_in_order() {
        let ctx = StubContext::new();
        assert!(ctx.recorded_calls().is_empty());

        ctx.record(RecordedCall {
            operation: "first".to_string(),
            organization_id: Some(SANDBOX_ORGANIZATION_ID.to_string()),
            network_id: None,
            job_id: None,
            body: json!({}),
        });
        ctx.record(RecordedCall {
            operation: "second".to_string(),
            organization_id: None,
            network_id: Some(SANDBOX_NETWORK_ID.to_string()),
            job_id: Some("".to_string()),
            body: json!({"devices": []}),
        });

        let calls = ctx.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].operation, "first");
        assert_eq!(calls[1].operation, "second");
        assert_eq!(calls[1].job_id.as_deref(), Some(""));
    }

    #[test]
    fn test_swap_ids_are_monotonic() {
        let ctx = StubContext::new();
        let first = ctx.next_swap_id();
        let second = ctx.next_swap_id();
        assert!(second > first);
    }
}
