// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Meraki Dashboard API Trait Definition
//!
//! **IMPORTANT**: This trait defines a *subset* of the Cisco Meraki
//! Dashboard API v1. This is NOT a complete Dashboard API definition - it
//! only includes the specific operations invoked by the example scripts in
//! this repository:
//! 1. Create an eSIM swap for an organization's cellular gateways
//! 2. Recalculate a floor-plan auto-locate job for a network
//! 3. Update an organization's site-to-site VPN firewall rules
//!
//! The actual Dashboard API is implemented by Meraki's cloud, not by us.
//! This trait exists to:
//! 1. Document the exact Dashboard API surface we depend on
//! 2. Type the path and request-body contracts used by meraki-client
//! 3. Enable stub implementations for testing
//!
//! Reference: https://developer.cisco.com/meraki/api-v1/

use dropshot::{HttpError, HttpResponseOk, Path, RequestContext, TypedBody};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Newtypes
// ============================================================================

/// An opaque organization identifier, e.g. "549236"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrganizationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque network identifier, e.g. "L_646829496481105433"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NetworkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Path Parameters
// ============================================================================

/// Path parameters for organization-scoped operations
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationPath {
    /// Organization identifier
    pub organization_id: OrganizationId,
}

/// Path parameters for the auto-locate job recalculation operation
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AutoLocateJobPath {
    /// Network identifier
    pub network_id: NetworkId,

    /// Identifier of the auto-locate job to recalculate
    pub job_id: String,
}

// ============================================================================
// Request Types: eSIM swap
// ============================================================================

/// Body of the eSIM swap creation operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EsimsSwapRequest {
    /// Swaps to perform, in order
    pub swaps: Vec<EsimSwap>,
}

/// A single eSIM swap: which eSIM to move, and where to move it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EsimSwap {
    /// EID of the eSIM to swap
    pub eid: String,

    /// Service profile the eSIM moves to
    pub target: EsimSwapTarget,
}

/// Target service profile for an eSIM swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EsimSwapTarget {
    /// Identifier of the service provider account
    #[serde(rename = "accountId")]
    pub account_id: String,

    /// Communication plan the eSIM adopts
    #[serde(rename = "communicationPlan")]
    pub communication_plan: String,

    /// Rate plan the eSIM adopts
    #[serde(rename = "ratePlan")]
    pub rate_plan: String,
}

// ============================================================================
// Request Types: floor-plan auto-locate job
// ============================================================================

/// Body of the auto-locate job recalculation operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecalculateAutoLocateJobRequest {
    /// Devices whose positions seed the recalculation
    pub devices: Vec<AutoLocateDevice>,
}

/// A device position hint for auto-locate recalculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AutoLocateDevice {
    /// Device serial, e.g. "Q234-ABCD-5678"
    pub serial: String,

    /// Position information for the device
    #[serde(rename = "autoLocate")]
    pub auto_locate: AutoLocatePosition,
}

/// Fixed position supplied for a device on the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AutoLocatePosition {
    /// Whether the device is an anchor the job must not move
    #[serde(rename = "isAnchor")]
    pub is_anchor: bool,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,
}

// ============================================================================
// Request Types: VPN firewall rules
// ============================================================================

/// Body of the VPN firewall rules update operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VpnFirewallRulesUpdate {
    /// Ordered rule set. The vendor appends its implicit default-allow rule
    /// after these.
    pub rules: Vec<VpnFirewallRule>,

    /// Whether to log hits on the implicit default rule
    #[serde(
        rename = "syslogDefaultRule",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub syslog_default_rule: Option<bool>,
}

/// A single site-to-site VPN firewall rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VpnFirewallRule {
    /// Human-readable description of the rule
    pub comment: String,

    /// Whether matching traffic is allowed or denied
    pub policy: RulePolicy,

    /// Protocol the rule matches
    pub protocol: RuleProtocol,

    /// Source port or port range; "Any" matches all ports
    #[serde(rename = "srcPort")]
    pub src_port: String,

    /// Source CIDR; "Any" matches all sources
    #[serde(rename = "srcCidr")]
    pub src_cidr: String,

    /// Destination port or port range; "Any" matches all ports
    #[serde(rename = "destPort")]
    pub dest_port: String,

    /// Destination CIDR; "Any" matches all destinations
    #[serde(rename = "destCidr")]
    pub dest_cidr: String,

    /// Whether hits on this rule are sent to syslog
    #[serde(rename = "syslogEnabled")]
    pub syslog_enabled: bool,
}

/// Firewall rule verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RulePolicy {
    Allow,
    Deny,
}

/// Protocols a VPN firewall rule can match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleProtocol {
    Tcp,
    Udp,
    Icmp,
    Icmp6,
    Any,
}

// ============================================================================
// API Trait
// ============================================================================

/// Meraki Dashboard API v1 (Subset)
///
/// **IMPORTANT**: This is a partial definition of the Dashboard API,
/// containing only the operations invoked by this repository's example
/// scripts. This is NOT a complete Dashboard API client.
///
/// The actual implementation of these endpoints is provided by Meraki's
/// cloud, not by us. We define this trait to type the surface we consume and
/// to allow stub implementations for testing.
///
/// Responses are deliberately untyped (`serde_json::Value`): callers print
/// them verbatim and assert no schema.
#[dropshot::api_description]
pub trait DashboardApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// Swap which profile an eSIM uses
    ///
    /// Creates an eSIM swap job moving each listed eSIM to the given target
    /// account, communication plan, and rate plan.
    ///
    /// **Dashboard API Reference**:
    /// POST /organizations/{organizationId}/cellularGateway/esims/swap
    #[endpoint {
        method = POST,
        path = "/api/v1/organizations/{organization_id}/cellularGateway/esims/swap",
        tags = ["cellular-gateway"],
    }]
    async fn create_organization_cellular_gateway_esims_swap(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
        body: TypedBody<EsimsSwapRequest>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError>;

    /// Recalculate a floor-plan auto-locate job
    ///
    /// Re-runs position estimation for a running auto-locate job, seeding it
    /// with the supplied device positions (anchors are held fixed).
    ///
    /// **Dashboard API Reference**:
    /// POST /networks/{networkId}/floorPlans/autoLocate/jobs/{jobId}/recalculate
    #[endpoint {
        method = POST,
        path = "/api/v1/networks/{network_id}/floorPlans/autoLocate/jobs/{job_id}/recalculate",
        tags = ["floor-plans"],
    }]
    async fn recalculate_network_floor_plans_auto_locate_job(
        rqctx: RequestContext<Self::Context>,
        path: Path<AutoLocateJobPath>,
        body: TypedBody<RecalculateAutoLocateJobRequest>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError>;

    /// Replace an organization's site-to-site VPN firewall rules
    ///
    /// The submitted rule list replaces the existing one wholesale; the
    /// vendor appends its implicit default rule after the submitted rules.
    ///
    /// **Dashboard API Reference**:
    /// PUT /organizations/{organizationId}/appliance/vpn/vpnFirewallRules
    #[endpoint {
        method = PUT,
        path = "/api/v1/organizations/{organization_id}/appliance/vpn/vpnFirewallRules",
        tags = ["appliance"],
    }]
    async fn update_organization_appliance_vpn_vpn_firewall_rules(
        rqctx: RequestContext<Self::Context>,
        path: Path<OrganizationPath>,
        body: TypedBody<VpnFirewallRulesUpdate>,
    ) -> Result<HttpResponseOk<serde_json::Value>, HttpError>;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_esim_swap_wire_format() {
        let request = EsimsSwapRequest {
            swaps: vec![EsimSwap {
                eid: "1234567890".to_string(),
                target: EsimSwapTarget {
                    account_id: "456".to_string(),
                    communication_plan: "A comm plan".to_string(),
                    rate_plan: "A rate plan".to_string(),
                },
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "swaps": [{
                    "eid": "1234567890",
                    "target": {
                        "accountId": "456",
                        "communicationPlan": "A comm plan",
                        "ratePlan": "A rate plan"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_auto_locate_wire_format() {
        let request = RecalculateAutoLocateJobRequest {
            devices: vec![AutoLocateDevice {
                serial: "Q234-ABCD-5678".to_string(),
                auto_locate: AutoLocatePosition {
                    is_anchor: true,
                    lat: 37.4180951010362,
                    lng: -122.098531723022,
                },
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "devices": [{
                    "serial": "Q234-ABCD-5678",
                    "autoLocate": {
                        "isAnchor": true,
                        "lat": 37.4180951010362,
                        "lng": -122.098531723022
                    }
                }]
            })
        );
    }

    #[test]
    fn test_firewall_rule_wire_format() {
        let update = VpnFirewallRulesUpdate {
            rules: vec![VpnFirewallRule {
                comment: "Allow TCP traffic to subnet with HTTP servers.".to_string(),
                policy: RulePolicy::Allow,
                protocol: RuleProtocol::Tcp,
                src_port: "Any".to_string(),
                src_cidr: "Any".to_string(),
                dest_port: "443".to_string(),
                dest_cidr: "192.168.1.0/24".to_string(),
                syslog_enabled: false,
            }],
            syslog_default_rule: Some(false),
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({
                "rules": [{
                    "comment": "Allow TCP traffic to subnet with HTTP servers.",
                    "policy": "allow",
                    "protocol": "tcp",
                    "srcPort": "Any",
                    "srcCidr": "Any",
                    "destPort": "443",
                    "destCidr": "192.168.1.0/24",
                    "syslogEnabled": false
                }],
                "syslogDefaultRule": false
            })
        );
    }

    #[test]
    fn test_firewall_update_omits_unset_syslog_default() {
        let update = VpnFirewallRulesUpdate {
            rules: vec![],
            syslog_default_rule: None,
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "rules": [] }));
    }

    #[test]
    fn test_rule_protocol_encodings() {
        for (protocol, wire) in [
            (RuleProtocol::Tcp, "tcp"),
            (RuleProtocol::Udp, "udp"),
            (RuleProtocol::Icmp, "icmp"),
            (RuleProtocol::Icmp6, "icmp6"),
            (RuleProtocol::Any, "any"),
        ] {
            assert_eq!(serde_json::to_value(protocol).unwrap(), json!(wire));
        }
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let org = OrganizationId::new("549236");
        assert_eq!(serde_json::to_value(&org).unwrap(), json!("549236"));
        assert_eq!(org.to_string(), "549236");

        let network = NetworkId::new("L_646829496481105433");
        assert_eq!(
            serde_json::to_value(&network).unwrap(),
            json!("L_646829496481105433")
        );
        assert_eq!(network.as_str(), "L_646829496481105433");
    }

    #[test]
    fn test_request_round_trips() {
        let update = VpnFirewallRulesUpdate {
            rules: vec![VpnFirewallRule {
                comment: "Deny everything else.".to_string(),
                policy: RulePolicy::Deny,
                protocol: RuleProtocol::Any,
                src_port: "Any".to_string(),
                src_cidr: "10.0.0.0/8".to_string(),
                dest_port: "Any".to_string(),
                dest_cidr: "Any".to_string(),
                syslog_enabled: true,
            }],
            syslog_default_rule: None,
        };

        let encoded = serde_json::to_string(&update).unwrap();
        let decoded: VpnFirewallRulesUpdate = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, update);
    }
}
