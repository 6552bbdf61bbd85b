// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Example: Replacing site-to-site VPN firewall rules
//!
//! This example replaces an organization's VPN firewall rule set with a
//! single rule allowing HTTPS into a server subnet, then prints the raw
//! response. Note: requires reachability to the Dashboard API.

use anyhow::Result;
use meraki_api::{
    OrganizationId, RulePolicy, RuleProtocol, VpnFirewallRule, VpnFirewallRulesUpdate,
};
use meraki_client::Client;

// Defining an API key in source code is discouraged; this one is the
// vendor's key for a read-only docs-specific environment. Real deployments
// should load the key from the environment.
const API_KEY: &str = "6bec40cf957de430a6f1f2baa056b99a4fac9ea0";

#[tokio::main]
async fn main() -> Result<()> {
    let dashboard = Client::new(API_KEY)?;

    let organization_id = OrganizationId::new("549236");
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

    let response = dashboard
        .update_organization_appliance_vpn_vpn_firewall_rules(&organization_id, &update)
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
