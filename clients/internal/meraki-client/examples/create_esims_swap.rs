// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Example: Swapping eSIMs between service profiles
//!
//! This example creates an eSIM swap moving one eSIM to a different
//! account, communication plan, and rate plan, then prints the raw
//! response. Note: requires reachability to the Dashboard API.

use anyhow::Result;
use meraki_api::{EsimSwap, EsimSwapTarget, OrganizationId};
use meraki_client::Client;

// Defining an API key in source code is discouraged; this one is the
// vendor's key for a read-only docs-specific environment. Real deployments
// should load the key from the environment.
const API_KEY: &str = "75dd5334bef4d2bc96f26138c163c0a3fa0b5ca6";

#[tokio::main]
async fn main() -> Result<()> {
    let dashboard = Client::new(API_KEY)?;

    let organization_id = OrganizationId::new("549236");
    let swaps = [EsimSwap {
        eid: "1234567890".to_string(),
        target: EsimSwapTarget {
            account_id: "456".to_string(),
            communication_plan: "A comm plan".to_string(),
            rate_plan: "A rate plan".to_string(),
        },
    }];

    let response = dashboard
        .create_organization_cellular_gateway_esims_swap(&organization_id, &swaps)
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
