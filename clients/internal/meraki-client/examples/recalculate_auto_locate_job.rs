// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Example: Recalculating a floor-plan auto-locate job
//!
//! This example re-runs position estimation for a running auto-locate job,
//! pinning one device as an anchor, then prints the raw response. Note:
//! requires reachability to the Dashboard API.

use anyhow::Result;
use meraki_api::{AutoLocateDevice, AutoLocatePosition, NetworkId};
use meraki_client::Client;

// Defining an API key in source code is discouraged; this one is the
// vendor's key for a read-only docs-specific environment. Real deployments
// should load the key from the environment.
const API_KEY: &str = "75dd5334bef4d2bc96f26138c163c0a3fa0b5ca6";

#[tokio::main]
async fn main() -> Result<()> {
    let dashboard = Client::new(API_KEY)?;

    let network_id = NetworkId::new("L_646829496481105433");
    let job_id = "";
    let devices = [AutoLocateDevice {
        serial: "Q234-ABCD-5678".to_string(),
        auto_locate: AutoLocatePosition {
            is_anchor: true,
            lat: 37.4180951010362,
            lng: -122.098531723022,
        },
    }];

    let response = dashboard
        .recalculate_network_floor_plans_auto_locate_job(&network_id, job_id, &devices)
        .await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
