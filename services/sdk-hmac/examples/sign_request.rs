// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use aksign_core::{Context, HttpRequest, OsEnv};
use aksign_sdk_hmac::{Config, Signer};
use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    // Reads SDK_HMAC_ACCESS_KEY and SDK_HMAC_SECRET_KEY.
    let ctx = Context::new().with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let signer = Signer::from_config(&config)?;

    let req = HttpRequest::new(
        "GET",
        "https://xxx.net/apis/grpc/v2/ListThreatDetail?cur_page=1&page_size=100",
    )?
    .with_header("content-type", "application/json");

    let signed = signer.sign(&req)?;
    for (name, value) in signed.headers.iter() {
        info!("{name}: {value}");
    }

    let req = signed.into_http()?;
    println!("{} {}", req.method(), req.uri());
    Ok(())
}
