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

use aksign_core::time::DateTime;
use aksign_sdk_hmac::Signer;
use chrono::TimeZone;
use chrono::Utc;

mod standard;
mod transport;

/// Test credential pair.
pub const ACCESS_KEY: &str = "Fad3mbhh9NwadtEd7t0ekFp5HwrNJiDc";
pub const SECRET_KEY: &str = "5MLR15LYGn8IeTHQwPs7tZyJslGqNZmYI6g8eHETGrWZYZ6J7U9Ak8CrRlSyCEMT";

pub fn signing_time() -> DateTime {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

pub fn init_signer() -> Signer {
    let _ = env_logger::builder().is_test(true).try_init();

    Signer::new(ACCESS_KEY, SECRET_KEY).with_time(signing_time())
}
