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

//! Constants of the SDK-HMAC-SHA256 signing scheme.
//!
//! Header names are given in the casing they are sent with; every lookup
//! compares them case-insensitively.

/// Algorithm identifier, first line of the string to sign and prefix of the
/// `Authorization` header.
pub const ALGORITHM: &str = "SDK-HMAC-SHA256";

/// Layout of the `X-Sdk-Date` header: "20230101T000000Z", always UTC.
pub const DATE_FORMAT: &str = aksign_core::time::ISO8601_BASIC;

// Headers used by the signing scheme.

/// Signing time header, "20230101T000000Z".
pub const X_SDK_DATE: &str = "X-Sdk-Date";
/// Optional precomputed hex SHA-256 of the body.
pub const X_SDK_CONTENT_SHA256: &str = "x-sdk-content-sha256";
/// Host header, added from the url when absent.
pub const HOST: &str = "host";
/// Header carrying the signature.
pub const AUTHORIZATION: &str = "Authorization";
/// Body length in bytes, added after signing.
pub const CONTENT_LENGTH: &str = "content-length";

// Env values used to configure the signer.

/// Env value for [`Config::access_key`](crate::Config::access_key).
pub const SDK_HMAC_ACCESS_KEY: &str = "SDK_HMAC_ACCESS_KEY";
/// Env value for [`Config::secret_key`](crate::Config::secret_key).
pub const SDK_HMAC_SECRET_KEY: &str = "SDK_HMAC_SECRET_KEY";
