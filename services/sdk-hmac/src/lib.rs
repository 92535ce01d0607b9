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

//! Signer for the SDK-HMAC-SHA256 access key scheme.
//!
//! The scheme signs a canonical form of the whole request (method, path,
//! query, every header and a hash of the body) with HMAC-SHA256 keyed by the
//! secret key. The server holding the same secret recomputes the signature
//! from the request it received.
//!
//! ## Example
//!
//! ```
//! use aksign_core::HttpRequest;
//! use aksign_sdk_hmac::Signer;
//!
//! # fn main() -> aksign_core::Result<()> {
//! let signer = Signer::new("access_key", "secret_key");
//!
//! let req = HttpRequest::new("GET", "https://example.com/v2/threats?page_size=100")?
//!     .with_header("content-type", "application/json");
//! let signed = signer.sign(&req)?;
//!
//! assert!(signed.headers.get("Authorization").is_some());
//! assert!(signed.headers.get("X-Sdk-Date").is_some());
//! assert!(signer.verify_authorization(&signed)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod authorization;
pub use authorization::Authorization;

pub mod canonical;

mod config;
pub use config::Config;

pub mod constants;

mod credential;
pub use credential::Credential;

mod signer;
pub use signer::Signer;
