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

//! Core components for signing API requests with an access key pair.
//!
//! This crate provides the building blocks shared by the aksign signers.
//! It performs no I/O: every type here is an in-memory value.
//!
//! ## Overview
//!
//! - **HttpRequest**: The outbound request value (method, scheme, host, path, query, headers, body)
//! - **Headers**: An insertion ordered header container with case-insensitive lookups
//! - **Context**: A container that holds the environment implementation used to load config
//! - **Error**: The error type shared by all signers
//!
//! ## Example
//!
//! ```
//! use aksign_core::HttpRequest;
//!
//! let req = HttpRequest::new("GET", "https://example.com/v1/items?page=2")
//!     .unwrap()
//!     .with_header("content-type", "application/json");
//!
//! assert_eq!(req.scheme, "https");
//! assert_eq!(req.host, "example.com");
//! assert_eq!(req.path, "/v1/items");
//! assert_eq!(req.query["page"], vec!["2".to_string()]);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and parsing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod header;
pub use header::Headers;
mod request;
pub use request::HttpRequest;
