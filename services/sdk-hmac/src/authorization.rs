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

use std::fmt::{Display, Formatter};

use aksign_core::Error;
use aksign_core::Result;

use crate::constants::ALGORITHM;

/// Value of the `Authorization` header written by the signer.
///
/// ```text
/// SDK-HMAC-SHA256 Access=<access_key>, SignedHeaders=<a;b;c>, Signature=<hex>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    /// Access key of the credential that signed the request.
    pub access_key: String,
    /// Lower-cased names of the signed headers, sorted.
    pub signed_headers: Vec<String>,
    /// Lower-case hex signature.
    pub signature: String,
}

impl Authorization {
    /// Parse an `Authorization` header value.
    ///
    /// Fails with `RequestInvalid` if the value uses another algorithm or
    /// misses one of `Access`, `SignedHeaders` and `Signature`.
    pub fn parse(value: &str) -> Result<Self> {
        let rest = value
            .trim()
            .strip_prefix(ALGORITHM)
            .filter(|rest| rest.starts_with(' '))
            .ok_or_else(|| {
                Error::request_invalid(format!("authorization is not signed with {ALGORITHM}"))
            })?;

        let mut access_key = None;
        let mut signed_headers = None;
        let mut signature = None;
        for part in rest.split(',') {
            let (k, v) = part.trim().split_once('=').ok_or_else(|| {
                Error::request_invalid(format!("invalid authorization field '{}'", part.trim()))
            })?;
            match k {
                "Access" => access_key = Some(v.to_string()),
                "SignedHeaders" => {
                    signed_headers = Some(
                        v.split(';')
                            .filter(|h| !h.is_empty())
                            .map(|h| h.to_ascii_lowercase())
                            .collect(),
                    )
                }
                "Signature" => signature = Some(v.to_string()),
                // Unknown fields are ignored so the scheme can grow.
                _ => {}
            }
        }

        match (access_key, signed_headers, signature) {
            (Some(access_key), Some(signed_headers), Some(signature)) => Ok(Self {
                access_key,
                signed_headers,
                signature,
            }),
            _ => Err(Error::request_invalid(
                "authorization must contain Access, SignedHeaders and Signature",
            )),
        }
    }
}

impl Display for Authorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ALGORITHM} Access={}, SignedHeaders={}, Signature={}",
            self.access_key,
            self.signed_headers.join(";"),
            self.signature
        )
    }
}
