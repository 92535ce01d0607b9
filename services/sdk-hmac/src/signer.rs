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

use std::fmt::{Debug, Formatter};

use aksign_core::time::format_iso8601;
use aksign_core::time::now;
use aksign_core::time::parse_iso8601;
use aksign_core::time::DateTime;
use aksign_core::utils::Redact;
use aksign_core::Error;
use aksign_core::HttpRequest;
use aksign_core::Result;
use log::debug;
use subtle::ConstantTimeEq;

use crate::authorization::Authorization;
use crate::canonical::*;
use crate::constants::*;
use crate::Config;
use crate::Credential;

/// Signer that implements the SDK-HMAC-SHA256 scheme.
///
/// A signer holds one credential and is read-only after construction, so it
/// can be shared across threads and requests freely.
#[derive(Clone)]
pub struct Signer {
    credential: Credential,

    time: Option<DateTime>,
}

impl Signer {
    /// Create a new signer from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(access_key, secret_key))
    }

    /// Create a new signer from a credential.
    pub fn from_credential(credential: Credential) -> Self {
        Self {
            credential,
            time: None,
        }
    }

    /// Create a new signer from config.
    ///
    /// Fails with `ConfigInvalid` if the access key or secret key is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let credential = match (&config.access_key, &config.secret_key) {
            (Some(ak), Some(sk)) => Credential::new(ak, sk),
            _ => {
                return Err(Error::config_invalid(
                    "access_key and secret_key are required",
                ))
            }
        };
        if !credential.is_valid() {
            return Err(Error::config_invalid(
                "access_key and secret_key must not be empty",
            ));
        }

        Ok(Self::from_credential(credential))
    }

    /// Specify the signing time used when a request carries no `X-Sdk-Date`.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Access key of this signer.
    pub fn access_key(&self) -> &str {
        &self.credential.access_key
    }

    /// Sign `req`, returning the signed request.
    ///
    /// The returned request carries `X-Sdk-Date` (added with the current time
    /// if absent), `host` (added if absent), `Authorization` and
    /// `content-length`. Its query stays in `query`; send it with
    /// [`HttpRequest::path_and_query`] or [`HttpRequest::into_http`].
    ///
    /// `req` itself is left untouched, and signing an already signed request
    /// replaces its `Authorization` instead of stacking a second one.
    ///
    /// Fails with `MalformedTimestamp` if `X-Sdk-Date` is present but not in
    /// `YYYYMMDDTHHMMSSZ` form.
    pub fn sign(&self, req: &HttpRequest) -> Result<HttpRequest> {
        let mut req = req.clone();

        let time = match req.headers.get(X_SDK_DATE) {
            Some(v) => parse_iso8601(v)?,
            None => {
                let time = self.time.unwrap_or_else(now);
                req.headers.insert(X_SDK_DATE, format_iso8601(time));
                time
            }
        };

        if !req.headers.contains(HOST) {
            let host = req.host.clone();
            req.headers.insert(HOST, host);
        }

        // Authorization never signs itself.
        req.headers.remove(AUTHORIZATION);

        let signed_headers = signed_headers(&req.headers);
        let signature = self.calculate_signature(&req, &signed_headers, time)?;

        let authorization = Authorization {
            access_key: self.credential.access_key.clone(),
            signed_headers,
            signature,
        };
        req.headers.insert(AUTHORIZATION, authorization.to_string());
        req.headers.insert(CONTENT_LENGTH, req.body.len().to_string());

        Ok(req)
    }

    /// Verify that `signature` was produced for `req` with this signer's secret.
    ///
    /// Headers named by the `SignedHeaders` of the request's `Authorization`
    /// are the ones checked, so headers added after signing don't break
    /// verification. Without such an `Authorization`, every header except
    /// `Authorization` itself is checked.
    ///
    /// Returns `Ok(false)` on mismatch. Fails with `MissingTimestamp` if
    /// `X-Sdk-Date` is absent and `MalformedTimestamp` if it can't be parsed.
    pub fn verify(&self, req: &HttpRequest, signature: &str) -> Result<bool> {
        let time = request_time(req)?;

        let signed_headers = match req.headers.get(AUTHORIZATION).map(Authorization::parse) {
            Some(Ok(auth)) => auth.signed_headers,
            _ => {
                let mut headers = req.headers.clone();
                headers.remove(AUTHORIZATION);
                signed_headers(&headers)
            }
        };

        let expected = self.calculate_signature(req, &signed_headers, time)?;
        let matched: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
        if !matched {
            debug!("signature mismatch for {} {}", req.method, req.path);
        }

        Ok(matched)
    }

    /// Verify the signature carried by the request's own `Authorization` header.
    ///
    /// Returns `Ok(false)` if `Authorization` is absent, unparsable, or was
    /// issued for another access key. Timestamp failures are the same as
    /// [`Signer::verify`].
    pub fn verify_authorization(&self, req: &HttpRequest) -> Result<bool> {
        request_time(req)?;

        let Some(value) = req.headers.get(AUTHORIZATION) else {
            debug!("request has no authorization header");
            return Ok(false);
        };
        let auth = match Authorization::parse(value) {
            Ok(auth) => auth,
            Err(err) => {
                debug!("request has invalid authorization header: {err}");
                return Ok(false);
            }
        };
        if auth.access_key != self.credential.access_key {
            debug!(
                "authorization access key {:?} doesn't match signer",
                Redact::from(&auth.access_key)
            );
            return Ok(false);
        }

        self.verify(req, &auth.signature)
    }

    fn calculate_signature(
        &self,
        req: &HttpRequest,
        signed_headers: &[String],
        time: DateTime,
    ) -> Result<String> {
        let creq = canonical_request(req, signed_headers)?;
        debug!("calculated canonical request: {creq}");

        let string_to_sign = string_to_sign(&creq, time);
        debug!("calculated string to sign: {string_to_sign}");

        Ok(sign_string(&string_to_sign, &self.credential.secret_key))
    }
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("credential", &self.credential)
            .field("time", &self.time)
            .finish()
    }
}

fn request_time(req: &HttpRequest) -> Result<DateTime> {
    let value = req
        .headers
        .get(X_SDK_DATE)
        .ok_or_else(|| Error::missing_timestamp(format!("header {X_SDK_DATE} not found")))?;

    parse_iso8601(value)
}
