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

//! Canonicalization rules of the SDK-HMAC-SHA256 scheme.
//!
//! Signer and verifier must produce byte-identical output here, so every
//! function is pure and depends on nothing but its input.

use std::borrow::Cow;
use std::fmt::Write;

use aksign_core::hash::hex_hmac_sha256;
use aksign_core::hash::hex_sha256;
use aksign_core::time::format_iso8601;
use aksign_core::time::DateTime;
use aksign_core::utils::uri_encode;
use aksign_core::Headers;
use aksign_core::HttpRequest;
use aksign_core::Result;
use percent_encoding::percent_decode_str;

use crate::constants::*;

/// Canonicalize a url path.
///
/// The path is percent-decoded once, split on `/`, every segment is
/// strictly re-encoded and the result always ends with `/`.
///
/// ```text
/// "/a b/c"   => "/a%20b/c/"
/// "/a%20b/c" => "/a%20b/c/"
/// ```
pub fn canonical_uri(path: &str) -> String {
    let decoded: Cow<[u8]> = percent_decode_str(path).into();

    let mut s = decoded
        .split(|b| *b == b'/')
        .map(uri_encode)
        .collect::<Vec<_>>()
        .join("/");
    if !s.ends_with('/') {
        s.push('/');
    }

    s
}

/// Canonicalize the query of `req`.
///
/// Returns an empty string if there is no query.
pub fn canonical_query_string(req: &HttpRequest) -> String {
    req.query_to_string()
}

/// Lower-cased names of all headers, sorted byte-wise.
pub fn signed_headers(headers: &Headers) -> Vec<String> {
    let mut names = headers
        .iter()
        .map(|(k, _)| k.to_ascii_lowercase())
        .collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();

    names
}

/// Build `name:value\n` lines for every name in `signed_headers`.
///
/// Values are trimmed. A signed header missing from `headers` gets an
/// empty value.
pub fn canonical_headers(headers: &Headers, signed_headers: &[String]) -> String {
    let mut s = String::with_capacity(64);
    for name in signed_headers {
        s.push_str(name);
        s.push(':');
        s.push_str(headers.get(name).unwrap_or_default().trim());
        s.push('\n');
    }

    s
}

/// Payload hash of `req`.
///
/// Uses `x-sdk-content-sha256` when the caller provided it, otherwise the
/// hex SHA-256 of the body.
pub fn content_hash(req: &HttpRequest) -> Cow<'_, str> {
    match req.headers.get(X_SDK_CONTENT_SHA256) {
        Some(v) => Cow::Borrowed(v),
        None => Cow::Owned(hex_sha256(&req.body)),
    }
}

/// Build the canonical request.
///
/// ## Format
///
/// ```text
/// Method + "\n" +
/// CanonicalURI + "\n" +
/// CanonicalQueryString + "\n" +
/// CanonicalHeaders + "\n" +
/// SignedHeaders + "\n" +
/// ContentHash
/// ```
///
/// `CanonicalHeaders` ends with its own newline, so an empty line always
/// follows the last header.
pub fn canonical_request(req: &HttpRequest, signed_headers: &[String]) -> Result<String> {
    // 256 is chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method.to_ascii_uppercase())?;
    writeln!(f, "{}", canonical_uri(&req.path))?;
    writeln!(f, "{}", canonical_query_string(req))?;
    writeln!(f, "{}", canonical_headers(&req.headers, signed_headers))?;
    writeln!(f, "{}", signed_headers.join(";"))?;
    write!(f, "{}", content_hash(req))?;

    Ok(f)
}

/// Build the string to sign.
///
/// ```text
/// SDK-HMAC-SHA256
/// 20230101T000000Z
/// <hex sha256 of canonical request>
/// ```
pub fn string_to_sign(canonical_request: &str, time: DateTime) -> String {
    format!(
        "{ALGORITHM}\n{}\n{}",
        format_iso8601(time),
        hex_sha256(canonical_request.as_bytes())
    )
}

/// Derive the lower-case hex signature of `string_to_sign`.
pub fn sign_string(string_to_sign: &str, secret_key: &str) -> String {
    hex_hmac_sha256(secret_key.as_bytes(), string_to_sign.as_bytes())
}
