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

use super::{init_signer, ACCESS_KEY, SECRET_KEY};
use aksign_core::{ErrorKind, HttpRequest};
use aksign_sdk_hmac::canonical::{canonical_request, signed_headers};
use aksign_sdk_hmac::{Authorization, Signer};
use anyhow::Result;
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

fn scenario_request() -> Result<HttpRequest> {
    Ok(
        HttpRequest::new("GET", "https://example.com/a%20b/c?z=2&a=3&a=1")?.with_headers([
            ("content-type", "application/json"),
            ("host", "example.com"),
            ("X-Sdk-Date", "20230101T000000Z"),
        ]),
    )
}

fn signature_of(req: &HttpRequest) -> Result<String> {
    let value = req
        .headers
        .get("Authorization")
        .ok_or_else(|| anyhow::anyhow!("request is not signed"))?;
    Ok(Authorization::parse(value)?.signature)
}

#[test]
fn test_canonical_request_of_scenario() -> Result<()> {
    let req = scenario_request()?;

    let creq = canonical_request(&req, &signed_headers(&req.headers))?;
    assert_eq!(
        creq,
        concat!(
            "GET\n",
            "/a%20b/c/\n",
            "a=1&a=3&z=2\n",
            "content-type:application/json\n",
            "host:example.com\n",
            "x-sdk-date:20230101T000000Z\n",
            "\n",
            "content-type;host;x-sdk-date\n",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        )
    );
    Ok(())
}

#[test]
fn test_sign_scenario() -> Result<()> {
    let signed = Signer::new("ak", "secret").sign(&scenario_request()?)?;

    assert_eq!(
        signed.headers.get("authorization"),
        Some(concat!(
            "SDK-HMAC-SHA256 Access=ak, SignedHeaders=content-type;host;x-sdk-date, ",
            "Signature=017dc3dec334a540bd064935f98304334fea5a20dcc689e4f44e8955f50864e9",
        ))
    );
    assert_eq!(signed.headers.get("content-length"), Some("0"));
    assert_eq!(signed.path_and_query(), "/a%20b/c?a=1&a=3&z=2");
    Ok(())
}

#[test]
fn test_sign_is_deterministic() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new("GET", "https://xxx.net/apis/grpc/v2/ListThreatDetail")?
        .with_header("content-type", "application/json");

    let first = signature_of(&signer.sign(&req)?)?;
    for _ in 0..8 {
        assert_eq!(signature_of(&signer.sign(&req)?)?, first);
    }
    Ok(())
}

#[test]
fn test_signature_ignores_query_insertion_order() -> Result<()> {
    let signer = init_signer();
    let base = HttpRequest::new("GET", "https://example.com/list")?;

    let mut a = base.clone();
    a.query_push("a", "3");
    a.query_push("a", "1");
    a.query_push("z", "2");

    let mut b = base;
    b.query_push("z", "2");
    b.query_push("a", "1");
    b.query_push("a", "3");

    let a = signer.sign(&a)?;
    let b = signer.sign(&b)?;
    assert_eq!(signature_of(&a)?, signature_of(&b)?);
    assert_eq!(a.path_and_query(), "/list?a=1&a=3&z=2");
    assert_eq!(b.path_and_query(), "/list?a=1&a=3&z=2");
    Ok(())
}

#[test]
fn test_round_trip() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new(
        "GET",
        "https://xxx.net/apis/grpc/v2/ListThreatDetail?cur_page=1&page_size=100&threat_level=high&threat_level=critical",
    )?
    .with_header("content-type", "application/json");

    let signed = signer.sign(&req)?;
    let signature = signature_of(&signed)?;

    assert!(Signer::new(ACCESS_KEY, SECRET_KEY).verify(&signed, &signature)?);
    assert!(!Signer::new(ACCESS_KEY, "wrong-secret").verify(&signed, &signature)?);
    Ok(())
}

#[test]
fn test_precomputed_content_hash() -> Result<()> {
    let signer = init_signer();
    let body = br#"{"items":[1,2,3]}"#.to_vec();
    let digest = hex::encode(Sha256::digest(&body));

    // The signer never sees the body, only its committed digest.
    let req = HttpRequest::new("PUT", "https://example.com/upload")?
        .with_header("x-sdk-content-sha256", digest.as_str());
    let signed = signer.sign(&req)?;

    let received = signed.clone().with_body(body);
    let signature = signature_of(&signed)?;
    assert!(signer.verify(&received, &signature)?);

    let forged = received.with_header("x-sdk-content-sha256", "0".repeat(64));
    assert!(!signer.verify(&forged, &signature)?);
    Ok(())
}

#[test]
fn test_verify_requires_timestamp() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new("GET", "https://example.com/")?.with_header("host", "example.com");

    let err = signer
        .verify(&req, "017dc3dec334a540bd064935f98304334fea5a20dcc689e4f44e8955f50864e9")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingTimestamp);
    Ok(())
}
