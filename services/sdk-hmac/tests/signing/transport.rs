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
use aksign_core::HttpRequest;
use aksign_sdk_hmac::Signer;
use anyhow::Result;
use bytes::Bytes;
use http::header;
use log::debug;
use pretty_assertions::assert_eq;

/// Simulate the wire: rebuild the request the way a server would receive it.
fn receive(req: http::Request<Bytes>) -> Result<HttpRequest> {
    let (mut parts, body) = req.into_parts();

    // Servers see origin-form targets.
    parts.uri = parts
        .uri
        .path_and_query()
        .map(|v| v.as_str())
        .unwrap_or("/")
        .parse()?;
    // Clients add their own headers after signing.
    parts
        .headers
        .insert(header::USER_AGENT, "aksign-test/0.1".parse()?);
    parts.headers.insert(header::ACCEPT, "*/*".parse()?);

    Ok(HttpRequest::try_from(http::Request::from_parts(parts, body))?)
}

#[test]
fn test_signed_request_survives_transport() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new(
        "post",
        "https://xxx.net/apis/grpc/v2/ListThreatDetail?page_size=100&cur_page=2",
    )?
    .with_header("Content-Type", "application/json")
    .with_body(r#"{"domain":"example.com"}"#);

    let signed = signer.sign(&req)?.into_http()?;
    debug!("signed request: {signed:?}");

    assert_eq!(
        signed.uri().to_string(),
        "https://xxx.net/apis/grpc/v2/ListThreatDetail?cur_page=2&page_size=100"
    );
    assert_eq!(signed.headers()[header::CONTENT_LENGTH], "24");
    assert_eq!(signed.headers()[header::HOST], "xxx.net");
    assert!(signed.headers()[header::AUTHORIZATION].is_sensitive());

    let received = receive(signed)?;
    assert_eq!(received.host, "xxx.net");
    assert!(Signer::new(ACCESS_KEY, SECRET_KEY).verify_authorization(&received)?);
    assert!(!Signer::new(ACCESS_KEY, "wrong-secret").verify_authorization(&received)?);
    Ok(())
}

#[test]
fn test_tampered_path_is_rejected() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new("GET", "https://xxx.net/apis/v2/items")?;

    let mut received = receive(signer.sign(&req)?.into_http()?)?;
    received.path = "/apis/v2/admin".to_string();

    assert!(!signer.verify_authorization(&received)?);
    Ok(())
}

#[test]
fn test_repeated_header_fields_keep_signed_value() -> Result<()> {
    let signer = init_signer();
    let req = HttpRequest::new("GET", "https://xxx.net/apis/v2/items")?
        .with_header("X-Trace", "a,b");

    let mut signed = signer.sign(&req)?.into_http()?;
    // Proxies may split a comma list into repeated fields.
    signed.headers_mut().insert("x-trace", "a".parse()?);
    signed.headers_mut().append("x-trace", "b".parse()?);

    let received = receive(signed)?;
    assert_eq!(received.headers.get("x-trace"), Some("a,b"));
    assert!(signer.verify_authorization(&received)?);

    let mut signed = signer.sign(&req)?.into_http()?;
    signed.headers_mut().append("x-trace", "c".parse()?);

    let received = receive(signed)?;
    assert!(!signer.verify_authorization(&received)?);
    Ok(())
}
