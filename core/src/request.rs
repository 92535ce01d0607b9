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

use std::collections::BTreeMap;
use std::fmt::Write;

use bytes::Bytes;
use http::header::HeaderName;
use http::header::HOST;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::utils::uri_encode;
use crate::Error;
use crate::Headers;
use crate::Result;

/// HttpRequest is the outbound request that will be signed.
///
/// It's a plain value: building, signing and sending it are separate steps
/// owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method, compared case-insensitively.
    pub method: String,
    /// `http` or `https`.
    pub scheme: String,
    /// Host of the url, without port.
    pub host: String,
    /// Port of the url if one was given explicitly.
    ///
    /// Only used to rebuild the wire target, never signed.
    pub port: Option<u16>,
    /// Path of the url, as given (may be percent-encoded).
    pub path: String,
    /// Query parameters, each key with its values in insertion order.
    pub query: BTreeMap<String, Vec<String>>,
    /// Request headers.
    pub headers: Headers,
    /// Raw request body.
    pub body: Bytes,
}

impl HttpRequest {
    /// Create a new request by parsing `url`.
    ///
    /// The scheme defaults to `http` when `url` has none. Fails with
    /// `UnresolvableUrl` if `url` can't be parsed or carries no host.
    pub fn new(method: impl Into<String>, url: &str) -> Result<Self> {
        let url = url.trim();
        let (scheme, rest) = match url.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), url),
        };
        if scheme != "http" && scheme != "https" {
            return Err(Error::unresolvable_url(format!(
                "unsupported scheme '{scheme}' in url '{url}'"
            )));
        }

        let uri: Uri = format!("{scheme}://{rest}").parse().map_err(|e| {
            Error::unresolvable_url(format!("failed to parse url '{url}'")).with_source(e)
        })?;
        let host = match uri.host() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => {
                return Err(Error::unresolvable_url(format!(
                    "url '{url}' has no host"
                )))
            }
        };

        Ok(Self {
            method: method.into(),
            scheme,
            host,
            port: uri.port_u16(),
            path: uri.path().to_string(),
            query: uri.query().map(parse_query).unwrap_or_default(),
            headers: Headers::new(),
            body: Bytes::new(),
        })
    }

    /// Set a header on this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set headers on this request.
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers);
        self
    }

    /// Set the body of this request.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Push a new value for query parameter `key`.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.entry(key.into()).or_default().push(value.into());
    }

    /// Convert query into its sorted, strictly percent-encoded form.
    ///
    /// Keys are sorted byte-wise, values of each key are sorted byte-wise,
    /// and every pair is emitted as `key=value` joined by `&`.
    ///
    /// ```shell
    /// {z: [2], a: [3, 1]} => "a=1&a=3&z=2"
    /// ```
    pub fn query_to_string(&self) -> String {
        let mut s = String::with_capacity(16);

        // BTreeMap keeps keys sorted already.
        for (key, values) in &self.query {
            let key = uri_encode(key.as_bytes());

            let mut values = values.iter().map(String::as_str).collect::<Vec<_>>();
            values.sort_unstable();

            for value in values {
                if !s.is_empty() {
                    s.push('&');
                }
                s.push_str(&key);
                s.push('=');
                s.push_str(&uri_encode(value.as_bytes()));
            }
        }

        s
    }

    /// Path with the encoded query appended, as it goes on the wire.
    pub fn path_and_query(&self) -> String {
        let query = self.query_to_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }

    /// The full url of this request.
    pub fn uri(&self) -> String {
        let mut s = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            // Writing into a String never fails.
            let _ = write!(s, ":{port}");
        }
        s.push_str(&self.path_and_query());
        s
    }

    /// Build an `http::Request` that can be handed to any transport.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let method = Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())?;
        let uri: Uri = self.uri().parse()?;

        let mut req = http::Request::builder().method(method).uri(uri);
        if let Some(headers) = req.headers_mut() {
            for (name, value) in self.headers.iter() {
                let mut value = HeaderValue::from_str(value)?;
                if name.eq_ignore_ascii_case(http::header::AUTHORIZATION.as_str()) {
                    value.set_sensitive(true);
                }
                headers.insert(HeaderName::from_bytes(name.as_bytes())?, value);
            }
        }

        Ok(req.body(self.body)?)
    }
}

impl TryFrom<http::Request<Bytes>> for HttpRequest {
    type Error = Error;

    /// Build a request from a received `http::Request`.
    ///
    /// Origin-form requests take their host from the `Host` header.
    fn try_from(req: http::Request<Bytes>) -> Result<Self> {
        let (parts, body) = req.into_parts();

        // Repeated fields are folded into one comma-joined value.
        let mut headers = Headers::new();
        for name in parts.headers.keys() {
            let values = parts
                .headers
                .get_all(name)
                .iter()
                .map(HeaderValue::to_str)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            headers.insert(name.as_str(), values.join(","));
        }

        let (host, port) = match parts.uri.host() {
            Some(host) => (host.to_string(), parts.uri.port_u16()),
            None => {
                let authority = headers
                    .get(HOST.as_str())
                    .ok_or_else(|| Error::unresolvable_url("request has no host"))?;
                split_authority(authority)?
            }
        };

        Ok(Self {
            method: parts.method.as_str().to_string(),
            scheme: parts.uri.scheme_str().unwrap_or("http").to_string(),
            host,
            port,
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(parse_query).unwrap_or_default(),
            headers,
            body,
        })
    }
}

fn parse_query(query: &str) -> BTreeMap<String, Vec<String>> {
    let mut m: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        m.entry(k.into_owned()).or_default().push(v.into_owned());
    }
    m
}

fn split_authority(authority: &str) -> Result<(String, Option<u16>)> {
    let authority: http::uri::Authority = authority.parse().map_err(|e| {
        Error::unresolvable_url(format!("invalid host '{authority}'")).with_source(e)
    })?;
    Ok((authority.host().to_string(), authority.port_u16()))
}
