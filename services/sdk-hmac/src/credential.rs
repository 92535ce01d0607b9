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

use aksign_core::utils::Redact;

/// Credential that holds the access key and secret key.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key, sent verbatim in the `Authorization` header.
    pub access_key: String,
    /// Secret key, only ever used as HMAC key material.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Check if this credential can be used to sign requests.
    pub fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new(
            "Fad3mbhh9NwadtEd7t0ekFp5HwrNJiDc",
            "5MLR15LYGn8IeTHQwPs7tZyJslGqNZmYI6g8eHETGrWZYZ6J7U9Ak8CrRlSyCEMT",
        );

        let s = format!("{cred:?}");
        assert_eq!(
            s,
            r#"Credential { access_key: Fad***iDc, secret_key: 5ML***EMT }"#
        );
    }

    #[test]
    fn test_credential_is_valid() {
        assert!(Credential::new("ak", "sk").is_valid());
        assert!(!Credential::new("ak", "").is_valid());
        assert!(!Credential::default().is_valid());
    }
}
