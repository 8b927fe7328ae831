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

use crate::canonical::{canonical_query_string, canonical_request_string, Scope, Timestamp};
use crate::constants::{AWS4_HMAC_SHA256, X_AMZ_SIGNATURE};
use crate::signing_key::derive_signing_key;
use crate::SigningRequest;
use log::debug;
use presign_core::hash::{hex_hmac_sha256, hex_sha256};
use presign_core::time::{now, DateTime};
use presign_core::Result;
use std::fmt::Write;

/// Presign a GET for `req`, valid for 24 hours from now.
///
/// - [Authenticating Requests: Using Query Parameters](https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-query-string-auth.html)
///
/// The clock is read exactly once; see [`signed_s3_url_at`] to supply the
/// instant yourself.
pub fn signed_s3_url(req: &SigningRequest) -> Result<String> {
    signed_s3_url_at(req, now())
}

/// Presign a GET for `req` as of `time`.
///
/// The result is fully determined by `req` and `time`.
pub fn signed_s3_url_at(req: &SigningRequest, time: DateTime) -> Result<String> {
    req.validate()?;

    let ts = Timestamp::from(time);
    let scope = Scope::new(&ts.date, &req.region).to_string();
    debug!("calculated scope: {scope}");

    // canonicalize context
    let query = canonical_query_string(req, &ts);
    let creq = canonical_request_string(req, &query);
    debug!("calculated canonical request: {creq}");

    let string_to_sign = string_to_sign(&ts.amz_date, &scope, &hex_sha256(creq.as_bytes()))?;
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = derive_signing_key(&req.secret_access_key, &ts.date, &req.region)?;
    let signature = hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())?;

    let mut url = String::with_capacity(256);
    write!(
        url,
        "https://{}{}?{}&{}={}",
        req.host(),
        req.object_key,
        query,
        X_AMZ_SIGNATURE,
        signature
    )?;
    Ok(url)
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20130524T000000Z
/// 20130524/us-east-1/s3/aws4_request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(amz_date: &str, scope: &str, hashed_creq: &str) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{AWS4_HMAC_SHA256}")?;
    writeln!(f, "{amz_date}")?;
    writeln!(f, "{scope}")?;
    write!(f, "{hashed_creq}")?;
    Ok(f)
}
