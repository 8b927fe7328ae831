//! Canonical query string and canonical request for presigned GETs.

use crate::constants::*;
use crate::SigningRequest;
use percent_encoding::utf8_percent_encode;
use presign_core::time::{format_date, format_iso8601, DateTime};
use std::fmt;

/// The two renderings of the instant captured for one signing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// `YYYYMMDD`
    pub date: String,
    /// `YYYYMMDDTHHMMSSZ`
    pub amz_date: String,
}

impl From<DateTime> for Timestamp {
    fn from(t: DateTime) -> Self {
        Self {
            date: format_date(t),
            amz_date: format_iso8601(t),
        }
    }
}

/// Credential scope: `{date}/{region}/s3/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope<'a> {
    /// `YYYYMMDD`
    pub date: &'a str,
    /// AWS region code.
    pub region: &'a str,
}

impl<'a> Scope<'a> {
    /// Build the scope for the given date and region.
    pub fn new(date: &'a str, region: &'a str) -> Self {
        Self { date, region }
    }
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, S3_SERVICE, AWS4_REQUEST
        )
    }
}

/// Build the five query parameters in their fixed order.
///
/// The output is hashed as part of the canonical request and then reused
/// verbatim in the final url, so both must see exactly this string.
pub fn canonical_query_string(req: &SigningRequest, ts: &Timestamp) -> String {
    let scope = Scope::new(&ts.date, &req.region);
    let credential = format!("{}/{}", req.access_key_id, scope);

    format!(
        "{X_AMZ_ALGORITHM}={AWS4_HMAC_SHA256}\
         &{X_AMZ_CREDENTIAL}={}\
         &{X_AMZ_DATE}={}\
         &{X_AMZ_EXPIRES}={EXPIRES_IN_SECONDS}\
         &{X_AMZ_SIGNED_HEADERS}={SIGNED_HEADERS}",
        utf8_percent_encode(&credential, &AWS_QUERY_ENCODE_SET),
        ts.amz_date,
    )
}

/// Build the canonical request:
///
/// ```text
/// GET
/// /test.txt
/// X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Credential=...&X-Amz-SignedHeaders=host
/// host:examplebucket.s3.amazonaws.com
///
/// host
/// UNSIGNED-PAYLOAD
/// ```
pub fn canonical_request_string(req: &SigningRequest, query: &str) -> String {
    format!(
        "GET\n{}\n{}\nhost:{}\n\n{}\n{}",
        req.object_key,
        query,
        req.host(),
        SIGNED_HEADERS,
        UNSIGNED_PAYLOAD
    )
}
