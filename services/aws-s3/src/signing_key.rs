use crate::constants::{AWS4_REQUEST, AWS4_SECRET_PREFIX, S3_SERVICE};
use presign_core::hash::{hmac_sha256, SHA256_LEN};
use presign_core::Result;
use std::fmt::{Debug, Formatter};

/// SigV4 signing key scoped to one date, region and the `s3` service.
///
/// Derived fresh on every signing call and dropped with it.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; SHA256_LEN]);

impl SigningKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_LEN] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Derive the signing key for `s3` in `region` on `date` (`YYYYMMDD`).
pub fn derive_signing_key(secret: &str, date: &str, region: &str) -> Result<SigningKey> {
    generate_signing_key(secret, date, region, S3_SERVICE).map(SigningKey)
}

fn generate_signing_key(
    secret: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<[u8; SHA256_LEN]> {
    // Sign secret
    let secret = format!("{AWS4_SECRET_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(&sign_date, region.as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(&sign_region, service.as_bytes())?;
    // Sign request
    hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes())
}
