use crate::constants::DEFAULT_DOMAIN;
use crate::{Config, Credential};
use presign_core::utils::Redact;
use presign_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Everything needed to presign a GET for one object.
///
/// `object_key` must start with `/` and is used verbatim: it is neither
/// decoded nor percent-encoded before it lands in the canonical request and
/// the final url.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// Bucket name, used as the leftmost label of the virtual-hosted host.
    pub bucket: String,
    /// Object key including the leading `/`.
    pub object_key: String,
    /// AWS region code, for example `us-east-1`.
    pub region: String,
    /// Access key id placed in `X-Amz-Credential`.
    pub access_key_id: String,
    /// Secret access key. Never logged.
    pub secret_access_key: String,
    /// Domain after `s3.`, `amazonaws.com` when `None`.
    pub domain: Option<String>,
}

impl SigningRequest {
    /// Create a request against the default `amazonaws.com` domain.
    pub fn new(
        bucket: impl Into<String>,
        object_key: impl Into<String>,
        region: impl Into<String>,
        credential: &Credential,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            object_key: object_key.into(),
            region: region.into(),
            access_key_id: credential.access_key_id.clone(),
            secret_access_key: credential.secret_access_key.clone(),
            domain: None,
        }
    }

    /// Use an S3-compatible domain instead of `amazonaws.com`.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Build a request from a loaded [`Config`].
    pub fn from_config(
        config: &Config,
        bucket: impl Into<String>,
        object_key: impl Into<String>,
    ) -> Result<Self> {
        let region = config
            .region
            .clone()
            .ok_or_else(|| Error::config_invalid("region is not configured"))?;
        let credential = config
            .credential()
            .ok_or_else(|| Error::credential_invalid("access key pair is not configured"))?;

        let mut req = Self::new(bucket, object_key, region, &credential);
        req.domain = config.domain.clone();
        Ok(req)
    }

    /// Host in virtual-hosted style: `{bucket}.s3.{domain}`.
    ///
    /// An empty domain is treated the same as `None`.
    pub fn host(&self) -> String {
        format!(
            "{}.s3.{}",
            self.bucket,
            self.domain
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_DOMAIN)
        )
    }

    /// Reject inputs that would otherwise produce a well-formed but unusable url.
    pub fn validate(&self) -> Result<()> {
        if self.region.is_empty() {
            return Err(Error::config_invalid("region must not be empty"));
        }
        if self.bucket.is_empty() {
            return Err(Error::request_invalid("bucket must not be empty"));
        }
        if !self.object_key.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "object key must start with '/', got '{}'",
                self.object_key
            )));
        }
        Credential::new(&self.access_key_id, &self.secret_access_key).check()
    }
}

impl Debug for SigningRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningRequest")
            .field("bucket", &self.bucket)
            .field("object_key", &self.object_key)
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("domain", &self.domain)
            .finish()
    }
}
