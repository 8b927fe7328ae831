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

use crate::constants::*;
use crate::Credential;
use log::debug;
use presign_core::utils::Redact;
use presign_core::Env;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Config for presigning s3 urls.
///
/// Fields that are already set are never overwritten by [`Config::from_env`].
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `domain` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ENDPOINT_DOMAIN`]
    /// - default to `amazonaws.com` when the url is built
    pub domain: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("region", &self.region)
            .field("domain", &self.domain)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from the given environment.
    ///
    /// Variables set to an empty string are treated as unset.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        let envs = env.vars();
        let get = |key: &str| envs.get(key).filter(|v| !v.is_empty()).cloned();

        if self.access_key_id.is_none() {
            self.access_key_id = get(AWS_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = get(AWS_SECRET_ACCESS_KEY);
        }
        if self.region.is_none() {
            self.region = get(AWS_REGION).or_else(|| get(AWS_DEFAULT_REGION));
        }
        if self.domain.is_none() {
            self.domain = get(AWS_ENDPOINT_DOMAIN);
        }

        debug!("config loaded from env: {self:?}");
        self
    }

    /// Build a credential if both halves of the key pair are configured.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(ak), Some(sk)) => Some(Credential::new(ak, sk)),
            _ => None,
        }
    }
}
