// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AWS credentials used to sign cluster requests.

use scribe_common_config::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsConfigLayer {
	#[serde(default)]
	pub access_key_id: Option<String>,
	#[serde(default)]
	pub secret_access_key: Option<SecretString>,
	#[serde(default)]
	pub session_token: Option<SecretString>,
}

impl AwsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.access_key_id.is_some() {
			self.access_key_id = other.access_key_id;
		}
		if other.secret_access_key.is_some() {
			self.secret_access_key = other.secret_access_key;
		}
		if other.session_token.is_some() {
			self.session_token = other.session_token;
		}
	}

	pub fn finalize(self) -> AwsConfig {
		AwsConfig {
			access_key_id: self.access_key_id,
			secret_access_key: self.secret_access_key,
			session_token: self.session_token,
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct AwsConfig {
	pub access_key_id: Option<String>,
	pub secret_access_key: Option<SecretString>,
	pub session_token: Option<SecretString>,
}

impl AwsConfig {
	/// Requests are signed only when both halves of the key pair are set.
	pub fn is_configured(&self) -> bool {
		self.access_key_id.is_some() && self.secret_access_key.is_some()
	}
}
