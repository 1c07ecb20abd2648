// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Elasticsearch cluster configuration section.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_SCHEME: &str = "https";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElasticsearchConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub index: Option<String>,
	#[serde(default)]
	pub scheme: Option<String>,
	#[serde(default)]
	pub region: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl ElasticsearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.index.is_some() {
			self.index = other.index;
		}
		if other.scheme.is_some() {
			self.scheme = other.scheme;
		}
		if other.region.is_some() {
			self.region = other.region;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	/// Host and index have no defaults.
	pub fn finalize(self) -> Result<ElasticsearchConfig, ConfigError> {
		let host = self.host.ok_or(ConfigError::MissingClusterSetting {
			setting: "host",
			env: "ELASTIC_SEARCH_HOST",
		})?;
		let index = self.index.ok_or(ConfigError::MissingClusterSetting {
			setting: "index",
			env: "ELASTIC_SEARCH_INDEX",
		})?;

		let scheme = self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string());
		if scheme != "http" && scheme != "https" {
			return Err(ConfigError::InvalidValue {
				key: "elasticsearch.scheme".to_string(),
				message: format!("expected 'http' or 'https', got '{scheme}'"),
			});
		}

		let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		if timeout_secs == 0 {
			return Err(ConfigError::InvalidValue {
				key: "elasticsearch.timeout_secs".to_string(),
				message: "must be greater than zero".to_string(),
			});
		}

		Ok(ElasticsearchConfig {
			host,
			index,
			scheme,
			region: self.region.unwrap_or_else(|| DEFAULT_REGION.to_string()),
			timeout: Duration::from_secs(timeout_secs),
		})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElasticsearchConfig {
	pub host: String,
	pub index: String,
	pub scheme: String,
	pub region: String,
	pub timeout: Duration,
}
