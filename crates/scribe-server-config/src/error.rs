// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised while resolving server configuration.

use std::path::PathBuf;

use scribe_common_config::SecretEnvError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A cluster setting with no default was not supplied by any source.
	#[error(
		"Elasticsearch {setting} is not configured: set {env} or `{setting}` under [elasticsearch]"
	)]
	MissingClusterSetting {
		setting: &'static str,
		env: &'static str,
	},

	/// A setting was supplied but cannot be used, e.g. a non-numeric port.
	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	#[error("Config file {path} is not valid TOML: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Cannot read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// An AWS credential named by a `*_FILE` variable could not be loaded.
	#[error("Failed to load AWS credential: {0}")]
	Credential(#[from] SecretEnvError),
}
