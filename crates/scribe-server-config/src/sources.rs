// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use scribe_common_config::load_secret_env;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AwsConfigLayer, ElasticsearchConfigLayer, HttpConfigLayer, LoggingConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/scribe/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Server settings use `SCRIBE_SERVER_<FIELD>`; the cluster location and AWS
/// credentials use the names their deployments already export
/// (`ELASTIC_SEARCH_*`, `AWS_*`).
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			elasticsearch: Some(load_elasticsearch_from_env()?),
			aws: Some(load_aws_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("SCRIBE_SERVER_HOST"),
		port: env_u16("SCRIBE_SERVER_PORT")?,
	})
}

fn load_elasticsearch_from_env() -> Result<ElasticsearchConfigLayer, ConfigError> {
	Ok(ElasticsearchConfigLayer {
		host: env_var("ELASTIC_SEARCH_HOST"),
		index: env_var("ELASTIC_SEARCH_INDEX"),
		scheme: env_var("SCRIBE_SERVER_ES_SCHEME"),
		region: env_var("AWS_REGION"),
		timeout_secs: env_u64("SCRIBE_SERVER_ES_TIMEOUT_SECS")?,
	})
}

fn load_aws_from_env() -> Result<AwsConfigLayer, ConfigError> {
	Ok(AwsConfigLayer {
		access_key_id: env_var("AWS_ACCESS_KEY_ID"),
		secret_access_key: load_secret_env("AWS_SECRET_ACCESS_KEY")?,
		session_token: load_secret_env("AWS_SESSION_TOKEN")?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("SCRIBE_SERVER_LOG_LEVEL"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.elasticsearch.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/server.toml").load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn test_toml_source_reads_sections() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			"[elasticsearch]\nhost = \"search.example.com\"\nindex = \"articles\"\nregion = \"eu-west-1\""
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let es = layer.elasticsearch.unwrap();
		assert_eq!(es.index, Some("articles".to_string()));
		assert_eq!(es.region, Some("eu-west-1".to_string()));
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[http]\nport = \"not a number\"").unwrap();

		let result = TomlSource::new(file.path()).load();
		assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
	}

	#[test]
	fn test_empty_env_var_is_unset() {
		std::env::set_var("SCRIBE_TEST_EMPTY_VAR", "");
		assert!(env_var("SCRIBE_TEST_EMPTY_VAR").is_none());
		std::env::remove_var("SCRIBE_TEST_EMPTY_VAR");
	}

	#[test]
	fn test_env_u16_rejects_garbage() {
		std::env::set_var("SCRIBE_TEST_BAD_PORT", "eighty");
		let result = env_u16("SCRIBE_TEST_BAD_PORT");
		std::env::remove_var("SCRIBE_TEST_BAD_PORT");
		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_env_u64_parses() {
		std::env::set_var("SCRIBE_TEST_TIMEOUT", "30");
		let result = env_u64("SCRIBE_TEST_TIMEOUT");
		std::env::remove_var("SCRIBE_TEST_TIMEOUT");
		assert_eq!(result.unwrap(), Some(30));
	}
}
