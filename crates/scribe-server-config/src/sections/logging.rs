// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::Deserialize;

fn default_level() -> String {
	"info".to_string()
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(default_level),
		}
	}
}

/// `level` is an `EnvFilter` directive string.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_level(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layer_finalize_defaults() {
		assert_eq!(LoggingConfigLayer::default().finalize(), LoggingConfig::default());
		assert_eq!(LoggingConfig::default().level, "info");
	}

	#[test]
	fn test_layer_finalize_with_directives() {
		let layer = LoggingConfigLayer {
			level: Some("debug,tower_http=trace".to_string()),
		};
		assert_eq!(layer.finalize().level, "debug,tower_http=trace");
	}

	#[test]
	fn test_deserialize_layer_partial() {
		let layer: LoggingConfigLayer = toml::from_str("level = \"warn\"").unwrap();
		assert_eq!(layer.level, Some("warn".to_string()));
		let empty: LoggingConfigLayer = toml::from_str("").unwrap();
		assert!(empty.level.is_none());
	}
}
