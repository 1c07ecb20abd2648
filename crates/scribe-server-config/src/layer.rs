// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration, merged across sources.

use serde::Deserialize;

use crate::sections::{
	AwsConfigLayer, ElasticsearchConfigLayer, HttpConfigLayer, LoggingConfigLayer,
};

/// Server configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub elasticsearch: Option<ElasticsearchConfigLayer>,
	#[serde(default)]
	pub aws: Option<AwsConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(
			&mut self.elasticsearch,
			other.elasticsearch,
			ElasticsearchConfigLayer::merge,
		);
		merge_option(&mut self.aws, other.aws, AwsConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer::default());
		assert!(base.http.is_none());
		assert!(base.elasticsearch.is_none());
	}

	#[test]
	fn test_merge_preserves_base_when_other_empty() {
		let mut base = ServerConfigLayer {
			elasticsearch: Some(ElasticsearchConfigLayer {
				index: Some("articles".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer::default());
		assert_eq!(
			base.elasticsearch.unwrap().index,
			Some("articles".to_string())
		);
	}

	#[test]
	fn test_merge_other_overwrites_field_by_field() {
		let mut base = ServerConfigLayer {
			elasticsearch: Some(ElasticsearchConfigLayer {
				host: Some("localhost:9200".to_string()),
				index: Some("articles".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let other = ServerConfigLayer {
			elasticsearch: Some(ElasticsearchConfigLayer {
				host: Some("search.example.com".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		let es = base.elasticsearch.unwrap();
		assert_eq!(es.host, Some("search.example.com".to_string()));
		assert_eq!(es.index, Some("articles".to_string()));
	}

	#[test]
	fn test_merge_adds_missing_sections() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9000),
				..Default::default()
			}),
			..Default::default()
		};
		let other = ServerConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..Default::default()
		};
		base.merge(other);
		assert_eq!(base.http.unwrap().port, Some(9000));
		assert_eq!(base.logging.unwrap().level, Some("debug".to_string()));
	}

	#[test]
	fn test_deserialize_from_toml() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
[http]
port = 3000

[elasticsearch]
host = "search.example.com"
index = "articles"
"#,
		)
		.unwrap();
		assert_eq!(layer.http.unwrap().port, Some(3000));
		assert_eq!(
			layer.elasticsearch.unwrap().host,
			Some("search.example.com".to_string())
		);
		assert!(layer.aws.is_none());
	}
}
