// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Elasticsearch HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use scribe_search_core::{SearchTransport, TransportError, TransportResponse};
use tracing::{debug, error, instrument, trace};

use crate::error::EsError;
use crate::signing::{canonical_query_string, AwsCredentials, SigV4Signer};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`EsClient`].
#[derive(Debug, Clone)]
pub struct EsClientConfig {
	/// Host name, optionally with `:port`.
	pub host: String,
	pub scheme: String,
	pub region: String,
	pub timeout: Duration,
	/// Requests are sent unsigned when `None`.
	pub credentials: Option<AwsCredentials>,
}

impl EsClientConfig {
	pub fn new(host: impl Into<String>) -> Self {
		Self {
			host: host.into(),
			scheme: "https".to_string(),
			region: "us-east-1".to_string(),
			timeout: DEFAULT_TIMEOUT,
			credentials: None,
		}
	}
}

/// Client for an Elasticsearch domain.
#[derive(Debug, Clone)]
pub struct EsClient {
	http_client: Client,
	base_url: String,
	host: String,
	signer: Option<SigV4Signer>,
}

impl EsClient {
	pub fn new(config: EsClientConfig) -> Result<Self, EsError> {
		let http_client = scribe_common_http::new_client_with_timeout(config.timeout)?;

		let base_url = format!("{}://{}", config.scheme, config.host.trim_end_matches('/'));
		let host = endpoint_host(&base_url)
			.ok_or_else(|| EsError::InvalidEndpoint(base_url.clone()))?;

		let signer = config
			.credentials
			.map(|credentials| SigV4Signer::for_elasticsearch(credentials, config.region));

		Ok(Self {
			http_client,
			base_url,
			host,
			signer,
		})
	}

	/// Points the client at a different base URL (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		if let Some(host) = endpoint_host(&base_url) {
			self.host = host;
		}
		self.base_url = base_url;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn is_signing(&self) -> bool {
		self.signer.is_some()
	}

	/// Lists the indices on the cluster (`GET /_cat/indices?v=true`).
	///
	/// Returns the plain-text table Elasticsearch produces.
	#[instrument(skip(self))]
	pub async fn list_indices(&self) -> Result<TransportResponse, TransportError> {
		self.get("/_cat/indices", &[("v".to_string(), "true".to_string())])
			.await
	}

	async fn get(
		&self,
		path: &str,
		query: &[(String, String)],
	) -> Result<TransportResponse, TransportError> {
		let query_string = canonical_query_string(query);
		let url = if query_string.is_empty() {
			format!("{}{path}", self.base_url)
		} else {
			format!("{}{path}?{query_string}", self.base_url)
		};

		debug!(path = %path, signed = self.signer.is_some(), "Sending request to Elasticsearch");
		trace!(query = %query_string, "Request query");

		let mut request = self.http_client.get(&url);
		if let Some(signer) = &self.signer {
			for (name, value) in signer.sign("GET", &self.host, path, &query_string, b"", Utc::now())
			{
				request = request.header(name, value);
			}
		}

		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Elasticsearch request timed out");
				return TransportError::Timeout;
			}
			error!(error = %e, "Network error during Elasticsearch request");
			TransportError::Unavailable(e.to_string())
		})?;

		let status = response.status().as_u16();
		debug!(status, "Received response from Elasticsearch");

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read Elasticsearch response body");
			TransportError::BodyRead(e.to_string())
		})?;

		trace!(body = %body, "Response body");

		Ok(TransportResponse { status, body })
	}
}

#[async_trait]
impl SearchTransport for EsClient {
	#[instrument(skip(self, query), fields(path = %path))]
	async fn execute_get(
		&self,
		path: &str,
		query: &[(String, String)],
	) -> Result<TransportResponse, TransportError> {
		self.get(path, query).await
	}
}

/// Value of the `Host` header reqwest will send for `base_url`.
fn endpoint_host(base_url: &str) -> Option<String> {
	let url = Url::parse(base_url).ok()?;
	let host = url.host_str()?;
	Some(match url.port() {
		Some(port) => format!("{host}:{port}"),
		None => host.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::{HeaderMap, StatusCode, Uri};
	use axum::routing::get;
	use axum::Router;
	use scribe_common_config::Secret;

	fn credentials() -> AwsCredentials {
		AwsCredentials {
			access_key_id: "AKIDEXAMPLE".to_string(),
			secret_access_key: Secret::new("secret".to_string()),
			session_token: None,
		}
	}

	async fn echo(uri: Uri, headers: HeaderMap) -> String {
		format!(
			"{}|{}|{}",
			uri.query().unwrap_or(""),
			headers.contains_key("authorization"),
			headers.contains_key("x-amz-date")
		)
	}

	async fn spawn_cluster() -> String {
		let app = Router::new()
			.route("/articles/_search", get(echo))
			.route("/missing/_search", get(|| async { (StatusCode::NOT_FOUND, "{}") }))
			.route("/_cat/indices", get(echo));
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});
		format!("http://{addr}")
	}

	fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
		items
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_client_creation() {
		let client = EsClient::new(EsClientConfig::new("search.example.com")).unwrap();
		assert_eq!(client.base_url(), "https://search.example.com");
		assert_eq!(client.host, "search.example.com");
		assert!(!client.is_signing());
	}

	#[test]
	fn test_scheme_and_port_are_kept() {
		let mut config = EsClientConfig::new("localhost:9200");
		config.scheme = "http".to_string();
		let client = EsClient::new(config).unwrap();
		assert_eq!(client.base_url(), "http://localhost:9200");
		assert_eq!(client.host, "localhost:9200");
	}

	#[test]
	fn test_invalid_host_is_rejected() {
		let result = EsClient::new(EsClientConfig::new(""));
		assert!(matches!(result, Err(EsError::InvalidEndpoint(_))));
	}

	#[test]
	fn test_with_base_url() {
		let client = EsClient::new(EsClientConfig::new("search.example.com"))
			.unwrap()
			.with_base_url("http://127.0.0.1:4000/");
		assert_eq!(client.base_url(), "http://127.0.0.1:4000");
		assert_eq!(client.host, "127.0.0.1:4000");
	}

	#[test]
	fn test_credentials_enable_signing() {
		let mut config = EsClientConfig::new("search.example.com");
		config.credentials = Some(credentials());
		assert!(EsClient::new(config).unwrap().is_signing());
	}

	#[tokio::test]
	async fn test_execute_get_sends_encoded_query() {
		let base = spawn_cluster().await;
		let client = EsClient::new(EsClientConfig::new("unused"))
			.unwrap()
			.with_base_url(base);

		let response = client
			.execute_get(
				"/articles/_search",
				&pairs(&[("q", "txt:(big AND data)"), ("size", "10")]),
			)
			.await
			.unwrap();

		assert_eq!(response.status, 200);
		assert_eq!(response.body, "q=txt%3A%28big%20AND%20data%29&size=10|false|false");
	}

	#[tokio::test]
	async fn test_signed_request_carries_auth_headers() {
		let base = spawn_cluster().await;
		let mut config = EsClientConfig::new("unused");
		config.credentials = Some(credentials());
		let client = EsClient::new(config).unwrap().with_base_url(base);

		let response = client
			.execute_get("/articles/_search", &pairs(&[("size", "10")]))
			.await
			.unwrap();

		assert_eq!(response.body, "size=10|true|true");
	}

	#[tokio::test]
	async fn test_upstream_status_is_returned() {
		let base = spawn_cluster().await;
		let client = EsClient::new(EsClientConfig::new("unused"))
			.unwrap()
			.with_base_url(base);

		let response = client
			.execute_get("/missing/_search", &pairs(&[("size", "10")]))
			.await
			.unwrap();

		assert_eq!(response.status, 404);
		assert_eq!(response.body, "{}");
	}

	#[tokio::test]
	async fn test_list_indices() {
		let base = spawn_cluster().await;
		let client = EsClient::new(EsClientConfig::new("unused"))
			.unwrap()
			.with_base_url(base);

		let response = client.list_indices().await.unwrap();
		assert_eq!(response.status, 200);
		assert_eq!(response.body, "v=true|false|false");
	}

	#[tokio::test]
	async fn test_unreachable_cluster_is_unavailable() {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let client = EsClient::new(EsClientConfig::new("unused"))
			.unwrap()
			.with_base_url(format!("http://{addr}"));

		let result = client.execute_get("/articles/_search", &[]).await;
		assert!(matches!(result, Err(TransportError::Unavailable(_))));
	}
}
