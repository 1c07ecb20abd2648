// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router and shared application state.

use std::sync::Arc;

use axum::{routing::get, Router};
use scribe_search_core::{LanguageSet, QueryValidator, SearchService};
use scribe_server_config::{AwsConfig, ServerConfig};
use scribe_server_search_es::{AwsCredentials, EsClient, EsClientConfig, EsError};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api_docs::ApiDoc, routes};

#[derive(Clone)]
pub struct AppState {
	pub search: Arc<SearchService>,
	/// Cluster checked by `/health`; `None` reports the cluster as unknown.
	pub health: Option<Arc<EsClient>>,
}

/// Builds the Elasticsearch client and search pipeline from configuration.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, EsError> {
	let es = &config.elasticsearch;
	let client = Arc::new(EsClient::new(EsClientConfig {
		host: es.host.clone(),
		scheme: es.scheme.clone(),
		region: es.region.clone(),
		timeout: es.timeout,
		credentials: aws_credentials(&config.aws),
	})?);

	if !client.is_signing() {
		tracing::warn!("AWS credentials not configured, requests to Elasticsearch will be unsigned");
	}

	let validator = QueryValidator::new(LanguageSet::iso_639_1());
	let search = SearchService::new(validator, client.clone(), es.index.clone());

	Ok(AppState {
		search: Arc::new(search),
		health: Some(client),
	})
}

fn aws_credentials(aws: &AwsConfig) -> Option<AwsCredentials> {
	match (&aws.access_key_id, &aws.secret_access_key) {
		(Some(access_key_id), Some(secret_access_key)) => Some(AwsCredentials {
			access_key_id: access_key_id.clone(),
			secret_access_key: secret_access_key.clone(),
			session_token: aws.session_token.clone(),
		}),
		_ => None,
	}
}

/// Every response, errors included, carries `Access-Control-Allow-Origin: *`.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/api/search", get(routes::search::search))
		.route("/health", get(routes::health::health_check))
		.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
		.with_state(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		)
}
