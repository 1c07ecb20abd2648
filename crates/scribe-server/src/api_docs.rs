// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for scribe-server.
//!
//! Interactive documentation is served at `/api/docs` and the raw JSON
//! document at `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scribe Search API",
        version = "1.0.0",
        description = "Full-text search over articles indexed in Elasticsearch.",
        license(name = "Proprietary")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "search", description = "Article search"),
        (name = "health", description = "Cluster reachability")
    ),
    paths(
        crate::routes::search::search,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            scribe_search_core::FormattedResult,
            scribe_search_core::Article,
            crate::routes::health::HealthResponse,
            crate::routes::health::ComponentHealth,
            crate::routes::health::HealthStatus,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_openapi_document_generates_valid_json() {
		let json = serde_json::to_string(&ApiDoc::openapi()).expect("should serialize to JSON");
		assert!(json.contains("\"openapi\""));
		assert!(json.contains("Scribe Search API"));
	}

	#[test]
	fn test_search_operation_documents_every_status() {
		let doc = serde_json::to_value(ApiDoc::openapi()).expect("should serialize");
		let responses = &doc["paths"]["/api/search"]["get"]["responses"];
		for status in ["200", "400", "406", "500", "502"] {
			assert!(responses.get(status).is_some(), "Missing response: {status}");
		}
	}

	#[test]
	fn test_search_parameters_are_documented() {
		let doc = serde_json::to_value(ApiDoc::openapi()).expect("should serialize");
		let params = doc["paths"]["/api/search"]["get"]["parameters"]
			.as_array()
			.expect("parameters array");
		let names: Vec<&str> = params.iter().filter_map(|p| p["name"].as_str()).collect();
		assert_eq!(names, ["query", "language", "date", "count", "offset"]);

		let query = params.iter().find(|p| p["name"] == "query").unwrap();
		assert_eq!(query["required"], true);
		assert_eq!(query["in"], "query");
	}

	#[test]
	fn test_result_schemas_are_registered() {
		let doc = serde_json::to_value(ApiDoc::openapi()).expect("should serialize");
		let schemas = &doc["components"]["schemas"];
		for name in ["FormattedResult", "Article", "HealthResponse"] {
			assert!(schemas.get(name).is_some(), "Missing schema: {name}");
		}
	}
}
