// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check HTTP handler.

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
	Unknown,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
	pub status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub latency_ms: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub index: String,
	pub elasticsearch: ComponentHealth,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Cluster reachable, or no cluster attached", body = HealthResponse),
        (status = 503, description = "Cluster unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Reports whether the cluster answers an index listing.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let elasticsearch = match &state.health {
		None => ComponentHealth {
			status: HealthStatus::Unknown,
			latency_ms: None,
			error: None,
		},
		Some(client) => {
			let start = Instant::now();
			let result = client.list_indices().await;
			let latency_ms = Some(start.elapsed().as_millis() as u64);
			match result {
				Ok(response) if (200..300).contains(&response.status) => ComponentHealth {
					status: HealthStatus::Healthy,
					latency_ms,
					error: None,
				},
				Ok(response) => {
					tracing::warn!(status = response.status, "cluster health check rejected");
					ComponentHealth {
						status: HealthStatus::Unhealthy,
						latency_ms,
						error: Some(format!("cluster returned status {}", response.status)),
					}
				}
				Err(e) => {
					tracing::warn!(error = %e, "cluster health check failed");
					ComponentHealth {
						status: HealthStatus::Unhealthy,
						latency_ms,
						error: Some(e.to_string()),
					}
				}
			}
		}
	};

	let status = elasticsearch.status;
	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Unknown => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(
		http_status,
		Json(HealthResponse {
			status,
			index: state.search.index().to_string(),
			elasticsearch,
		}),
	)
}
