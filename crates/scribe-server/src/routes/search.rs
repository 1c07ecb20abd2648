// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Article search HTTP handler.

use axum::{
	extract::{Query, State},
	http::{header, StatusCode},
	response::{IntoResponse, Response},
};
use scribe_search_core::SearchParams;

use crate::{api::AppState, error::ServerError};

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Query successful", body = scribe_search_core::FormattedResult),
        (status = 400, description = "Required query parameter missing", body = String, content_type = "text/plain"),
        (status = 406, description = "Invalid value", body = String, content_type = "text/plain"),
        (status = 500, description = "Search response could not be read", body = String, content_type = "text/plain"),
        (status = 502, description = "Bad gateway", body = String, content_type = "text/plain")
    ),
    tag = "search"
)]
/// GET /api/search - Full-text article search.
///
/// The status code of a completed search is the one the cluster returned.
/// A repeated parameter keeps its first value.
pub async fn search(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ServerError> {
	let params = SearchParams::from_pairs(pairs);

	let outcome = state.search.search(&params).await?;
	let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_GATEWAY);

	Ok((
		status,
		[(header::CONTENT_TYPE, "application/json")],
		outcome.body,
	)
		.into_response())
}
