// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::{header, StatusCode},
	response::{IntoResponse, Response},
};
use scribe_search_core::SearchError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error(transparent)]
	Search(#[from] SearchError),
}

impl ServerError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServerError::Search(e) => e.status_code(),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		let ServerError::Search(e) = &self;
		if !e.is_client_error() {
			tracing::error!(status = status.as_u16(), detail = e.detail(), "search failed");
		}

		(status, [(header::CONTENT_TYPE, TEXT_PLAIN)], self.to_string()).into_response()
	}
}
