// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Composition of validation, the downstream call, and reshaping.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use crate::error::SearchError;
use crate::reshape::reshape;
use crate::transport::SearchTransport;
use crate::types::SearchParams;
use crate::validate::QueryValidator;

/// Serialized response for a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// Status reported by the engine; passed through to the caller.
	pub status: u16,
	/// Serialized [`crate::FormattedResult`].
	pub body: String,
}

/// Path of the search endpoint for `index`.
pub fn search_path(index: &str) -> String {
	format!("/{index}/_search")
}

/// Stateless search pipeline. Safe to share across concurrent requests.
pub struct SearchService {
	validator: QueryValidator,
	transport: Arc<dyn SearchTransport>,
	index: String,
}

impl SearchService {
	pub fn new(
		validator: QueryValidator,
		transport: Arc<dyn SearchTransport>,
		index: impl Into<String>,
	) -> Self {
		Self {
			validator,
			transport,
			index: index.into(),
		}
	}

	pub fn index(&self) -> &str {
		&self.index
	}

	/// Validate `params`, query the engine, and reshape its response.
	///
	/// Validation failures return before any downstream call is made.
	#[instrument(skip(self, params), fields(index = %self.index))]
	pub async fn search(&self, params: &SearchParams) -> Result<SearchOutcome, SearchError> {
		let translated = self.validator.validate(params).inspect_err(|e| {
			warn!(error = %e, "rejected search request");
		})?;

		let path = search_path(&self.index);
		debug!(
			path = %path,
			q = %translated.q,
			size = %translated.size,
			from = ?translated.from,
			"forwarding search to cluster"
		);

		let response = self
			.transport
			.execute_get(&path, &translated.to_query_pairs())
			.await
			.map_err(|e| {
				error!(error = %e, "search transport failed");
				SearchError::from(e)
			})?;

		debug!(status = response.status, "received search response");

		let body = reshape(&response.body).map_err(|e| {
			error!(error = %e, status = response.status, "failed to reshape search response");
			SearchError::from(e)
		})?;

		Ok(SearchOutcome {
			status: response.status,
			body,
		})
	}
}
