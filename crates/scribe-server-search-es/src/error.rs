// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors raised while constructing the Elasticsearch client.
//!
//! Per-request failures use [`scribe_search_core::TransportError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EsError {
	/// The underlying HTTP client could not be built.
	#[error("failed to build HTTP client: {0}")]
	Client(#[from] reqwest::Error),

	/// The configured host or base URL is not usable.
	#[error("invalid Elasticsearch endpoint: {0}")]
	InvalidEndpoint(String),
}
