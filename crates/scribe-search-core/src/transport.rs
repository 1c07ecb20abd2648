// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Seam between the search pipeline and the cluster it talks to.

use async_trait::async_trait;
use thiserror::Error;

/// Status and body of a completed downstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
	/// The request could not be sent or no response arrived.
	#[error("search cluster unavailable: {0}")]
	Unavailable(String),

	#[error("search request timed out")]
	Timeout,

	/// The request could not be signed.
	#[error("failed to sign search request: {0}")]
	Signing(String),

	/// A response arrived but its body could not be read.
	#[error("failed to read search response body: {0}")]
	BodyRead(String),
}

/// Executes a parameterized GET against the configured search host.
///
/// Implementations own the host, credentials, and timeout. There is no
/// retry: a failure is reported once and surfaced to the caller.
#[async_trait]
pub trait SearchTransport: Send + Sync {
	async fn execute_get(
		&self,
		path: &str,
		query: &[(String, String)],
	) -> Result<TransportResponse, TransportError>;
}
