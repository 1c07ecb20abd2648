// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error taxonomy for the search pipeline.
//!
//! The `Display` text of [`SearchError`] is what callers see, so it never
//! carries upstream details. Those stay in the variant payload for logging.

use http::StatusCode;
use thiserror::Error;

use crate::transport::TransportError;
use crate::types::Field;

/// Failures surfaced to the caller of the search endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
	/// A required parameter was absent.
	#[error("Missing required parameter `{0}`")]
	MissingParameter(Field),

	/// A supplied value failed its format or domain check.
	#[error("Invalid value: {0}")]
	InvalidValue(Field),

	/// The downstream call could not complete.
	#[error("Bad gateway")]
	TransportFailure(String),

	/// The downstream body could not be read, parsed, or lacked expected
	/// structure.
	#[error("Internal server error")]
	MalformedResponse(String),
}

impl SearchError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			SearchError::MissingParameter(_) => StatusCode::BAD_REQUEST,
			SearchError::InvalidValue(_) => StatusCode::NOT_ACCEPTABLE,
			SearchError::TransportFailure(_) => StatusCode::BAD_GATEWAY,
			SearchError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Internal detail for logs; empty for caller errors.
	pub fn detail(&self) -> Option<&str> {
		match self {
			SearchError::TransportFailure(detail) | SearchError::MalformedResponse(detail) => {
				Some(detail)
			}
			_ => None,
		}
	}

	/// True for errors caused by the caller's input.
	pub fn is_client_error(&self) -> bool {
		matches!(
			self,
			SearchError::MissingParameter(_) | SearchError::InvalidValue(_)
		)
	}
}

impl From<TransportError> for SearchError {
	fn from(e: TransportError) -> Self {
		match e {
			TransportError::BodyRead(_) => SearchError::MalformedResponse(e.to_string()),
			TransportError::Unavailable(_) | TransportError::Timeout | TransportError::Signing(_) => {
				SearchError::TransportFailure(e.to_string())
			}
		}
	}
}

impl From<ReshapeError> for SearchError {
	fn from(e: ReshapeError) -> Self {
		SearchError::MalformedResponse(e.to_string())
	}
}

/// Failures while converting the engine's response into a [`crate::FormattedResult`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReshapeError {
	/// The body was not JSON or the hits envelope was incomplete.
	#[error("malformed search response: {0}")]
	MalformedResponse(String),

	/// A hit lacked a required `_source` field or held a non-string value.
	#[error("malformed record at index {index}: field `{field}` is missing or not a string")]
	MalformedRecord { index: usize, field: &'static str },
}
