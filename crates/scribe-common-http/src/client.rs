// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a client builder with the standard scribe User-Agent.
///
/// # Example
/// ```ignore
/// let client = scribe_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client with a request timeout and the standard User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	builder().timeout(timeout).build()
}

/// Returns the User-Agent string, `scribe/{version}`.
pub fn user_agent() -> String {
	format!("scribe/{}", env!("CARGO_PKG_VERSION"))
}
