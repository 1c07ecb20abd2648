// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP surface for scribe: the article search endpoint and a health check.

pub mod api;
pub mod api_docs;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use scribe_server_config::ServerConfig;
