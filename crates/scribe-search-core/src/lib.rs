// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Article search core for scribe.
//!
//! This crate holds everything between the HTTP boundary and the
//! Elasticsearch cluster that actually has behavior:
//!
//! - [`QueryValidator`] checks the five search parameters and translates them
//!   into a Lucene query string ([`TranslatedQuery`])
//! - [`reshape`] turns the engine's hits envelope into the public
//!   [`FormattedResult`] document
//! - [`SearchService`] composes the two around a [`SearchTransport`]
//!
//! The transport is a trait so the pipeline can be exercised without a
//! network or a cluster.

pub mod error;
pub mod languages;
pub mod reshape;
pub mod service;
pub mod transport;
pub mod types;
pub mod validate;

pub use error::{ReshapeError, SearchError};
pub use languages::LanguageSet;
pub use reshape::{reshape, reshape_value};
pub use service::{search_path, SearchOutcome, SearchService};
pub use transport::{SearchTransport, TransportError, TransportResponse};
pub use types::{Article, Field, FormattedResult, SearchParams, TranslatedQuery};
pub use validate::{is_date_valid, is_digits, translate, QueryValidator, DEFAULT_COUNT};
