// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Elasticsearch transport for scribe.
//!
//! [`EsClient`] issues GET requests against an Elasticsearch (or Amazon
//! OpenSearch Service) domain, signing them with AWS Signature Version 4
//! when credentials are configured, and implements
//! [`scribe_search_core::SearchTransport`].

pub mod client;
pub mod error;
pub mod signing;

pub use client::{EsClient, EsClientConfig, DEFAULT_TIMEOUT};
pub use error::EsError;
pub use signing::{canonical_query_string, AwsCredentials, SigV4Signer};
