// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for scribe-server.

pub mod aws;
pub mod elasticsearch;
pub mod http;
pub mod logging;

pub use aws::{AwsConfig, AwsConfigLayer};
pub use elasticsearch::{ElasticsearchConfig, ElasticsearchConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
