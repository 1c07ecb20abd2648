// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for scribe.
//!
//! Every outbound client is built here so requests carry the same
//! `scribe/{version}` User-Agent.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
