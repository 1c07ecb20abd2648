// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Common configuration primitives for scribe.
//!
//! - [`Secret<T>`] re-exported from [`scribe_common_secret`]
//! - [`load_secret_env`] for reading credentials from `VAR` or `VAR_FILE`

pub mod env;

pub use scribe_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_secret_env, SecretEnvError};
