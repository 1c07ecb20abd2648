// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading credentials from the environment.
//!
//! AWS credentials are usually injected either directly (`AWS_SECRET_ACCESS_KEY`)
//! or as a mounted file whose path is given in `AWS_SECRET_ACCESS_KEY_FILE`
//! (Docker and Kubernetes secrets). Both forms are supported here.

use std::path::PathBuf;
use std::{env, fs};

use scribe_common_secret::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret from `{var}_FILE` (preferred) or `{var}`.
///
/// A single trailing newline is stripped from file contents. Empty direct
/// values are treated as unset.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(value)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn unset_returns_none() {
		let var = "SCRIBE_TEST_SECRET_UNSET";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
		assert!(load_secret_env(var).unwrap().is_none());
	}

	#[test]
	fn empty_direct_value_returns_none() {
		let var = "SCRIBE_TEST_SECRET_EMPTY";
		env::set_var(var, "");
		env::remove_var(format!("{var}_FILE"));
		assert!(load_secret_env(var).unwrap().is_none());
		env::remove_var(var);
	}

	#[test]
	fn reads_direct_value() {
		let var = "SCRIBE_TEST_SECRET_DIRECT";
		env::set_var(var, "direct-value");
		env::remove_var(format!("{var}_FILE"));
		assert_eq!(load_secret_env(var).unwrap().unwrap().expose(), "direct-value");
		env::remove_var(var);
	}

	#[test]
	fn file_takes_precedence_and_strips_newline() {
		let var = "SCRIBE_TEST_SECRET_FILE";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "from-file").unwrap();

		env::set_var(var, "from-env");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		assert_eq!(load_secret_env(var).unwrap().unwrap().expose(), "from-file");

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let var = "SCRIBE_TEST_SECRET_EMPTY_PATH";
		env::set_var(format!("{var}_FILE"), "");
		let err = load_secret_env(var).unwrap_err();
		assert!(matches!(err, SecretEnvError::EmptyPath { .. }));
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_an_error() {
		let var = "SCRIBE_TEST_SECRET_MISSING_FILE";
		env::set_var(format!("{var}_FILE"), "/nonexistent/scribe/secret");
		let err = load_secret_env(var).unwrap_err();
		assert!(matches!(err, SecretEnvError::Io { .. }));
		env::remove_var(format!("{var}_FILE"));
	}
}
