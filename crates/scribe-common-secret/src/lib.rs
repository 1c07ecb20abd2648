// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.
//!
//! [`Secret<T>`] holds values such as the AWS secret access key and session
//! token used to sign Elasticsearch requests. The wrapped value:
//!
//! - prints as `[REDACTED]` through `Debug`, `Display` and `Serialize`
//! - is zeroized when dropped
//! - is only reachable through [`Secret::expose`]
//!
//! ```
//! use scribe_common_secret::Secret;
//!
//! let key = Secret::new("wJalrXUtnFEMI".to_string());
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.expose(), "wJalrXUtnFEMI");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Placeholder written wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// A sensitive value that never shows up in logs or config dumps.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Borrow the wrapped value. Every call site is a place where the
	/// credential leaves the wrapper, so keep them few.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self::new(self.inner.clone())
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::{Secret, REDACTED};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	impl<T> Serialize for Secret<T>
	where
		T: Serialize + Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn formatted_output_never_contains_value(inner in "[a-zA-Z0-9/+=]{8,40}") {
			prop_assume!(!REDACTED.contains(inner.as_str()));
			prop_assume!(!"Secret".contains(inner.as_str()));
			let secret = Secret::new(inner.clone());
			let debug = format!("{secret:?}");
			let display = format!("{secret}");
			prop_assert!(!debug.contains(&inner));
			prop_assert!(!display.contains(&inner));
		}

		#[test]
		fn expose_returns_original(inner in ".*") {
			let secret = Secret::new(inner.clone());
			prop_assert_eq!(secret.expose(), &inner);
		}
	}
}
