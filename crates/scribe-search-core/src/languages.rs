// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Two-letter language codes accepted by the `language` parameter.

use std::collections::HashSet;

/// ISO 639-1 codes, lower case.
pub const ISO_639_1: &[&str] = &[
	"aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh",
	"bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da",
	"de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
	"fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
	"ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj",
	"kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
	"lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb",
	"nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi",
	"pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
	"sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti",
	"tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
	"wa", "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Withdrawn codes that older crawlers still emit (`iw` for Hebrew, `in`
/// for Indonesian, `ji` for Yiddish, `mo` for Moldavian).
pub const LEGACY_ISO_639_1: &[&str] = &["in", "iw", "ji", "mo"];

/// Read-only set of accepted language codes, built once at startup.
#[derive(Debug, Clone)]
pub struct LanguageSet {
	codes: HashSet<String>,
}

impl LanguageSet {
	/// Current ISO 639-1 codes plus the withdrawn aliases.
	pub fn iso_639_1() -> Self {
		Self::from_codes(ISO_639_1.iter().chain(LEGACY_ISO_639_1))
	}

	pub fn from_codes<I, S>(codes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			codes: codes.into_iter().map(|c| c.as_ref().to_string()).collect(),
		}
	}

	/// Exact, case-sensitive membership test.
	pub fn contains(&self, code: &str) -> bool {
		self.codes.contains(code)
	}

	pub fn len(&self) -> usize {
		self.codes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}
}

impl Default for LanguageSet {
	fn default() -> Self {
		Self::iso_639_1()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn common_codes_are_present() {
		let set = LanguageSet::iso_639_1();
		for code in ["en", "es", "fr", "de", "zh", "ja", "he", "iw"] {
			assert!(set.contains(code), "missing {code}");
		}
	}

	#[test]
	fn unknown_and_malformed_codes_are_rejected() {
		let set = LanguageSet::iso_639_1();
		assert!(!set.contains("zz"));
		assert!(!set.contains("EN"));
		assert!(!set.contains("eng"));
		assert!(!set.contains(""));
		assert!(!set.contains("espanol"));
	}

	#[test]
	fn all_codes_are_two_lowercase_letters() {
		for code in ISO_639_1.iter().chain(LEGACY_ISO_639_1) {
			assert_eq!(code.len(), 2);
			assert!(code.chars().all(|c| c.is_ascii_lowercase()));
		}
	}

	#[test]
	fn custom_set_restricts_codes() {
		let set = LanguageSet::from_codes(["en", "fr"]);
		assert_eq!(set.len(), 2);
		assert!(set.contains("fr"));
		assert!(!set.contains("de"));
	}
}
