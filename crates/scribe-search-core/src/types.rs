// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types for article search.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw search parameters as they arrive on the query string.
///
/// Every field is kept as the caller sent it; [`crate::QueryValidator`]
/// decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SearchParams {
	/// Free-text query; spaces separate terms that must all match
	#[cfg_attr(feature = "openapi", param(required = true))]
	pub query: Option<String>,
	/// ISO 639-1 language code, e.g. `en`
	pub language: Option<String>,
	/// Publication date as `YYYY-MM-DD`
	pub date: Option<String>,
	/// Page size (default: 10)
	pub count: Option<String>,
	/// Index of the first result to return
	pub offset: Option<String>,
}

impl SearchParams {
	/// Collect parameters from decoded query-string pairs.
	///
	/// A repeated parameter keeps its first value; unknown names are ignored.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut params = SearchParams::default();
		for (name, value) in pairs {
			let slot = match name.as_ref() {
				"query" => &mut params.query,
				"language" => &mut params.language,
				"date" => &mut params.date,
				"count" => &mut params.count,
				"offset" => &mut params.offset,
				_ => continue,
			};
			if slot.is_none() {
				*slot = Some(value.into());
			}
		}
		params
	}
}

/// Search parameter names, used to report which value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Query,
	Language,
	Date,
	Count,
	Offset,
}

impl Field {
	pub fn as_str(&self) -> &'static str {
		match self {
			Field::Query => "query",
			Field::Language => "language",
			Field::Date => "date",
			Field::Count => "count",
			Field::Offset => "offset",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A validated request, ready to be sent to the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedQuery {
	/// Lucene query string, e.g. `txt:(rust AND async) AND lang:en`.
	pub q: String,
	/// Page size, forwarded verbatim.
	pub size: String,
	/// Result window start, forwarded verbatim when present.
	pub from: Option<String>,
}

impl TranslatedQuery {
	/// Query-string pairs for the `_search` endpoint. `from` is only
	/// emitted when an offset was supplied.
	pub fn to_query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = vec![
			("q".to_string(), self.q.clone()),
			("size".to_string(), self.size.clone()),
		];
		if let Some(from) = &self.from {
			pairs.push(("from".to_string(), from.clone()));
		}
		pairs
	}
}

/// Public search response.
///
/// All fields are optional so the degenerate "no hits envelope" case
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormattedResult {
	/// Number of articles in this page.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub returned_results: Option<usize>,
	/// Total matches reported by the engine across all pages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_results: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub articles: Option<Vec<Article>>,
}

impl FormattedResult {
	pub fn is_empty(&self) -> bool {
		self.returned_results.is_none() && self.total_results.is_none() && self.articles.is_none()
	}
}

/// A single cleaned search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Article {
	pub title: String,
	pub url: String,
	pub txt: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lang: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
}
