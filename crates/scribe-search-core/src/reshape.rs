// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversion of the engine's hits envelope into the public result shape.
//!
//! This is a one-way transform. Its output is not a hits envelope and is not
//! meant to be fed back in.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ReshapeError;
use crate::types::{Article, FormattedResult};

#[derive(Debug, Deserialize)]
struct RawSearchResult {
	#[serde(default)]
	hits: Option<RawHits>,
}

#[derive(Debug, Deserialize)]
struct RawHits {
	total: RawTotal,
	hits: Vec<Value>,
}

/// `hits.total` is an object since Elasticsearch 7 and a bare count before.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
	Object { value: u64 },
	Count(u64),
}

impl RawTotal {
	fn value(&self) -> u64 {
		match self {
			RawTotal::Object { value } | RawTotal::Count(value) => *value,
		}
	}
}

/// Reshape a raw response body and serialize the result as compact JSON.
pub fn reshape(raw: &str) -> Result<String, ReshapeError> {
	let result = reshape_value(raw)?;
	serde_json::to_string(&result).map_err(|e| ReshapeError::MalformedResponse(e.to_string()))
}

/// Reshape a raw response body into a [`FormattedResult`].
///
/// A document without `hits` (or with `hits: null`) yields an empty result
/// rather than an error.
pub fn reshape_value(raw: &str) -> Result<FormattedResult, ReshapeError> {
	let parsed: RawSearchResult =
		serde_json::from_str(raw).map_err(|e| ReshapeError::MalformedResponse(e.to_string()))?;

	let Some(hits) = parsed.hits else {
		return Ok(FormattedResult::default());
	};

	let articles = hits
		.hits
		.iter()
		.enumerate()
		.map(|(index, record)| format_record(index, record))
		.collect::<Result<Vec<_>, _>>()?;

	Ok(FormattedResult {
		returned_results: Some(articles.len()),
		total_results: Some(hits.total.value()),
		articles: Some(articles),
	})
}

fn format_record(index: usize, record: &Value) -> Result<Article, ReshapeError> {
	let source = record
		.get("_source")
		.and_then(Value::as_object)
		.ok_or(ReshapeError::MalformedRecord {
			index,
			field: "_source",
		})?;

	Ok(Article {
		title: required_str(source, "title", index)?,
		url: required_str(source, "url", index)?,
		txt: required_str(source, "txt", index)?,
		lang: optional_str(source, "lang", index)?,
		date: optional_str(source, "date", index)?,
	})
}

fn required_str(
	source: &Map<String, Value>,
	field: &'static str,
	index: usize,
) -> Result<String, ReshapeError> {
	optional_str(source, field, index)?.ok_or(ReshapeError::MalformedRecord { index, field })
}

/// Absent and `null` both read as `None`; any other non-string is an error.
fn optional_str(
	source: &Map<String, Value>,
	field: &'static str,
	index: usize,
) -> Result<Option<String>, ReshapeError> {
	match source.get(field) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(_) => Err(ReshapeError::MalformedRecord { index, field }),
	}
}
