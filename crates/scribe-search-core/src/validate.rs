// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search parameter validation and Lucene query translation.
//!
//! Checks run in a fixed order and the first failure wins:
//! `query` present, `date`, `language`, `count`, `offset`. Nothing is sent
//! downstream unless every check passes.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::SearchError;
use crate::languages::LanguageSet;
use crate::types::{Field, SearchParams, TranslatedQuery};

/// Page size used when `count` is absent.
pub const DEFAULT_COUNT: &str = "10";

const TEXT_FIELD: &str = "txt";
const LANGUAGE_FIELD: &str = "lang";
const DATE_FIELD: &str = "date";

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static DATE_SHAPE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Strict `YYYY-MM-DD` check: fixed widths and a real calendar date.
pub fn is_date_valid(date: &str) -> bool {
	DATE_SHAPE_REGEX.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Non-negative integer written as ASCII digits. Leading zeros are allowed.
pub fn is_digits(value: &str) -> bool {
	DIGITS_REGEX.is_match(value)
}

type Check = fn(&QueryValidator, &SearchParams) -> Result<(), SearchError>;

const CHECKS: [Check; 5] = [
	check_query,
	check_date,
	check_language,
	check_count,
	check_offset,
];

/// Validates search parameters against a fixed language set.
#[derive(Debug, Clone, Default)]
pub struct QueryValidator {
	languages: LanguageSet,
}

impl QueryValidator {
	pub fn new(languages: LanguageSet) -> Self {
		Self { languages }
	}

	pub fn languages(&self) -> &LanguageSet {
		&self.languages
	}

	/// Validate `params` and build the engine query.
	pub fn validate(&self, params: &SearchParams) -> Result<TranslatedQuery, SearchError> {
		CHECKS.iter().try_for_each(|check| check(self, params))?;

		let query = params
			.query
			.as_deref()
			.ok_or(SearchError::MissingParameter(Field::Query))?;

		Ok(translate(
			query,
			params.language.as_deref(),
			params.date.as_deref(),
			params.count.as_deref(),
			params.offset.as_deref(),
		))
	}
}

fn check_query(_: &QueryValidator, params: &SearchParams) -> Result<(), SearchError> {
	match params.query {
		Some(_) => Ok(()),
		None => Err(SearchError::MissingParameter(Field::Query)),
	}
}

fn check_date(_: &QueryValidator, params: &SearchParams) -> Result<(), SearchError> {
	match params.date.as_deref() {
		Some(date) if !is_date_valid(date) => Err(SearchError::InvalidValue(Field::Date)),
		_ => Ok(()),
	}
}

fn check_language(validator: &QueryValidator, params: &SearchParams) -> Result<(), SearchError> {
	match params.language.as_deref() {
		Some(lang) if !validator.languages.contains(lang) => {
			Err(SearchError::InvalidValue(Field::Language))
		}
		_ => Ok(()),
	}
}

fn check_count(_: &QueryValidator, params: &SearchParams) -> Result<(), SearchError> {
	match params.count.as_deref() {
		Some(count) if !is_digits(count) => Err(SearchError::InvalidValue(Field::Count)),
		_ => Ok(()),
	}
}

fn check_offset(_: &QueryValidator, params: &SearchParams) -> Result<(), SearchError> {
	match params.offset.as_deref() {
		Some(offset) if !is_digits(offset) => Err(SearchError::InvalidValue(Field::Offset)),
		_ => Ok(()),
	}
}

/// Build the engine query from already-validated values.
///
/// Spaces in `query` become ` AND `, the result is grouped and scoped to the
/// text field, then ANDed with the language and date filters when present.
pub fn translate(
	query: &str,
	language: Option<&str>,
	date: Option<&str>,
	count: Option<&str>,
	offset: Option<&str>,
) -> TranslatedQuery {
	let mut q = format!("{TEXT_FIELD}:({})", query.replace(' ', " AND "));

	if let Some(language) = language {
		q.push_str(&format!(" AND {LANGUAGE_FIELD}:{language}"));
	}
	if let Some(date) = date {
		q.push_str(&format!(" AND {DATE_FIELD}:{date}"));
	}

	TranslatedQuery {
		q,
		size: count.unwrap_or(DEFAULT_COUNT).to_string(),
		from: offset.map(str::to_string),
	}
}
