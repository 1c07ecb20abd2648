// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! AWS Signature Version 4 for Elasticsearch requests.
//!
//! Only what a bodiless GET needs: canonical request, string to sign, the
//! derived signing key, and the resulting `Authorization` header.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use scribe_common_config::SecretString;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Static AWS credentials.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
	pub access_key_id: String,
	pub secret_access_key: SecretString,
	pub session_token: Option<SecretString>,
}

/// Signs requests for one region and service.
#[derive(Debug, Clone)]
pub struct SigV4Signer {
	credentials: AwsCredentials,
	region: String,
	service: String,
}

impl SigV4Signer {
	pub fn new(
		credentials: AwsCredentials,
		region: impl Into<String>,
		service: impl Into<String>,
	) -> Self {
		Self {
			credentials,
			region: region.into(),
			service: service.into(),
		}
	}

	/// Amazon Elasticsearch / OpenSearch Service signer (`es`).
	pub fn for_elasticsearch(credentials: AwsCredentials, region: impl Into<String>) -> Self {
		Self::new(credentials, region, "es")
	}

	pub fn region(&self) -> &str {
		&self.region
	}

	/// Headers to attach to the request: `authorization`, `x-amz-date`, and
	/// `x-amz-security-token` when a session token is configured.
	///
	/// `canonical_query` must be exactly the query string sent on the wire
	/// (see [`canonical_query_string`]).
	pub fn sign(
		&self,
		method: &str,
		host: &str,
		path: &str,
		canonical_query: &str,
		payload: &[u8],
		now: DateTime<Utc>,
	) -> Vec<(&'static str, String)> {
		let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
		let date_stamp = now.format("%Y%m%d").to_string();
		let token = self.credentials.session_token.as_ref().map(|t| t.expose());

		let mut canonical_headers = format!("host:{host}\nx-amz-date:{amz_date}\n");
		let mut signed_headers = String::from("host;x-amz-date");
		if let Some(token) = token {
			canonical_headers.push_str(&format!("x-amz-security-token:{token}\n"));
			signed_headers.push_str(";x-amz-security-token");
		}

		let canonical_request = format!(
			"{method}\n{}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{}",
			canonical_path(path),
			sha256_hex(payload)
		);

		let scope = format!(
			"{date_stamp}/{}/{}/aws4_request",
			self.region, self.service
		);
		let string_to_sign = format!(
			"{ALGORITHM}\n{amz_date}\n{scope}\n{}",
			sha256_hex(canonical_request.as_bytes())
		);

		let signing_key = self.signing_key(&date_stamp);
		let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

		let authorization = format!(
			"{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
			self.credentials.access_key_id
		);

		let mut headers = vec![("authorization", authorization), ("x-amz-date", amz_date)];
		if let Some(token) = token {
			headers.push(("x-amz-security-token", token.clone()));
		}
		headers
	}

	fn signing_key(&self, date_stamp: &str) -> Vec<u8> {
		let secret = format!("AWS4{}", self.credentials.secret_access_key.expose());
		let k_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
		let k_region = hmac_sha256(&k_date, self.region.as_bytes());
		let k_service = hmac_sha256(&k_region, self.service.as_bytes());
		hmac_sha256(&k_service, b"aws4_request")
	}
}

/// Sorted, RFC 3986 encoded query string.
///
/// The same string is used for the request URL and the canonical request, so
/// what is signed is what is sent.
pub fn canonical_query_string(pairs: &[(String, String)]) -> String {
	let mut encoded: Vec<(String, String)> = pairs
		.iter()
		.map(|(k, v)| (urlencoding::encode(k).into_owned(), urlencoding::encode(v).into_owned()))
		.collect();
	encoded.sort();
	encoded
		.iter()
		.map(|(k, v)| format!("{k}={v}"))
		.collect::<Vec<_>>()
		.join("&")
}

/// Each segment encoded, separators kept.
fn canonical_path(path: &str) -> String {
	if path.is_empty() {
		return "/".to_string();
	}
	path.split('/')
		.map(|segment| urlencoding::encode(segment).into_owned())
		.collect::<Vec<_>>()
		.join("/")
}

fn sha256_hex(data: &[u8]) -> String {
	hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
	let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
	mac.update(data);
	mac.finalize().into_bytes().to_vec()
}
