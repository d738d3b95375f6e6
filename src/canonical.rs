use reqwest::Request;

use crate::constant::{S3_ALGO_VALUE, S3_REQUEST_SUFFIX};
use crate::error::Error;
use crate::hash::hex_sha256;
use crate::timestamp::Timestamp;

/// Canonical form of a request. Computed once per signing call and consumed
/// only as hash input.
#[derive(Debug)]
pub struct CanonicalRequest {
    pub text: String,
    pub signed_headers: String,
    pub body_hash: String,
}

/// Hex SHA256 of the request payload.
///
/// A request without a body cannot be signed; callers that mean "no payload"
/// set an explicit empty body instead.
pub fn payload_hash(req: &Request) -> Result<String, Error> {
    let body = req.body().ok_or(Error::MissingBody)?;
    let bytes = body
        .as_bytes()
        .ok_or_else(|| Error::MalformedRequest("streaming body cannot be signed".into()))?;
    Ok(hex_sha256(bytes))
}

/// Build the canonical request string.
///
/// Layout is fixed by the protocol: method, path, query, canonical headers,
/// a required blank line, signed headers and the payload hash, joined by
/// `\n`. The path is taken verbatim (the caller percent-encodes it) and an
/// empty query still occupies its slot.
pub fn canonical_request(req: &Request) -> Result<CanonicalRequest, Error> {
    let body_hash = payload_hash(req)?;

    let mut names: Vec<String> = req
        .headers()
        .keys()
        .map(|name| name.as_str().to_lowercase())
        .collect();
    names.sort();
    names.dedup();
    let signed_headers = names.join(";");

    let canonical_headers = names
        .iter()
        .map(|name| {
            let value = req
                .headers()
                .get(name.as_str())
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .trim();
            format!("{}:{}", name, value)
        })
        .collect::<Vec<String>>()
        .join("\n");

    let text = [
        req.method().as_str(),
        req.url().path(),
        req.url().query().unwrap_or(""),
        canonical_headers.as_str(),
        "",
        signed_headers.as_str(),
        body_hash.as_str(),
    ]
    .join("\n");

    Ok(CanonicalRequest {
        text,
        signed_headers,
        body_hash,
    })
}

/// Credential scope: `<shortDate>/<region>/<service>/aws4_request`.
#[inline]
pub fn scope(timestamp: &Timestamp, region: &str, service: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        timestamp.short, region, service, S3_REQUEST_SUFFIX
    )
}

/// The exact string the signing key signs.
#[inline]
pub fn string_to_sign(timestamp: &Timestamp, scope: &str, canonical_hash: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        S3_ALGO_VALUE, timestamp.full, scope, canonical_hash
    )
}
