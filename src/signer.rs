use log::debug;
use reqwest::header;
use reqwest::Request;

use crate::canonical;
use crate::constant::{S3_ALGO_VALUE, S3_CONTENT_KEY, S3_DATE_KEY, S3_REQUEST_SUFFIX};
use crate::error::Error;
use crate::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use crate::timestamp::Timestamp;

/// Derives the scoped signing key and signs a string to sign with it.
pub struct Signer<'s> {
    secret_key: &'s str,
    region: &'s str,
    service: &'s str,
}

impl<'s> Signer<'s> {
    #[inline]
    pub fn new(secret_key: &'s str, region: &'s str, service: &'s str) -> Self {
        Self {
            secret_key,
            region,
            service,
        }
    }

    #[inline]
    pub fn sign(&self, short_date: &str, string_to_sign: &str) -> String {
        let key = self.signing_key(short_date);
        hex_hmac_sha256(&key, string_to_sign.as_bytes())
    }

    // Chained derivation: date, region, service, then the literal
    // "aws4_request". The order is fixed by the protocol and the resulting
    // key never leaves this module.
    fn signing_key(&self, short_date: &str) -> Vec<u8> {
        let date_key = hmac_sha256(
            format!("AWS4{}", self.secret_key).as_bytes(),
            short_date.as_bytes(),
        );
        let region_key = hmac_sha256(&date_key, self.region.as_bytes());
        let service_key = hmac_sha256(&region_key, self.service.as_bytes());
        hmac_sha256(&service_key, S3_REQUEST_SUFFIX.as_bytes())
    }
}

/// Long-lived signing credentials plus the scope they sign for.
///
/// Immutable once built, so one value can serve many concurrent callers.
#[derive(Debug, Clone)]
pub struct SigningIdentity {
    access_key: String,
    secret_key: String,
    region: String,
    service: String,
}

impl SigningIdentity {
    #[inline]
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
            service: service.into(),
        }
    }
}

/// Signs outbound requests with the SigV4 header scheme.
///
/// Each call captures its own timestamp, injects the covered headers, builds
/// the canonical request and attaches the Authorization header. The request
/// is consumed and returned signed; the caller's own copy is never touched.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    identity: SigningIdentity,
}

impl RequestSigner {
    #[inline]
    pub fn new(identity: SigningIdentity) -> Self {
        Self { identity }
    }

    pub fn sign(&self, request: Request) -> Result<Request, Error> {
        self.sign_at(request, Timestamp::now())
    }

    pub(crate) fn sign_at(&self, mut request: Request, ts: Timestamp) -> Result<Request, Error> {
        // Both checks gate the whole call; there is no partial signing.
        let body_hash = canonical::payload_hash(&request)?;
        let host = request
            .url()
            .host_str()
            .ok_or(Error::MissingHost)?
            .to_string();

        // Every header that should be covered by the signature goes in
        // before the canonical request is built. That includes the payload
        // hash header, so SignedHeaders always covers it.
        {
            let headers = request.headers_mut();
            headers.insert(
                header::HOST,
                host.parse()
                    .map_err(|_| Error::MalformedRequest(format!("invalid host: {}", host)))?,
            );
            headers.insert(
                S3_DATE_KEY,
                ts.full.parse().expect("formatted date is a valid header"),
            );
            headers.insert(
                S3_CONTENT_KEY,
                body_hash.parse().expect("hex digest is a valid header"),
            );
        }

        let creq = canonical::canonical_request(&request)?;
        debug!("canonical request:\n{}", creq.text);

        let scope = canonical::scope(&ts, &self.identity.region, &self.identity.service);
        let canonical_hash = hex_sha256(creq.text.as_bytes());
        let string_to_sign = canonical::string_to_sign(&ts, &scope, &canonical_hash);
        debug!("string to sign:\n{}", string_to_sign);

        let signature = Signer::new(
            &self.identity.secret_key,
            &self.identity.region,
            &self.identity.service,
        )
        .sign(&ts.short, &string_to_sign);

        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            S3_ALGO_VALUE, self.identity.access_key, scope, creq.signed_headers, signature
        );
        request.headers_mut().insert(
            header::AUTHORIZATION,
            authorization
                .parse()
                .map_err(|_| Error::MalformedRequest("invalid access key".into()))?,
        );

        Ok(request)
    }
}
