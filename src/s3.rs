use reqwest::{header, Method, Request, Url};

use crate::error::Error;
use crate::signer::{RequestSigner, SigningIdentity};

/// Handle to one bucket on an S3-compatible endpoint.
///
/// Builds signed object requests; executing them stays with the caller.
#[derive(Debug, Clone)]
pub struct S3 {
    bucket: String,
    region: String,
    endpoint: String,
    signer: RequestSigner,
}

impl S3 {
    #[inline]
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        let bucket = bucket.into();
        let region = region.into();
        let endpoint = endpoint.into();
        let signer = RequestSigner::new(SigningIdentity::new(
            access_key,
            secret_key,
            region.clone(),
            "s3",
        ));

        Self {
            bucket,
            region,
            endpoint,
            signer,
        }
    }

    /// Virtual-host style base URL of the bucket.
    #[inline]
    pub fn public_url(&self) -> String {
        format!(
            "https://{bucket}.{region}.{endpoint}",
            bucket = self.bucket,
            region = self.region,
            endpoint = self.endpoint,
        )
    }

    #[inline]
    pub fn head_object(&self, key: &str) -> Result<Request, Error> {
        self.object_request(key, Method::HEAD, Vec::new(), None)
    }

    #[inline]
    pub fn get_object(&self, key: &str) -> Result<Request, Error> {
        self.object_request(key, Method::GET, Vec::new(), None)
    }

    #[inline]
    pub fn delete_object(&self, key: &str) -> Result<Request, Error> {
        self.object_request(key, Method::DELETE, Vec::new(), None)
    }

    #[inline]
    pub fn put_object(
        &self,
        key: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Request, Error> {
        self.object_request(key, Method::PUT, body, Some(content_type))
    }

    // Bodyless verbs sign an explicit empty payload; the signer refuses to
    // guess when a body is absent.
    fn object_request(
        &self,
        key: &str,
        method: Method,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<Request, Error> {
        let url = Url::parse(&format!("{}/{}", self.public_url(), key))
            .map_err(|e| Error::MalformedRequest(e.to_string()))?;

        let mut req = Request::new(method, url);
        *req.body_mut() = Some(body.into());
        if let Some(content_type) = content_type {
            // Set before signing so the signature covers it.
            req.headers_mut().insert(
                header::CONTENT_TYPE,
                content_type
                    .parse()
                    .map_err(|_| Error::MalformedRequest("invalid content type".into()))?,
            );
        }

        self.signer.sign(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{S3_CONTENT_KEY, S3_DATE_KEY};

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn s3() -> S3 {
        S3::new(
            "examplebucket",
            "us-east-1",
            "s3.amazonaws.com",
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        )
    }

    #[test]
    fn public_url_is_virtual_host_style() {
        assert_eq!(
            s3().public_url(),
            "https://examplebucket.us-east-1.s3.amazonaws.com"
        );
    }

    #[test]
    fn head_object_signs_the_empty_payload() {
        let req = s3().head_object("test.txt").unwrap();
        assert_eq!(req.method(), Method::HEAD);
        assert_eq!(req.url().path(), "/test.txt");
        assert_eq!(req.headers().get(S3_CONTENT_KEY).unwrap(), EMPTY_SHA256);
        assert!(req.headers().contains_key(S3_DATE_KEY));

        let auth = req
            .headers()
            .get(header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
        assert!(auth.contains("/us-east-1/s3/aws4_request"));
    }

    #[test]
    fn put_object_covers_content_type() {
        let req = s3()
            .put_object("test.txt", "text/plain", b"Welcome to Amazon S3.".to_vec())
            .unwrap();
        assert_eq!(req.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain");

        let auth = req
            .headers()
            .get(header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(auth.contains(
            "SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date"
        ));
    }

    #[test]
    fn delete_object_is_signed() {
        let req = s3().delete_object("test.txt").unwrap();
        assert_eq!(req.method(), Method::DELETE);
        assert!(req.headers().contains_key(header::AUTHORIZATION));
    }
}
