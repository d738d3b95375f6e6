use thiserror::Error;

/// Failures that abort a signing call. All of them are terminal: nothing is
/// signed partially, the caller corrects the request and retries.
#[derive(Debug, Error)]
pub enum Error {
    /// The request carries no body. SigV4 signs the payload hash, so even an
    /// empty payload must be set explicitly.
    #[error("request has no body to sign")]
    MissingBody,

    /// The request URL has no host to place in the Host header.
    #[error("request url has no host")]
    MissingHost,

    /// The request cannot be put into canonical form.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}
