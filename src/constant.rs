pub const S3_DATE_KEY: &str = "x-amz-date";
pub const S3_CONTENT_KEY: &str = "x-amz-content-sha256";
pub const S3_ALGO_VALUE: &str = "AWS4-HMAC-SHA256";
pub const S3_REQUEST_SUFFIX: &str = "aws4_request";
