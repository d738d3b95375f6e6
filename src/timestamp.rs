use chrono::{DateTime, Utc};

/// One UTC instant formatted both ways SigV4 needs it.
///
/// `full` goes into the X-Amz-Date header and the string to sign, `short`
/// into the credential scope and key derivation. Both fields always come from
/// the same captured instant; a timestamp is never reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub full: String,
    pub short: String,
}

impl Timestamp {
    /// Format the given instant, e.g. `20180807T162003Z` / `20180807`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        let full = instant.format("%Y%m%dT%H%M%SZ").to_string();
        let short = full[..8].to_string();
        Self { full, short }
    }

    /// Capture and format the current instant.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> DateTime<Utc> {
        "2018-08-07T16:20:03Z".parse().unwrap()
    }

    #[test]
    fn formats_full_and_short() {
        let ts = Timestamp::at(instant());
        assert_eq!(ts.full, "20180807T162003Z");
        assert_eq!(ts.short, "20180807");
    }

    #[test]
    fn short_is_prefix_of_full() {
        let ts = Timestamp::at(instant());
        assert_eq!(ts.short, &ts.full[..8]);
    }
}
