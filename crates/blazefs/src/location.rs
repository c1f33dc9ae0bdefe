//! Bucket location parsing

use crate::error::{AdapterError, Result};
use url::Url;

/// A parsed `b2://bucket` location.
///
/// Only the bucket name is addressable this way; object keys are always
/// passed per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct B2Location {
    /// The bucket name.
    pub bucket: String,
}

impl B2Location {
    /// Parse a location URL like `b2://my-bucket`.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| AdapterError::InvalidLocation(format!("{url}: {e}")))?;

        if parsed.scheme() != "b2" {
            return Err(AdapterError::InvalidLocation(format!(
                "unsupported scheme: {}. Use b2://bucket",
                parsed.scheme()
            )));
        }

        let bucket = parsed
            .host_str()
            .ok_or_else(|| AdapterError::InvalidLocation("missing bucket name".to_string()))?
            .to_string();

        Ok(B2Location { bucket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_locations() {
        let loc = B2Location::parse("b2://my-bucket").unwrap();
        assert_eq!(loc.bucket, "my-bucket");

        let loc = B2Location::parse("b2://backups/").unwrap();
        assert_eq!(loc.bucket, "backups");
    }

    #[test]
    fn rejects_foreign_schemes() {
        assert!(B2Location::parse("s3://bucket").is_err());
        assert!(B2Location::parse("http://bucket").is_err());
        assert!(B2Location::parse("/local/path").is_err());
    }

    #[test]
    fn rejects_missing_bucket() {
        assert!(B2Location::parse("b2://").is_err());
    }
}
