use std::fmt;

use thiserror::Error;
use url::Url;

/// The absolute URL shown on the share card and written to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink(Url);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareLinkError {
    #[error("invalid share url: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("share url must use http or https, got {scheme}")]
    UnsupportedScheme { scheme: String },
}

impl ShareLink {
    /// # Errors
    ///
    /// Returns `ShareLinkError::Invalid` for unparseable or relative input
    /// and `ShareLinkError::UnsupportedScheme` for non-http(s) schemes.
    pub fn parse(raw: &str) -> Result<Self, ShareLinkError> {
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(ShareLinkError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_urls() {
        let link = ShareLink::parse("https://example.com/course").unwrap();
        assert_eq!(link.as_str(), "https://example.com/course");
    }

    #[test]
    fn rejects_relative_input() {
        let err = ShareLink::parse("course/page").unwrap_err();
        assert!(matches!(err, ShareLinkError::Invalid(_)));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = ShareLink::parse("ftp://example.com").unwrap_err();
        assert!(matches!(
            err,
            ShareLinkError::UnsupportedScheme { scheme } if scheme == "ftp"
        ));
    }
}
