//! Outbound resource link shown in the page footer

use snafu::{ResultExt, ensure};
use url::Url;

use crate::error::{InvalidUrlSnafu, Result, UnsupportedSchemeSnafu};

/// Health information resource linked from the footer
pub const RESOURCE_URL: &str = "https://www.ninds.nih.gov/health-information/disorders";

/// Label shown for [`RESOURCE_URL`]
pub const RESOURCE_LABEL: &str = "National Institute of Neurological Disorders and Stroke";

/// A validated link that can be handed to the platform browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    label: String,
    url: Url,
}

impl ResourceLink {
    /// Parse `url`; only absolute http(s) URLs are accepted
    pub fn parse(label: impl Into<String>, url: &str) -> Result<Self> {
        let parsed = Url::parse(url).context(InvalidUrlSnafu { url })?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            UnsupportedSchemeSnafu { url }
        );
        Ok(Self {
            label: label.into(),
            url: parsed,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Host name, shown next to the label
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_resource_url_parses() {
        let link = ResourceLink::parse(RESOURCE_LABEL, RESOURCE_URL).expect("valid url");
        assert_eq!(link.url().as_str(), RESOURCE_URL);
        assert_eq!(link.host(), Some("www.ninds.nih.gov"));
        assert_eq!(link.label(), RESOURCE_LABEL);
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = ResourceLink::parse("x", "").expect_err("empty url");
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(ResourceLink::parse("x", "health-information/disorders").is_err());
    }

    #[test]
    fn test_non_web_scheme_is_rejected() {
        let err = ResourceLink::parse("x", "file:///etc/passwd").expect_err("file scheme");
        assert!(matches!(err, Error::UnsupportedScheme { .. }));
    }
}
