//! Transform error types.

/// Failure of a link metadata lookup.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The URL could not be parsed.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The URL as written in the document.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A metadata source could not produce a record for the URL.
    #[error("Metadata unavailable for {url}: {message}")]
    Unavailable {
        /// The URL that was looked up.
        url: String,
        /// Source-specific reason.
        message: String,
    },
}

/// Transform error.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Metadata derivation failed for a single directive.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    /// A pass completed, but some directives could not be processed.
    ///
    /// Those directives were left unchanged; every other match in the tree
    /// was still replaced.
    #[error("{transform}: {count} directive(s) failed", count = .failures.len())]
    Partial {
        /// Name of the transform that recorded the failures.
        transform: String,
        /// Per-directive failures in document order.
        failures: Vec<TransformError>,
    },
}

impl TransformError {
    /// Turn the failures collected during one pass into a pass result.
    pub(crate) fn from_failures(
        transform: &str,
        failures: Vec<TransformError>,
    ) -> Result<(), TransformError> {
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Self::Partial {
                transform: transform.to_owned(),
                failures,
            })
        }
    }

    /// Per-directive failures carried by this error.
    ///
    /// Returns the nested failures for [`Partial`](Self::Partial), otherwise
    /// the error itself.
    #[must_use]
    pub fn failures(&self) -> Vec<&TransformError> {
        match self {
            Self::Partial { failures, .. } => failures.iter().collect(),
            Self::Metadata(_) => vec![self],
        }
    }
}

/// Unrecognized callout variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown callout variant: {0:?}")]
pub struct UnknownVariant(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_url() -> TransformError {
        let source = url::Url::parse("not a url").unwrap_err();
        MetadataError::InvalidUrl {
            url: "not a url".to_owned(),
            source,
        }
        .into()
    }

    #[test]
    fn test_from_failures_empty_is_ok() {
        assert!(TransformError::from_failures("embed", Vec::new()).is_ok());
    }

    #[test]
    fn test_from_failures_wraps_partial() {
        let err = TransformError::from_failures("link-preview", vec![invalid_url()]).unwrap_err();

        assert!(matches!(
            &err,
            TransformError::Partial { transform, .. } if transform == "link-preview"
        ));
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.to_string(), "link-preview: 1 directive(s) failed");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = invalid_url();
        assert!(err.to_string().starts_with(r#"Invalid URL "not a url""#));
        assert_eq!(err.failures().len(), 1);
    }
}
