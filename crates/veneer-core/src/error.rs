//! Error types for the few component operations that can fail.

use thiserror::Error;

/// Errors raised when properties are addressed by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    /// The component exposes no property with this name.
    #[error("unknown property `{name}`")]
    Unknown {
        /// Requested property name.
        name: String,
    },
    /// The property can be read but not written.
    #[error("property `{name}` is read-only")]
    ReadOnly {
        /// Requested property name.
        name: String,
    },
    /// The supplied value does not have the property's type.
    #[error("property `{name}` expects {expected}, got {actual}")]
    TypeMismatch {
        /// Requested property name.
        name: String,
        /// Type the property accepts.
        expected: &'static str,
        /// Type that was supplied.
        actual: &'static str,
    },
}

/// Convenience alias for name-addressed property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors raised while attaching a component tree to a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    /// No element with the configured id exists in the document.
    #[error("root element `#{id}` not found")]
    RootElementMissing {
        /// Configured root element id.
        id: String,
    },
    /// The host element exists but the rendered root never appeared in it.
    #[error("rendered root missing under `#{id}`")]
    RenderedRootMissing {
        /// Configured root element id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_property() {
        let cases = vec![
            (
                PropertyError::Unknown {
                    name: "width".into(),
                },
                "unknown property `width`",
            ),
            (
                PropertyError::ReadOnly {
                    name: "leftSide".into(),
                },
                "property `leftSide` is read-only",
            ),
            (
                PropertyError::TypeMismatch {
                    name: "title".into(),
                    expected: "text",
                    actual: "bool",
                },
                "property `title` expects text, got bool",
            ),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn mount_errors_reference_root_id() {
        let err = MountError::RootElementMissing { id: "kvapp".into() };
        assert_eq!(err.to_string(), "root element `#kvapp` not found");
    }
}
