//! Common error types used throughout mediaext.
//!
//! Most failures here are negative classifications: a reference that cannot
//! be played is not an exceptional condition, and the resolver turns it into
//! "no descriptor" so the caller can render the original content verbatim.
//! Only [`Error::MissingDependency`] is fatal; it signals that the host
//! integration was wired up incorrectly.

/// Common error type for mediaext.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reference is not a parseable URL or resource path.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The URL belongs to no known video host, or its path/id shape is not
    /// one the host resolver understands.
    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),

    /// A local file reference lacks a playable extension.
    #[error("Unresolvable local reference: {0}")]
    UnresolvableLocalReference(String),

    /// A required collaborator was not supplied by the integration.
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// The vault failed while looking up a resource.
    #[error("Vault error: {0}")]
    Vault(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidReference error.
    pub fn invalid_reference<S: Into<String>>(msg: S) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Create a new UnsupportedHost error.
    pub fn unsupported_host<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedHost(msg.into())
    }

    /// Create a new UnresolvableLocalReference error.
    pub fn unresolvable_local<S: Into<String>>(msg: S) -> Self {
        Self::UnresolvableLocalReference(msg.into())
    }

    /// Create a new MissingDependency error.
    pub fn missing_dependency<S: Into<String>>(msg: S) -> Self {
        Self::MissingDependency(msg.into())
    }

    /// Create a new Vault error.
    pub fn vault<S: Into<String>>(msg: S) -> Self {
        Self::Vault(msg.into())
    }

    /// Whether this error must halt the calling path.
    ///
    /// Everything except a missing dependency collapses to "not resolvable".
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingDependency(_))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_reference("not a url");
        assert_eq!(err.to_string(), "Invalid reference: not a url");

        let err = Error::unsupported_host("example.com");
        assert_eq!(err.to_string(), "Unsupported host: example.com");

        let err = Error::unresolvable_local("notes/readme.md");
        assert_eq!(
            err.to_string(),
            "Unresolvable local reference: notes/readme.md"
        );

        let err = Error::missing_dependency("vault");
        assert_eq!(err.to_string(), "Missing dependency: vault");

        let err = Error::vault("permission denied");
        assert_eq!(err.to_string(), "Vault error: permission denied");
    }

    #[test]
    fn test_only_missing_dependency_is_fatal() {
        assert!(Error::missing_dependency("vault").is_fatal());

        assert!(!Error::invalid_reference("x").is_fatal());
        assert!(!Error::unsupported_host("x").is_fatal());
        assert!(!Error::unresolvable_local("x").is_fatal());
        assert!(!Error::vault("x").is_fatal());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(!Error::from(io_err).is_fatal());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_result_type() {
        fn test_fn() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(test_fn().unwrap(), 42);

        fn error_fn() -> Result<i32> {
            Err(Error::missing_dependency("vault"))
        }
        assert!(error_fn().is_err());
    }
}
