//! Error types for docperm
//!
//! The codec itself never fails; errors come from the server surface:
//! reading configuration, binding the listener and serving.

/// The main error type for docperm operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocpermError(pub String);

impl DocpermError {
    /// Environment variable or flag present but not parseable
    pub fn invalid_var(name: &str, value: &str) -> Self {
        DocpermError(format!("invalid value for {}: {:?}", name, value))
    }

    /// Command-line flag given without its value
    pub fn missing_value(flag: &str) -> Self {
        DocpermError(format!("{} needs a value", flag))
    }

    pub fn unknown_arg(arg: &str) -> Self {
        DocpermError(format!("unknown argument: {}", arg))
    }
}

impl std::fmt::Display for DocpermError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DocpermError {}

// Bind and accept failures
impl From<std::io::Error> for DocpermError {
    fn from(e: std::io::Error) -> Self {
        DocpermError(format!("io: {}", e))
    }
}

/// Result type alias for docperm operations
pub type Result<T> = std::result::Result<T, DocpermError>;
