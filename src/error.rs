use std::fmt;

/// Custom error type for Cloud Foundry operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// API endpoint not found in any source
    EndpointNotFound(String),
    /// Failed to read or parse the CF CLI config file
    Credentials(String),
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CfError::TokenNotFound(msg) => write!(f, "{}", msg),
            CfError::EndpointNotFound(msg) => write!(f, "{}", msg),
            CfError::Credentials(msg) => write!(f, "{}", msg),
            CfError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CfError {
    fn from(err: std::io::Error) -> Self {
        CfError::Credentials(err.to_string())
    }
}

/// Result type alias for Cloud Foundry operations
pub type Result<T> = std::result::Result<T, CfError>;
