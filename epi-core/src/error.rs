/// Error types for the dashboard libraries
use thiserror::Error;

/// Main error type for fetch and render operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The request never produced a response (network, CORS, DNS...)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not JSON, or not shaped as expected
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The statistics endpoint reported an application-level error
    #[error("API reported an error: {0}")]
    Api(String),

    /// The chart library rejected an init/draw call
    #[error("Chart rendering failed for {mount}: {reason}")]
    Render { mount: String, reason: String },
}

impl DashboardError {
    pub fn render(mount: &str, reason: impl Into<String>) -> Self {
        DashboardError::Render {
            mount: mount.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => DashboardError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => DashboardError::Transport(e.to_string()),
        }
    }
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
