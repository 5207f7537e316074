//! Errors surfaced by the widget.

use thiserror::Error;

use crate::filename::FILENAME_FORMAT;

/// Client-side checks that stop an action before anything leaves the page.
///
/// The `Display` text is what the user is shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Please select a video to upload")]
    NoFileSelected,

    #[error("File name must match the pattern: {}", FILENAME_FORMAT)]
    BadFileName(String),

    #[error("Please select both start and end dates")]
    MissingDateRange,

    #[error("Could not read date '{0}'")]
    InvalidDate(String),

    #[error("An upload is already in progress")]
    UploadInProgress,
}

/// Failures talking to the video service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be performed or its body could not be read.
    #[error("Network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },

    /// The service answered successfully but with an unexpected body.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The service's own message if it sent one, the transport description
    /// otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo::net::Error> for ApiError {
    fn from(err: gloo::net::Error) -> Self {
        match err {
            gloo::net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}
