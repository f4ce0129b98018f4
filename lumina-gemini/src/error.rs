//! Error types for Gemini operations

use thiserror::Error;

/// Result type for Gemini operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the Gemini API
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication error
    #[error("Gemini authentication error: {0}")]
    Auth(String),

    /// The model returned no usable payload
    #[error("No response from AI")]
    EmptyResponse,

    /// The model's structured output did not match the expected shape
    #[error("Invalid study plan format received from AI: {0}")]
    InvalidPlan(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}
