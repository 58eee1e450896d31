//! Error types for the portfolio interaction layer

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The diagram request never produced a response
    #[error("Asset request failed for {path}: {reason}")]
    AssetNetwork { path: String, reason: String },

    /// The server answered with a non-ok status
    #[error("Asset {path} returned HTTP {status}")]
    AssetStatus { path: String, status: u16 },

    /// The response body could not be read as text
    #[error("Asset body unreadable for {path}: {reason}")]
    AssetBody { path: String, reason: String },

    /// Site content document failed to parse
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// Two cards in the same collection share an id
    #[error("Duplicate card id: {0}")]
    DuplicateCard(String),

    /// Card id is not present in the registry
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    /// Timeline section outside 1..=3
    #[error("Invalid timeline section: {0}")]
    InvalidSection(String),

    /// A fixed markup element was not found in the document
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// A browser API call failed
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
