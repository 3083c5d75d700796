/// Error kinds surfaced to the user as inline messages
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpenerError {
    #[error("Please enter a pastebin URL")]
    EmptyInput,

    #[error("Failed to fetch: HTTP {0}")]
    HttpStatus(u16),

    #[error("No links found in the pastebin content")]
    NoLinksFound,

    #[error("Failed to fetch the pastebin content. Please check the URL and try again. ({0})")]
    Network(String),

    #[error("Not a valid paste URL: {0}")]
    InvalidPasteUrl(String),

    #[error("Local storage error: {0}")]
    Storage(String),

    #[error("Browser window is not available")]
    NoWindow,

    #[error("The browser blocked opening {0}")]
    PopupBlocked(String),
}
