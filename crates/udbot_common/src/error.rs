//! Error types for udbot lookups.

use thiserror::Error;

/// Everything that can go wrong during one lookup invocation.
///
/// None of these are fatal to the hosting process; the handler maps
/// each variant to a single informational reply via `user_message`.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("dictionary service returned status {status}")]
    ServiceUnavailable { status: u16 },

    #[error("no definitions found for '{term}'")]
    EmptyResult { term: String },

    #[error("requested index is out of range")]
    IndexOutOfRange,

    #[error("dictionary service returned a malformed body")]
    MalformedResponse,

    #[error("request failed: {0}")]
    Transport(String),
}

impl LookupError {
    /// The exact line the invoking chat context sees for this error.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::ServiceUnavailable { status } => {
                format!("Response error! (status: {})", status)
            }
            LookupError::EmptyResult { term } => format!("Term {} not found.", term),
            LookupError::IndexOutOfRange => "Not found.".to_string(),
            LookupError::MalformedResponse => "Response error! (invalid response)".to_string(),
            LookupError::Transport(_) => "Response error! (request failed)".to_string(),
        }
    }
}
