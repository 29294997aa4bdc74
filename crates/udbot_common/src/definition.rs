//! Wire types for the dictionary service.

use serde::{Deserialize, Serialize};

/// One dictionary entry as returned by the service.
///
/// All three fields are required; a JSON object missing any of them
/// fails deserialization and is reported as a malformed response by
/// the client, never as a raw parse fault to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub word: String,
    pub definition: String,
    pub permalink: String,
}

/// Top-level response body of both the define and random endpoints.
///
/// The service returns `{"list": [...]}` ordered by relevance; the
/// order is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineResponse {
    pub list: Vec<Definition>,
}
