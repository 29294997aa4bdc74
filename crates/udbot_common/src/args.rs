//! Parser for the raw command tail (`!ud <term> [index]`).

use serde::{Deserialize, Serialize};

/// A parsed lookup request.
///
/// `index` is the user-facing 1-based position into the result list.
/// Both fields absent means "give me something random".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub term: Option<String>,
    pub index: Option<usize>,
}

impl LookupRequest {
    /// A request with no term and no index (the random path).
    pub fn random() -> Self {
        Self {
            term: None,
            index: None,
        }
    }
}

/// Parse the raw argument string into a `LookupRequest`.
///
/// The input is trimmed and lowercased. An empty input selects the
/// random path. Otherwise the input splits on whitespace; a trailing
/// all-digit token becomes the 1-based index and is dropped from the
/// term, and the index defaults to 1 when no such token exists. A
/// bare-number input yields an empty term with that index.
pub fn parse_args(raw: &str) -> LookupRequest {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return LookupRequest::random();
    }

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let index = match tokens.last().copied() {
        // Oversized numbers that do not fit a usize stay part of the term.
        Some(last) if last.bytes().all(|b| b.is_ascii_digit()) => match last.parse::<usize>() {
            Ok(n) => {
                tokens.pop();
                n
            }
            Err(_) => 1,
        },
        _ => 1,
    };

    LookupRequest {
        term: Some(tokens.join(" ")),
        index: Some(index),
    }
}
