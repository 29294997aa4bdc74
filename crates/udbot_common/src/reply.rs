//! Reply envelope and the sink the handler delivers through.

use serde::{Deserialize, Serialize};

/// One message sent back to the invoking chat context.
///
/// The consumer picks the HTML body when its display mode supports it
/// and falls back to the plaintext body otherwise. Informational and
/// error replies carry no HTML alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
}

impl Reply {
    /// A plaintext-only informational reply.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            html_body: None,
        }
    }

    /// A dual-format reply.
    pub fn notice(body: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            html_body: Some(html_body.into()),
        }
    }
}

/// Capability to send a reply back to the originating context.
///
/// The hosting framework provides the real implementation; tests use
/// a capturing vector.
pub trait ReplySink {
    fn send(&mut self, reply: Reply) -> anyhow::Result<()>;
}
