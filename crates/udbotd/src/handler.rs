//! The `!ud` lookup handler.
//!
//! One invocation is a single linear pass: parse the raw argument
//! tail, make one HTTP request, pick a definition, bound its text,
//! and send exactly one reply. Every failure becomes an informational
//! reply scoped to the invocation; nothing escapes to the host.

use crate::client::DictClient;
use crate::config::BotConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use udbot_common::{
    normalize_whitespace, parse_args, render_reply, truncate, Definition, LookupError, Reply,
    ReplySink,
};

/// Handler for one registered chat command.
pub struct LookupHandler {
    client: DictClient,
    rng: StdRng,
    max_chars: usize,
}

impl LookupHandler {
    /// Build a handler from configuration, seeding the selection rng
    /// from the OS.
    pub fn new(config: &BotConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Build a handler with an explicit rng, pinning random selection
    /// for tests.
    pub fn with_rng(config: &BotConfig, rng: StdRng) -> Self {
        Self {
            client: DictClient::new(&config.api),
            rng,
            max_chars: config.display.max_definition_chars,
        }
    }

    /// Handle one invocation: `raw` is the argument tail after the
    /// command name, `sink` delivers the reply to the originating
    /// context. Sends exactly one message per invocation.
    pub async fn handle(&mut self, raw: &str, sink: &mut impl ReplySink) -> anyhow::Result<()> {
        let request = parse_args(raw);

        let fetched = match &request.term {
            Some(term) => {
                info!(
                    "Looking up: {}[{}]",
                    term,
                    request.index.unwrap_or_default()
                );
                self.client.define(term).await
            }
            None => {
                debug!("Looking up random term");
                self.client.random().await
            }
        };

        // Service-level failures are terminal for the invocation: one
        // error message, no attempt to read a missing body.
        let list = match fetched {
            Ok(list) => list,
            Err(e) => {
                return sink.send(Reply::text(e.user_message()));
            }
        };

        let selected = self.select(&list, request.index, request.term.as_deref());
        let definition = match selected {
            Ok(definition) => definition,
            Err(e) => {
                return sink.send(Reply::text(e.user_message()));
            }
        };

        let text = truncate(&normalize_whitespace(&definition.definition), self.max_chars);
        sink.send(render_reply(
            &definition.word,
            &text,
            &definition.permalink,
            request.index,
        ))
    }

    /// Pick one definition from the result list.
    ///
    /// An explicit index (always present for term lookups) selects
    /// that 1-based position; index 0 and positions past the end are
    /// out of range and answer "Not found." — a 0 never falls back to
    /// a random pick. Without an index the pick is uniformly random.
    fn select<'a>(
        &mut self,
        list: &'a [Definition],
        index: Option<usize>,
        term: Option<&str>,
    ) -> Result<&'a Definition, LookupError> {
        if list.is_empty() {
            return Err(LookupError::EmptyResult {
                term: term.unwrap_or_default().to_string(),
            });
        }

        match index {
            Some(i) => i
                .checked_sub(1)
                .and_then(|i| list.get(i))
                .ok_or(LookupError::IndexOutOfRange),
            None => {
                let pick = self.rng.gen_range(0..list.len());
                Ok(&list[pick])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> Definition {
        Definition {
            word: word.to_string(),
            definition: format!("meaning of {}", word),
            permalink: format!("http://x/{}", word),
        }
    }

    fn handler() -> LookupHandler {
        LookupHandler::with_rng(&BotConfig::default(), StdRng::seed_from_u64(7))
    }

    #[test]
    fn index_one_selects_first_entry() {
        let list = vec![entry("a"), entry("b")];
        let mut h = handler();
        let picked = h.select(&list, Some(1), Some("a")).unwrap();
        assert_eq!(picked.word, "a");
    }

    #[test]
    fn index_past_end_is_out_of_range() {
        let list = vec![entry("a")];
        let mut h = handler();
        let err = h.select(&list, Some(2), Some("a")).unwrap_err();
        assert!(matches!(err, LookupError::IndexOutOfRange));
    }

    #[test]
    fn index_zero_is_out_of_range() {
        let list = vec![entry("a")];
        let mut h = handler();
        let err = h.select(&list, Some(0), Some("a")).unwrap_err();
        assert!(matches!(err, LookupError::IndexOutOfRange));
    }

    #[test]
    fn empty_list_is_empty_result_regardless_of_index() {
        let mut h = handler();
        for index in [None, Some(1), Some(5)] {
            let err = h.select(&[], index, Some("ghost")).unwrap_err();
            assert!(matches!(err, LookupError::EmptyResult { .. }));
        }
    }

    #[test]
    fn seeded_rng_pins_random_selection() {
        let list = vec![entry("a"), entry("b"), entry("c")];
        let mut first = LookupHandler::with_rng(&BotConfig::default(), StdRng::seed_from_u64(42));
        let mut second = LookupHandler::with_rng(&BotConfig::default(), StdRng::seed_from_u64(42));
        let x = first.select(&list, None, None).unwrap().word.clone();
        let y = second.select(&list, None, None).unwrap().word.clone();
        assert_eq!(x, y);
    }
}
