//! # Bot Facade
//!
//! Ties the Lexicon, Dispatcher and Session Tracker together behind the two
//! operations the transport layer needs: `process_message` and `identity`.

use crate::application::dispatcher::Dispatcher;
use crate::application::session::SessionTracker;
use crate::domain::config::BotConfig;
use crate::domain::types::BotIdentity;
use crate::lexicon::Lexicon;
use anyhow::Result;
use std::sync::Arc;

pub struct Bot {
    identity: BotIdentity,
    dispatcher: Dispatcher,
    sessions: SessionTracker,
}

impl Bot {
    pub fn new(config: &BotConfig) -> Result<Self> {
        let lexicon = Arc::new(Lexicon::new(&config.name)?);
        Ok(Self::from_lexicon(config, lexicon))
    }

    /// Assembly point shared with tests, which pass a seeded lexicon.
    pub fn from_lexicon(config: &BotConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            identity: BotIdentity {
                name: config.name.clone(),
                style_tag: config.style.clone(),
                description: "Bot con personalidad colombiana chévere".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            dispatcher: Dispatcher::new(lexicon),
            sessions: SessionTracker::new(),
        }
    }

    /// Record the sender's session and produce a reply. Total by
    /// construction: every input maps to a non-empty string.
    pub async fn process_message(&self, message: &str, sender: &str) -> String {
        self.sessions.record(sender, message.trim()).await;
        self.dispatcher.handle(message)
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    pub fn sessions(&self) -> &SessionTracker {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bot() -> Bot {
        let config = BotConfig::default();
        let lexicon = Arc::new(
            Lexicon::with_rng(&config.name, StdRng::seed_from_u64(17)).unwrap(),
        );
        Bot::from_lexicon(&config, lexicon)
    }

    #[tokio::test]
    async fn test_process_message_replies_and_tracks() {
        let bot = bot();
        let sender = "whatsapp:+573001234567";

        for i in 1..=3 {
            let reply = bot.process_message(&format!("hola #{i}"), sender).await;
            assert!(!reply.is_empty());
        }

        let record = bot.sessions().get(sender).await.unwrap();
        assert_eq!(record.message_count, 3);
        assert_eq!(record.last_message, "hola #3");
    }

    #[tokio::test]
    async fn test_empty_message_still_tracked() {
        let bot = bot();
        let reply = bot.process_message("   ", "whatsapp:+57300").await;
        assert_eq!(reply, crate::lexicon::catalog::EMPTY_PROMPT);
        assert_eq!(
            bot.sessions().get("whatsapp:+57300").await.unwrap().message_count,
            1
        );
    }

    #[test]
    fn test_identity_is_idempotent() {
        let bot = bot();
        let first = bot.identity().clone();
        let second = bot.identity().clone();
        assert_eq!(first.name, second.name);
        assert_eq!(first.style_tag, second.style_tag);
        assert_eq!(first.version, second.version);
        assert_eq!(first.version, env!("CARGO_PKG_VERSION"));
    }
}
