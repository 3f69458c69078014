//! Slang lookup strategy.
//!
//! Explains Colombian slang words found in the message. Tokens are stripped
//! of surrounding punctuation before the dictionary lookup; at most the
//! first two hits are explained per message.

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const SLANG_TRIGGERS: &[&str] = &["qué significa", "qué quiere decir", "slang", "jerga"];

/// Mentioning the category without a concrete word gets a random entry.
const CATEGORY_WORDS: &[&str] = &["slang", "jerga"];

const MAX_EXPLANATIONS: usize = 2;

pub struct SlangStrategy {
    lexicon: Arc<Lexicon>,
}

impl SlangStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Dictionary words present in the message as whole tokens, message order.
    fn dictionary_hits(&self, message: &str) -> Vec<String> {
        message
            .to_lowercase()
            .split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .filter(|token| !token.is_empty() && self.lexicon.slang_lookup(token).is_some())
            .collect()
    }
}

impl ResponseStrategy for SlangStrategy {
    fn name(&self) -> &'static str {
        "slang"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, SLANG_TRIGGERS)
    }

    fn respond(&self, message: &str) -> String {
        let hits = self.dictionary_hits(message);

        if !hits.is_empty() {
            return hits
                .iter()
                .take(MAX_EXPLANATIONS)
                .map(|word| self.lexicon.explain_slang(word))
                .collect::<Vec<_>>()
                .join(" ");
        }

        let normalized = message.to_lowercase();
        if contains_any(&normalized, CATEGORY_WORDS) {
            let entry = self.lexicon.random_slang_entry();
            return format!(
                "Te enseño una de mis favoritas: {}",
                self.lexicon.explain_slang(entry.word)
            );
        }

        "Dime qué palabra colombiana quieres que te explique, ¡vamos!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strategy() -> SlangStrategy {
        SlangStrategy::new(Arc::new(
            Lexicon::with_rng("Deep", StdRng::seed_from_u64(2)).unwrap(),
        ))
    }

    #[test]
    fn test_trigger_detection() {
        let strategy = strategy();
        assert!(strategy.matches("qué significa parce"));
        assert!(strategy.matches("explícame la jerga"));
        assert!(strategy.matches("hablas slang?"));
        assert!(!strategy.matches("cómo está el clima"));
    }

    #[test]
    fn test_known_word_reply_contains_meaning() {
        let strategy = strategy();
        let reply = strategy.respond("Qué significa parce");
        assert!(reply.contains("amigo") || reply.contains("compañero"));
    }

    #[test]
    fn test_punctuation_is_stripped_from_tokens() {
        let strategy = strategy();
        let reply = strategy.respond("¿Qué significa 'chimba'?");
        assert!(reply.contains("chimba"));
        assert!(reply.contains("significa"));
    }

    #[test]
    fn test_at_most_two_words_explained() {
        let strategy = strategy();
        let reply = strategy.respond("qué significa parce chimba bacano");
        assert_eq!(reply.matches("significa").count(), 2);
    }

    #[test]
    fn test_category_mention_without_word_explains_random_entry() {
        let strategy = strategy();
        let reply = strategy.respond("enséñame jerga");
        assert!(reply.contains("significa"));
    }

    #[test]
    fn test_no_word_and_no_category_asks_for_one() {
        let strategy = strategy();
        let reply = strategy.respond("qué quiere decir eso");
        assert!(reply.contains("qué palabra"));
    }
}
