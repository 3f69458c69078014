//! # Dispatcher
//!
//! Routes an incoming message to the first strategy whose predicate matches,
//! then runs the reply through the Lexicon's flavor pass. Dispatch is total:
//! the empty-input shortcut and the trailing Default strategy guarantee a
//! non-empty reply for every input.

use crate::lexicon::{Lexicon, catalog};
use crate::strategies::StrategyRegistry;
use std::sync::Arc;

pub struct Dispatcher {
    lexicon: Arc<Lexicon>,
    registry: StrategyRegistry,
}

impl Dispatcher {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let registry = StrategyRegistry::new(lexicon.clone());
        Self { lexicon, registry }
    }

    /// Produce a reply for the message. Never fails, never empty.
    pub fn handle(&self, message: &str) -> String {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return catalog::EMPTY_PROMPT.to_string();
        }

        let normalized = trimmed.to_lowercase();
        if let Some(strategy) = self.registry.select(&normalized) {
            tracing::debug!(strategy = strategy.name(), "strategy selected");
            return self.lexicon.add_flavor(&strategy.respond(trimmed));
        }

        // Unreachable while Default stays registered last.
        self.lexicon.add_flavor(&self.lexicon.confused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dispatcher(seed: u64) -> Dispatcher {
        Dispatcher::new(Arc::new(
            Lexicon::with_rng("Deep", StdRng::seed_from_u64(seed)).unwrap(),
        ))
    }

    #[test]
    fn test_every_non_empty_input_gets_a_reply() {
        let dispatcher = dispatcher(1);
        for message in ["hola", "chao", "qué significa parce", "zzz", "1234", "ñ"] {
            assert!(!dispatcher.handle(message).is_empty());
        }
    }

    #[test]
    fn test_empty_input_prompt_is_fixed() {
        for seed in [1, 2, 3, 99] {
            let dispatcher = dispatcher(seed);
            assert_eq!(dispatcher.handle(""), catalog::EMPTY_PROMPT);
            assert_eq!(dispatcher.handle("   "), catalog::EMPTY_PROMPT);
            assert_eq!(dispatcher.handle("\t\n"), catalog::EMPTY_PROMPT);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        let dispatcher = dispatcher(5);
        // A greeting in mixed case with padding must not fall to Default.
        let reply = dispatcher.handle("   HOLA parce   ");
        let confused = crate::lexicon::catalog::CONFUSED_RESPONSES;
        assert!(!confused.iter().any(|c| reply.starts_with(c)));
    }

    #[test]
    fn test_greeting_beats_farewell_in_one_message() {
        // "hola" and "chao" together resolve via Greeting (earlier priority).
        let dispatcher = dispatcher(7);
        let reply = dispatcher.handle("hola y chao");
        let farewells = crate::lexicon::catalog::FAREWELLS;
        assert!(!farewells.iter().any(|f| reply.starts_with(f)));
    }

    #[test]
    fn test_slang_meaning_reaches_the_reply() {
        let dispatcher = dispatcher(3);
        let reply = dispatcher.handle("qué significa parce");
        assert!(reply.contains("amigo") || reply.contains("compañero"));
    }

    #[test]
    fn test_same_seed_gives_same_reply() {
        let a = dispatcher(42);
        let b = dispatcher(42);
        for message in ["hola", "cuéntame un chiste", "dame un consejo"] {
            assert_eq!(a.handle(message), b.handle(message));
        }
    }
}
