//! Trivia strategies: random facts and jokes.

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const FACT_TRIGGERS: &[&str] = &["dato", "sabías", "cuéntame algo", "curiosidad"];

const FACT_FOLLOW_UP_PROBABILITY: f64 = 0.3;

pub struct RandomFactStrategy {
    lexicon: Arc<Lexicon>,
}

impl RandomFactStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for RandomFactStrategy {
    fn name(&self) -> &'static str {
        "random_fact"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, FACT_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let fact = format!("¿Sabías que...? {}", self.lexicon.random_fact());
        if self.lexicon.chance(FACT_FOLLOW_UP_PROBABILITY) {
            format!("{} {}", fact, self.lexicon.fact_follow_up())
        } else {
            fact
        }
    }
}

const JOKE_TRIGGERS: &[&str] = &[
    "chiste",
    "hazme reír",
    "broma",
    "algo gracioso",
    "cuéntame un chiste",
];

const JOKE_TAG_PROBABILITY: f64 = 0.5;

pub struct JokeStrategy {
    lexicon: Arc<Lexicon>,
}

impl JokeStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for JokeStrategy {
    fn name(&self) -> &'static str {
        "joke"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, JOKE_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let joke = self.lexicon.joke();
        if self.lexicon.chance(JOKE_TAG_PROBABILITY) {
            format!("{} {}", joke, self.lexicon.joke_tag())
        } else {
            joke
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::with_rng("Deep", StdRng::seed_from_u64(13)).unwrap())
    }

    #[test]
    fn test_fact_triggers() {
        let strategy = RandomFactStrategy::new(lexicon());
        assert!(strategy.matches("dame un dato curioso"));
        assert!(strategy.matches("sabías que los gatos duermen tanto"));
        assert!(!strategy.matches("hola parce"));
    }

    #[test]
    fn test_joke_triggers() {
        let strategy = JokeStrategy::new(lexicon());
        assert!(strategy.matches("cuéntame un chiste"));
        assert!(strategy.matches("hazme reír un rato"));
        assert!(!strategy.matches("estoy aburrido"));
    }

    #[test]
    fn test_joke_request_is_not_a_fact_request() {
        let strategy = RandomFactStrategy::new(lexicon());
        assert!(!strategy.matches("cuéntame un chiste"));
    }

    #[test]
    fn test_fact_reply_prefix() {
        let strategy = RandomFactStrategy::new(lexicon());
        let reply = strategy.respond("un dato porfa");
        assert!(reply.starts_with("¿Sabías que...?"));
    }
}
