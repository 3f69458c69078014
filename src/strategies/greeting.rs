//! Greeting and farewell strategies.
//!
//! Both are simple trigger lists over the Lexicon's catalogs; the greeting
//! sometimes follows up with a question, the farewell with an extra wish.

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const GREETING_TRIGGERS: &[&str] = &[
    "hola",
    "buenos días",
    "buenas tardes",
    "buenas noches",
    "quiubo",
    "qué más",
];

const FOLLOW_UP_PROBABILITY: f64 = 0.4;

pub struct GreetingStrategy {
    lexicon: Arc<Lexicon>,
}

impl GreetingStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for GreetingStrategy {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, GREETING_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let greeting = self.lexicon.greeting();
        if self.lexicon.chance(FOLLOW_UP_PROBABILITY) {
            format!("{} {}", greeting, self.lexicon.greeting_follow_up())
        } else {
            greeting
        }
    }
}

const FAREWELL_TRIGGERS: &[&str] = &["adiós", "chao", "nos vemos", "hasta luego", "bye"];

const EXTRA_WISH_PROBABILITY: f64 = 0.3;

pub struct FarewellStrategy {
    lexicon: Arc<Lexicon>,
}

impl FarewellStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for FarewellStrategy {
    fn name(&self) -> &'static str {
        "farewell"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, FAREWELL_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let farewell = self.lexicon.farewell();
        if self.lexicon.chance(EXTRA_WISH_PROBABILITY) {
            format!("{} {}", farewell, self.lexicon.farewell_wish())
        } else {
            farewell
        }
    }
}
