//! Advice and personality strategies.

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const ADVICE_TRIGGERS: &[&str] = &[
    "consejo",
    "qué hago",
    "qué harías",
    "recomiéndame",
    "qué me recomiendas",
    "ayúdame a decidir",
];

const SECOND_ADVICE_PROBABILITY: f64 = 0.4;

pub struct AdviceStrategy {
    lexicon: Arc<Lexicon>,
}

impl AdviceStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for AdviceStrategy {
    fn name(&self) -> &'static str {
        "advice"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, ADVICE_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let advice = self.lexicon.advice();
        if self.lexicon.chance(SECOND_ADVICE_PROBABILITY) {
            format!("{} Y otra cosa: {}", advice, self.lexicon.advice())
        } else {
            advice
        }
    }
}

const PERSONALITY_TRIGGERS: &[&str] = &[
    "quién eres",
    "quien eres",
    "cómo eres",
    "de dónde eres",
    "háblame de ti",
    "preséntate",
    "tu personalidad",
];

pub struct PersonalityStrategy {
    lexicon: Arc<Lexicon>,
}

impl PersonalityStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for PersonalityStrategy {
    fn name(&self) -> &'static str {
        "personality"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, PERSONALITY_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        format!(
            "{} Yo soy {}: {}.",
            self.lexicon.positive(),
            self.lexicon.bot_name(),
            self.lexicon.personality_trait()
        )
    }
}
