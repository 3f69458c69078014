//! # Response Strategies
//!
//! Modular conversational strategy system where:
//! - Each strategy pairs a trigger predicate with a response generator
//! - Strategies are grouped by intent family (greeting, slang, mood, trivia...)
//! - The registry scans them in a fixed priority order, first match wins
//! - The trailing Default strategy accepts everything, so dispatch is total

pub mod advice;
pub mod fallback;
pub mod greeting;
pub mod help;
pub mod mood;
pub mod slang;
pub mod trivia;

use crate::lexicon::Lexicon;
use std::sync::Arc;

/// Trait for conversational strategies.
///
/// `matches` receives the normalized message (trimmed, lowercased);
/// `respond` receives the original trimmed text so generators can echo the
/// user's own words.
pub trait ResponseStrategy: Send + Sync {
    /// Strategy name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this strategy handles the normalized message.
    fn matches(&self, message: &str) -> bool;

    /// Generate the reply for the message.
    fn respond(&self, message: &str) -> String;
}

/// Substring containment of any trigger against the whole message.
/// Triggers are stored lowercase; the caller passes normalized text.
pub(crate) fn contains_any(message: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| message.contains(trigger))
}

/// Ordered registry of all strategies.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn ResponseStrategy>>,
}

impl StrategyRegistry {
    /// The order here is a deliberate precedence policy, not arbitrary:
    /// Greeting wins over Farewell, Slang over Help, and Default is last.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            strategies: vec![
                Box::new(greeting::GreetingStrategy::new(lexicon.clone())),
                Box::new(greeting::FarewellStrategy::new(lexicon.clone())),
                Box::new(slang::SlangStrategy::new(lexicon.clone())),
                Box::new(help::HelpStrategy::new(lexicon.clone())),
                Box::new(mood::EncouragementStrategy::new(lexicon.clone())),
                Box::new(mood::SurpriseStrategy::new(lexicon.clone())),
                Box::new(mood::AgreementStrategy::new(lexicon.clone())),
                Box::new(mood::DisagreementStrategy::new(lexicon.clone())),
                Box::new(advice::AdviceStrategy::new(lexicon.clone())),
                Box::new(advice::PersonalityStrategy::new(lexicon.clone())),
                Box::new(trivia::RandomFactStrategy::new(lexicon.clone())),
                Box::new(trivia::JokeStrategy::new(lexicon.clone())),
                Box::new(fallback::DefaultStrategy::new(lexicon)),
            ],
        }
    }

    /// First strategy whose predicate accepts the normalized message.
    /// Default always matches, so this only returns `None` on an empty
    /// registry, which `new` never builds.
    pub fn select(&self, normalized: &str) -> Option<&dyn ResponseStrategy> {
        self.strategies
            .iter()
            .find(|strategy| strategy.matches(normalized))
            .map(|strategy| strategy.as_ref())
    }
}
