//! # Lexicon
//!
//! The bot's static vocabulary plus the random selection and flavoring
//! operations over it. The `Lexicon` owns the process RNG behind a mutex so
//! strategies can share it immutably; tests construct it with a seeded RNG
//! for deterministic output.

pub mod catalog;

pub use catalog::SlangEntry;

use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Probability that a reply gets a colloquial tag appended.
const FLAVOR_PROBABILITY: f64 = 0.7;
/// Probability that a flavored reply also gets a regional expression.
const FLAVOR_REGIONAL_PROBABILITY: f64 = 0.25;

pub struct Lexicon {
    name: String,
    rng: Mutex<StdRng>,
}

impl Lexicon {
    /// Build a lexicon seeded from OS entropy.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_rng(name, StdRng::from_entropy())
    }

    /// Build a lexicon with a caller-supplied RNG (fixed seeds in tests).
    pub fn with_rng(name: &str, rng: StdRng) -> Result<Self> {
        validate_catalogs(&[
            ("greeting", catalog::GREETINGS),
            ("greeting follow-up", catalog::GREETING_FOLLOW_UPS),
            ("farewell", catalog::FAREWELLS),
            ("farewell wish", catalog::FAREWELL_WISHES),
            ("positive", catalog::POSITIVE_RESPONSES),
            ("encouragement", catalog::ENCOURAGEMENTS),
            ("reinforcement", catalog::REINFORCEMENTS),
            ("surprise", catalog::SURPRISE_RESPONSES),
            ("agreement", catalog::AGREEMENT_RESPONSES),
            ("disagreement", catalog::DISAGREEMENT_RESPONSES),
            ("advice", catalog::ADVICE_PHRASES),
            ("personality", catalog::PERSONALITY_TRAITS),
            ("fact", catalog::RANDOM_FACTS),
            ("fact follow-up", catalog::FACT_FOLLOW_UPS),
            ("joke", catalog::JOKES),
            ("joke tag", catalog::JOKE_TAGS),
            ("confused", catalog::CONFUSED_RESPONSES),
            ("flavor tag", catalog::FLAVOR_TAGS),
        ])?;
        ensure!(!catalog::SLANG.is_empty(), "slang dictionary is empty");
        ensure!(
            catalog::REGIONAL_EXPRESSIONS.iter().any(|(_, e)| !e.is_empty()),
            "regional expression table is empty"
        );

        Ok(Self {
            name: name.to_string(),
            rng: Mutex::new(rng),
        })
    }

    pub fn bot_name(&self) -> &str {
        &self.name
    }

    /// Uniformly random element of a validated, non-empty catalog.
    fn pick(&self, items: &'static [&'static str]) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // Catalogs are validated non-empty at construction.
        items.choose(&mut *rng).copied().unwrap_or(items[0])
    }

    /// Single biased coin flip against the shared RNG.
    pub fn chance(&self, probability: f64) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_bool(probability)
    }

    pub fn greeting(&self) -> String {
        self.pick(catalog::GREETINGS).replace("{name}", &self.name)
    }

    pub fn greeting_follow_up(&self) -> String {
        self.pick(catalog::GREETING_FOLLOW_UPS).to_string()
    }

    pub fn farewell(&self) -> String {
        self.pick(catalog::FAREWELLS).to_string()
    }

    pub fn farewell_wish(&self) -> String {
        self.pick(catalog::FAREWELL_WISHES).to_string()
    }

    pub fn positive(&self) -> String {
        self.pick(catalog::POSITIVE_RESPONSES).to_string()
    }

    pub fn encouragement(&self) -> String {
        self.pick(catalog::ENCOURAGEMENTS).to_string()
    }

    pub fn reinforcement(&self) -> String {
        self.pick(catalog::REINFORCEMENTS).to_string()
    }

    pub fn surprise(&self) -> String {
        self.pick(catalog::SURPRISE_RESPONSES).to_string()
    }

    pub fn agreement(&self) -> String {
        self.pick(catalog::AGREEMENT_RESPONSES).to_string()
    }

    pub fn disagreement(&self) -> String {
        self.pick(catalog::DISAGREEMENT_RESPONSES).to_string()
    }

    pub fn advice(&self) -> String {
        self.pick(catalog::ADVICE_PHRASES).to_string()
    }

    pub fn personality_trait(&self) -> String {
        self.pick(catalog::PERSONALITY_TRAITS).to_string()
    }

    pub fn random_fact(&self) -> String {
        self.pick(catalog::RANDOM_FACTS).to_string()
    }

    pub fn fact_follow_up(&self) -> String {
        self.pick(catalog::FACT_FOLLOW_UPS).to_string()
    }

    pub fn joke(&self) -> String {
        self.pick(catalog::JOKES).to_string()
    }

    pub fn joke_tag(&self) -> String {
        self.pick(catalog::JOKE_TAGS).to_string()
    }

    pub fn confused(&self) -> String {
        self.pick(catalog::CONFUSED_RESPONSES).to_string()
    }

    /// Case-insensitive dictionary lookup.
    pub fn slang_lookup(&self, word: &str) -> Option<&'static SlangEntry> {
        let word = word.to_lowercase();
        catalog::SLANG.iter().find(|entry| entry.word == word)
    }

    /// Human answer for a slang query, hit or miss.
    pub fn explain_slang(&self, word: &str) -> String {
        match self.slang_lookup(word) {
            Some(entry) => format!(
                "¡Claro! '{}' significa '{}'. {}. ¡Muy bacano saber eso!",
                entry.word, entry.meaning, entry.description
            ),
            None => {
                "Esa palabra no la tengo en mi diccionario, parce. Pero tú me la enseñas 😉"
                    .to_string()
            }
        }
    }

    pub fn random_slang_entry(&self) -> &'static SlangEntry {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        catalog::SLANG
            .choose(&mut *rng)
            .unwrap_or(&catalog::SLANG[0])
    }

    /// Random expression across all regions (the table is used flattened).
    pub fn regional_expression(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let flattened: Vec<&'static str> = catalog::REGIONAL_EXPRESSIONS
            .iter()
            .flat_map(|(_, expressions)| expressions.iter().copied())
            .collect();
        flattened
            .choose(&mut *rng)
            .copied()
            .unwrap_or(catalog::FLAVOR_TAGS[0])
    }

    /// Stylistic post-processing: usually appends a colloquial tag, sometimes
    /// a regional expression on top.
    pub fn add_flavor(&self, message: &str) -> String {
        if !self.chance(FLAVOR_PROBABILITY) {
            return message.to_string();
        }
        let tag = self.pick(catalog::FLAVOR_TAGS);
        if self.chance(FLAVOR_REGIONAL_PROBABILITY) {
            format!("{} {} {}", message, tag, self.regional_expression())
        } else {
            format!("{message} {tag}")
        }
    }
}

fn validate_catalogs(catalogs: &[(&str, &[&str])]) -> Result<()> {
    for (category, items) in catalogs {
        ensure!(!items.is_empty(), "phrase catalog '{category}' is empty");
    }
    Ok(())
}
