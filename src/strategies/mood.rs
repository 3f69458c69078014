//! Mood strategies: encouragement, surprise, agreement and disagreement.
//!
//! Trigger lists are chosen so that the agreement and disagreement sets stay
//! disjoint under substring matching ("no estoy de acuerdo" must not reach
//! the agreement strategy, which runs first).

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const ENCOURAGEMENT_TRIGGERS: &[&str] = &[
    "triste",
    "deprimido",
    "estresado",
    "cansado",
    "agotado",
    "desanimado",
    "mal día",
    "me siento mal",
];

const REINFORCEMENT_PROBABILITY: f64 = 0.5;

pub struct EncouragementStrategy {
    lexicon: Arc<Lexicon>,
}

impl EncouragementStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for EncouragementStrategy {
    fn name(&self) -> &'static str {
        "encouragement"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, ENCOURAGEMENT_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let encouragement = self.lexicon.encouragement();
        if self.lexicon.chance(REINFORCEMENT_PROBABILITY) {
            format!("{} {}", encouragement, self.lexicon.reinforcement())
        } else {
            encouragement
        }
    }
}

const SURPRISE_TRIGGERS: &[&str] = &[
    "no puedo creer",
    "increíble",
    "impresionante",
    "en serio",
    "qué sorpresa",
    "wow",
];

const SURPRISE_FOLLOW_UP: &str = "¡Cuéntame más detalles!";
const SURPRISE_FOLLOW_UP_PROBABILITY: f64 = 0.25;

pub struct SurpriseStrategy {
    lexicon: Arc<Lexicon>,
}

impl SurpriseStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for SurpriseStrategy {
    fn name(&self) -> &'static str {
        "surprise"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, SURPRISE_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let surprise = self.lexicon.surprise();
        if self.lexicon.chance(SURPRISE_FOLLOW_UP_PROBABILITY) {
            format!("{surprise} {SURPRISE_FOLLOW_UP}")
        } else {
            surprise
        }
    }
}

const AGREEMENT_TRIGGERS: &[&str] = &[
    "exacto",
    "obvio",
    "claro que sí",
    "tienes razón",
    "totalmente de acuerdo",
    "así es",
];

const AGREEMENT_REINFORCEMENT_PROBABILITY: f64 = 0.6;

pub struct AgreementStrategy {
    lexicon: Arc<Lexicon>,
}

impl AgreementStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for AgreementStrategy {
    fn name(&self) -> &'static str {
        "agreement"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, AGREEMENT_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        let agreement = self.lexicon.agreement();
        if self.lexicon.chance(AGREEMENT_REINFORCEMENT_PROBABILITY) {
            format!("{} {}", agreement, self.lexicon.reinforcement())
        } else {
            agreement
        }
    }
}

const DISAGREEMENT_TRIGGERS: &[&str] = &[
    "no estoy de acuerdo",
    "mentira",
    "falso",
    "no creo",
    "para nada",
    "qué va",
];

pub struct DisagreementStrategy {
    lexicon: Arc<Lexicon>,
}

impl DisagreementStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for DisagreementStrategy {
    fn name(&self) -> &'static str {
        "disagreement"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, DISAGREEMENT_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        self.lexicon.disagreement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::with_rng("Deep", StdRng::seed_from_u64(8)).unwrap())
    }

    #[test]
    fn test_encouragement_triggers() {
        let strategy = EncouragementStrategy::new(lexicon());
        assert!(strategy.matches("estoy muy triste hoy"));
        assert!(strategy.matches("qué mal día"));
        assert!(!strategy.matches("todo va perfecto"));
    }

    #[test]
    fn test_surprise_triggers() {
        let strategy = SurpriseStrategy::new(lexicon());
        assert!(strategy.matches("no puedo creer lo que pasó"));
        assert!(strategy.matches("eso es increíble"));
        assert!(!strategy.matches("nada nuevo por acá"));
    }

    #[test]
    fn test_agreement_does_not_capture_negation() {
        let agreement = AgreementStrategy::new(lexicon());
        let disagreement = DisagreementStrategy::new(lexicon());
        let message = "no estoy de acuerdo con eso";
        assert!(!agreement.matches(message));
        assert!(disagreement.matches(message));
    }

    #[test]
    fn test_agreement_triggers() {
        let strategy = AgreementStrategy::new(lexicon());
        assert!(strategy.matches("exacto, eso mismo pensé"));
        assert!(strategy.matches("tienes razón parce"));
    }

    #[test]
    fn test_mood_responses_are_non_empty() {
        let lexicon = lexicon();
        let strategies: Vec<Box<dyn ResponseStrategy>> = vec![
            Box::new(EncouragementStrategy::new(lexicon.clone())),
            Box::new(SurpriseStrategy::new(lexicon.clone())),
            Box::new(AgreementStrategy::new(lexicon.clone())),
            Box::new(DisagreementStrategy::new(lexicon)),
        ];
        for strategy in &strategies {
            for _ in 0..20 {
                assert!(!strategy.respond("mensaje").is_empty());
            }
        }
    }
}
