//! Help strategy: explains what the bot can do.

use super::{ResponseStrategy, contains_any};
use crate::lexicon::Lexicon;
use std::sync::Arc;

const HELP_TRIGGERS: &[&str] = &["ayuda", "qué puedes hacer", "cómo funcionas"];

pub struct HelpStrategy {
    lexicon: Arc<Lexicon>,
}

impl HelpStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for HelpStrategy {
    fn name(&self) -> &'static str {
        "help"
    }

    fn matches(&self, message: &str) -> bool {
        contains_any(message, HELP_TRIGGERS)
    }

    fn respond(&self, _message: &str) -> String {
        format!(
            "¡Claro, mi hermano! Yo soy {name}, tu bot colombiano. Puedo:\n\
             \n\
             • Saludarte con mucho sabor colombiano 🇨🇴\n\
             • Explicarte palabras de nuestra jerga\n\
             • Subirte el ánimo cuando estés bajito de nota\n\
             • Darte consejos, datos curiosos y chistes\n\
             • Decirte chao con todo el estilo\n\
             \n\
             Solo escríbeme cosas como:\n\
             - \"Hola\" o \"Quiubo\"\n\
             - \"¿Qué significa parce?\"\n\
             - \"Cuéntame un chiste\"\n\
             - \"Chao\" o \"Nos vemos\"\n\
             \n\
             ¡Vamos, pregúntame lo que quieras!",
            name = self.lexicon.bot_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strategy() -> HelpStrategy {
        HelpStrategy::new(Arc::new(
            Lexicon::with_rng("Deep", StdRng::seed_from_u64(4)).unwrap(),
        ))
    }

    #[test]
    fn test_help_triggers() {
        let strategy = strategy();
        assert!(strategy.matches("ayuda"));
        assert!(strategy.matches("necesito ayuda con algo"));
        assert!(strategy.matches("qué puedes hacer"));
        assert!(!strategy.matches("hola"));
    }

    #[test]
    fn test_help_text_mentions_bot_name() {
        let strategy = strategy();
        let reply = strategy.respond("ayuda");
        assert!(reply.contains("Deep"));
        assert!(reply.contains("jerga"));
    }
}
