//! Catch-all strategy. Always matches, guaranteeing total dispatch.

use super::ResponseStrategy;
use crate::lexicon::Lexicon;
use std::sync::Arc;

pub struct DefaultStrategy {
    lexicon: Arc<Lexicon>,
}

impl DefaultStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl ResponseStrategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn matches(&self, _message: &str) -> bool {
        true
    }

    fn respond(&self, _message: &str) -> String {
        self.lexicon.confused()
    }
}
