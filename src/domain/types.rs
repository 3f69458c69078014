//! # Domain Types
//!
//! Common data structures shared across layers.

use serde::Serialize;

/// Identity metadata reported by `/health` and the status surfaces.
/// Stable for the process lifetime.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BotIdentity {
    pub name: String,
    pub style_tag: String,
    pub description: String,
    pub version: String,
}
