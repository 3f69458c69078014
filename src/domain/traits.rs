//! # Domain Traits
//!
//! Abstract interfaces for core system components.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Messaging Provider (e.g., Twilio, Console)
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Wrap a reply body into the transport's wire format (e.g., TwiML)
    fn wrap_reply(&self, body: &str) -> String;

    /// Proactively send a message, returning the provider's message id
    async fn send_message(&self, to: &str, body: &str) -> Result<String, String>;

    /// Check the authenticity header of an incoming webhook request
    fn validate_request(&self, signature: Option<&str>) -> bool;
}
