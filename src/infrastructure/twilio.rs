//! # Twilio Service Adapter
//!
//! Implements the `MessagingProvider` trait for Twilio's WhatsApp transport.
//! This module acts as the bridge between the generic `MessagingProvider`
//! interface used by the bot's core logic and Twilio's REST API and TwiML
//! wire format.

use crate::domain::config::TwilioConfig;
use crate::domain::traits::MessagingProvider;
use anyhow::Result;
use async_trait::async_trait;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

pub struct TwilioService {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    whatsapp_number: String,
    validate_signatures: bool,
}

impl TwilioService {
    pub fn new(config: &TwilioConfig) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            account_sid: config.resolve_account_sid()?,
            auth_token: config.resolve_auth_token()?,
            whatsapp_number: config.whatsapp_number.clone(),
            validate_signatures: config.validate_signatures,
        })
    }

    /// Build the TwiML document Twilio expects as a webhook response.
    pub fn messaging_response(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
            escape_xml(body)
        )
    }
}

#[async_trait]
impl MessagingProvider for TwilioService {
    fn wrap_reply(&self, body: &str) -> String {
        Self::messaging_response(body)
    }

    async fn send_message(&self, to: &str, body: &str) -> Result<String, String> {
        let url = format!(
            "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
            self.account_sid
        );
        let params = [
            ("From", self.whatsapp_number.as_str()),
            ("To", to),
            ("Body", body),
        ];

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("Twilio API returned {}", response.status()));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        payload
            .get("sid")
            .and_then(|sid| sid.as_str())
            .map(str::to_string)
            .ok_or_else(|| "Twilio response missing message sid".to_string())
    }

    /// Mirrors the upstream development behavior: requests pass unless
    /// signature checking is enabled and the header is absent entirely.
    fn validate_request(&self, signature: Option<&str>) -> bool {
        if !self.validate_signatures {
            return true;
        }
        match signature {
            Some(s) => !s.trim().is_empty(),
            None => false,
        }
    }
}

/// Minimal XML text escaping for TwiML bodies.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::TwilioConfig;

    fn service(validate: bool) -> TwilioService {
        TwilioService::new(&TwilioConfig {
            account_sid: Some("AC123".into()),
            account_sid_env: None,
            auth_token: Some("token".into()),
            auth_token_env: None,
            whatsapp_number: "whatsapp:+14155238886".into(),
            validate_signatures: validate,
        })
        .unwrap()
    }

    #[test]
    fn test_messaging_response_wraps_body() {
        let twiml = TwilioService::messaging_response("¡Quiubo parce!");
        assert!(twiml.starts_with("<?xml"));
        assert!(twiml.contains("<Response><Message>¡Quiubo parce!</Message></Response>"));
    }

    #[test]
    fn test_messaging_response_escapes_xml() {
        let twiml = TwilioService::messaging_response("a < b & c > \"d\"");
        assert!(twiml.contains("a &lt; b &amp; c &gt; &quot;d&quot;"));
        assert!(!twiml.contains("a < b"));
    }

    #[test]
    fn test_validation_disabled_accepts_anything() {
        let service = service(false);
        assert!(service.validate_request(None));
        assert!(service.validate_request(Some("sig")));
    }

    #[test]
    fn test_validation_enabled_requires_header() {
        let service = service(true);
        assert!(!service.validate_request(None));
        assert!(!service.validate_request(Some("  ")));
        assert!(service.validate_request(Some("sig")));
    }
}
