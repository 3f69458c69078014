//! # Interface Layer
//!
//! Inbound HTTP surface: the Twilio webhook plus the health and banner
//! endpoints, invoked by the axum router built in `webhook::router`.

pub mod webhook;
