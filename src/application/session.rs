//! # Session Tracker
//!
//! Per-sender message counters and last-message bookkeeping. Consulted for
//! status reporting only; dispatch decisions never read it. Records are
//! created lazily and live for the process lifetime (no eviction).

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub message_count: u64,
    pub last_message: String,
    pub last_interaction: DateTime<Utc>,
}

#[derive(Default)]
pub struct SessionTracker {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the sender's record if unseen, then bump the counter and
    /// overwrite the last message and timestamp. All senders serialize
    /// through one lock, so counts stay exact under concurrent messages.
    pub async fn record(&self, sender: &str, message: &str) {
        let mut sessions = self.sessions.lock().await;
        let record = sessions
            .entry(sender.to_string())
            .or_insert_with(|| SessionRecord {
                message_count: 0,
                last_message: String::new(),
                last_interaction: Utc::now(),
            });
        record.message_count += 1;
        record.last_message = message.to_string();
        record.last_interaction = Utc::now();
    }

    pub async fn get(&self, sender: &str) -> Option<SessionRecord> {
        self.sessions.lock().await.get(sender).cloned()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_counts_sequential_messages() {
        let tracker = SessionTracker::new();
        for i in 1..=5 {
            tracker.record("whatsapp:+573001112233", &format!("mensaje {i}")).await;
        }
        let record = tracker.get("whatsapp:+573001112233").await.unwrap();
        assert_eq!(record.message_count, 5);
        assert_eq!(record.last_message, "mensaje 5");
    }

    #[tokio::test]
    async fn test_senders_have_disjoint_records() {
        let tracker = SessionTracker::new();
        tracker.record("whatsapp:+571", "uno").await;
        tracker.record("whatsapp:+572", "dos").await;
        tracker.record("whatsapp:+572", "tres").await;

        assert_eq!(tracker.get("whatsapp:+571").await.unwrap().message_count, 1);
        assert_eq!(tracker.get("whatsapp:+572").await.unwrap().message_count, 2);
        assert_eq!(tracker.active_count().await, 2);
    }

    #[tokio::test]
    async fn test_unknown_sender_has_no_record() {
        let tracker = SessionTracker::new();
        assert!(tracker.get("whatsapp:+579").await.is_none());
        assert_eq!(tracker.active_count().await, 0);
    }
}
