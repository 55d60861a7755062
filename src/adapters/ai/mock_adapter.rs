//! Mock copywriter adapter for testing without API calls.
//!
//! Returns deterministic variants for development and testing purposes.

use crate::domain::{DomainError, EmailVariant};
use crate::ports::CopywriterPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock copywriter for testing.
///
/// Returns predetermined variants without making API calls. Simulates
/// network latency with a configurable delay and counts how many variants
/// were drafted, so tests can assert the exact number of outbound calls.
pub struct MockCopywriterAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    /// When set, every call fails with this message.
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockCopywriterAdapter {
    /// Create a new mock adapter with default delay (10ms).
    pub fn new() -> Self {
        Self {
            delay_ms: 10,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock adapter whose every call fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            fail_with: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of variants drafted so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCopywriterAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CopywriterPort for MockCopywriterAdapter {
    async fn draft_variant(&self, prompt: &str) -> Result<EmailVariant, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        info!(call, prompt_len = prompt.len(), "[MOCK] drafting email variant");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if let Some(message) = &self.fail_with {
            return Err(DomainError::Generation(message.clone()));
        }

        Ok(EmailVariant {
            subject: format!("[MOCK] Subject for call {}", call),
            body: format!(
                "[MOCK] This is a simulated email body for call {}. In a real \
                 scenario, the copywriter service would draft personalized copy \
                 from the prompt. The mock adapter is useful for exercising the \
                 campaign pipeline without incurring API costs.",
                call
            ),
            call_to_action: "[MOCK] Book a demo today".to_string(),
        })
    }
}
