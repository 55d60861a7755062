//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, EmailVariant};

/// Copywriter gateway. One call drafts one email variant.
///
/// The adapter owns transport and output parsing: it sends the prompt to the
/// generation service and returns the structured variant, or a
/// [`DomainError::Generation`] when the call fails or the output cannot be
/// interpreted as the three required fields.
#[async_trait::async_trait]
pub trait CopywriterPort: Send + Sync {
    /// Draft one subject/body/call-to-action variant from a prompt.
    async fn draft_variant(&self, prompt: &str) -> Result<EmailVariant, DomainError>;
}
