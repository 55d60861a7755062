//! AI adapter module. Implements CopywriterPort for LLM integration.
//!
//! Provides the Cohere adapter and a mock adapter for testing.

pub mod cohere_adapter;
pub mod mock_adapter;

pub use cohere_adapter::CohereAdapter;
pub use mock_adapter::MockCopywriterAdapter;
