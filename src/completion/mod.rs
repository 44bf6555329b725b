//! Completion clients.
//!
//! The rest of the crate only sees [`CompletionClient`]: one prompt in, one
//! generated text out. [`GeminiClient`] is the production implementation.

mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;

/// A text-completion service.
///
/// Calls block until the service answers or fails. Implementations must not
/// retry on their own.
pub trait CompletionClient {
    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// `CompletionError` on network, authentication, quota, or
    /// malformed-response failures.
    fn complete(&self, prompt: &str) -> Result<String>;
}
