//! LLM provider abstraction and hosted completion API clients.
//!
//! Each provider is one request/response exchange: prompt in, completion
//! text out. Retries, streaming, and cancellation are deliberately absent.

mod client;
mod gemini;
mod openai;

pub use client::{build_provider, CompletionProvider, LlmError};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
