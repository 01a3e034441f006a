//! Anthropic provider implementation
//!
//! Draft generation via the messages API; the JSON draft is extracted
//! from the response's text content blocks.

mod draft;
mod types;

pub use draft::AnthropicDraftProvider;
