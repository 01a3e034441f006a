//! OpenAI provider implementation
//!
//! Draft generation via the chat completions API with a JSON-object
//! response format.

mod draft;
mod types;

pub use draft::OpenAIDraftProvider;
