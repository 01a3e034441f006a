//! EVENTRA Core - Domain Types
//!
//! Shared domain model for the Eventra event-draft generation service:
//! the generation request, the structured event draft, the response
//! envelope, and the error taxonomy used across the provider and API
//! layers.

pub mod draft;
pub mod error;

pub use draft::{DraftEnvelope, DraftSource, EventDraft, EventLocation, GenerationRequest};
pub use error::{
    ConfigError, EventraError, EventraResult, ProviderError, ValidationError,
};
