//! Event draft domain types
//!
//! The generation request, the structured event draft produced by the
//! coordinator, and the response envelope returned over the wire. Drafts
//! are transient: they live in the calling wizard's state until the user
//! edits or discards them, and the coordinator never mutates one after
//! returning it.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// GENERATION REQUEST
// ============================================================================

/// A single draft-generation request.
///
/// `category` must be non-empty; `details` may be empty, in which case
/// fallback synthesis substitutes fixed default text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub category: String,
    pub details: String,
}

impl GenerationRequest {
    pub fn new(category: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            details: details.into(),
        }
    }
}

// ============================================================================
// EVENT DRAFT
// ============================================================================

/// Venue information attached to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

/// A structured event draft.
///
/// Produced exactly once per request, either by a live provider or by
/// fallback synthesis. All fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: EventLocation,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub suggested_date: String,
    pub capacity: i32,
    pub is_free: bool,
    pub suggested_price: f64,
    pub category_recommendations: Vec<String>,
}

impl EventDraft {
    /// Check that the draft satisfies the structural contract.
    ///
    /// Used to vet provider responses before they are returned to the
    /// caller; a violation counts as that provider's failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: "title".to_string(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: "description".to_string(),
            });
        }
        if self.capacity < 1 {
            return Err(ValidationError::InvalidValue {
                field: "capacity".to_string(),
                reason: format!("must be at least 1, got {}", self.capacity),
            });
        }
        if self.suggested_price < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "suggestedPrice".to_string(),
                reason: format!("must be non-negative, got {}", self.suggested_price),
            });
        }
        if NaiveDate::parse_from_str(&self.suggested_date, "%Y-%m-%d").is_err() {
            return Err(ValidationError::InvalidValue {
                field: "suggestedDate".to_string(),
                reason: format!("not an ISO-8601 date: {}", self.suggested_date),
            });
        }
        Ok(())
    }
}

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// Which path produced the returned draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    Primary,
    Secondary,
    Fallback,
}

/// The envelope returned to the caller.
///
/// `error` is present only when `source` is `Fallback` and the fallback
/// was caused by provider failure rather than missing credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEnvelope {
    pub event: EventDraft,
    pub source: DraftSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// UNIT TESTS
// ============================================================================
