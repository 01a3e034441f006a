//! Draft generation endpoint
//!
//! `POST /v1/generate` is the single boundary the event-creation wizard
//! calls. Input validation is limited to field presence and a non-empty
//! category; semantic checks (date plausibility and the like) belong to
//! the calling form. Whenever validation passes the response is a 200
//! with a usable draft: provider failures only steer which path
//! produced it.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{extract::State, Json};
use eventra_core::{DraftEnvelope, GenerationRequest};
use serde::Deserialize;

// ============================================================================
// TYPES
// ============================================================================

/// Wire request for draft generation.
///
/// Fields are optional at the serde level so that absence maps to a 400
/// with the boundary's `{ "error": ... }` body instead of a rejection
/// from the extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEventRequest {
    #[serde(default)]
    pub event_category: Option<String>,
    #[serde(default)]
    pub event_details: Option<String>,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /v1/generate - produce an event draft from category + details.
pub async fn generate_event(
    State(state): State<AppState>,
    Json(body): Json<GenerateEventRequest>,
) -> ApiResult<Json<DraftEnvelope>> {
    let request = validate(body)?;
    let envelope = state.coordinator.generate(&request).await;
    Ok(Json(envelope))
}

/// Check field presence and the non-empty category constraint.
///
/// Empty `eventDetails` is accepted: fallback synthesis substitutes the
/// default description text for it.
fn validate(body: GenerateEventRequest) -> ApiResult<GenerationRequest> {
    let category = body
        .event_category
        .ok_or_else(|| ApiError::missing_field("eventCategory"))?;
    let details = body
        .event_details
        .ok_or_else(|| ApiError::missing_field("eventDetails"))?;

    if category.trim().is_empty() {
        return Err(ApiError::invalid_input("eventCategory must not be empty"));
    }

    Ok(GenerationRequest { category, details })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_empty_details() {
        let body = GenerateEventRequest {
            event_category: Some("charity-fundraiser".to_string()),
            event_details: Some(String::new()),
        };
        let request = validate(body).unwrap();
        assert_eq!(request.category, "charity-fundraiser");
        assert_eq!(request.details, "");
    }

    #[test]
    fn test_validate_rejects_missing_category() {
        let body = GenerateEventRequest {
            event_category: None,
            event_details: Some("details".to_string()),
        };
        let err = validate(body).unwrap_err();
        assert!(err.message.contains("eventCategory"));
    }

    #[test]
    fn test_validate_rejects_missing_details() {
        let body = GenerateEventRequest {
            event_category: Some("workshop".to_string()),
            event_details: None,
        };
        let err = validate(body).unwrap_err();
        assert!(err.message.contains("eventDetails"));
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let body = GenerateEventRequest {
            event_category: Some("   ".to_string()),
            event_details: Some("details".to_string()),
        };
        let err = validate(body).unwrap_err();
        assert!(err.message.contains("eventCategory"));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let body: GenerateEventRequest = serde_json::from_str(
            r#"{"eventCategory": "workshop", "eventDetails": "A bootcamp"}"#,
        )
        .unwrap();
        assert_eq!(body.event_category.as_deref(), Some("workshop"));
        assert_eq!(body.event_details.as_deref(), Some("A bootcamp"));
    }
}
