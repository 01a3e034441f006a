//! Prompt construction and response parsing
//!
//! Both providers share one instruction prompt describing the required
//! JSON output schema and one user-prompt template. Responses are parsed
//! here so that code-fence stripping and shape validation behave
//! identically regardless of which provider produced the text.

use eventra_core::{EventDraft, EventraResult, GenerationRequest, ProviderError};

/// Fixed instruction prompt describing the required output schema.
pub fn instruction_prompt() -> &'static str {
    "You are an event-planning assistant for an events-listing platform. \
     Given an event category and a free-text description, produce a single \
     JSON object for a draft event listing. Respond with JSON only, no \
     surrounding prose, using exactly these keys: \
     \"title\" (string), \
     \"description\" (string), \
     \"location\" (object with string keys \"name\", \"address\", \"city\", \"country\"), \
     \"suggestedDate\" (ISO-8601 date, YYYY-MM-DD, in the future), \
     \"capacity\" (integer, at least 1), \
     \"isFree\" (boolean), \
     \"suggestedPrice\" (number, 0 when the event is free), \
     \"categoryRecommendations\" (array of short category tag strings)."
}

/// Build the user prompt from the request.
pub fn user_prompt(request: &GenerationRequest) -> String {
    format!(
        "Event category: {}\nEvent details: {}\n\nGenerate the event draft as JSON.",
        request.category, request.details
    )
}

/// Parse a provider's text response into a shape-validated draft.
///
/// Accepts the raw JSON either bare or wrapped in a Markdown code fence.
/// Any parse or shape failure counts as that provider's failure.
pub fn parse_draft_json(provider: &str, raw: &str) -> EventraResult<EventDraft> {
    let body = strip_code_fences(raw);

    let draft: EventDraft = serde_json::from_str(body).map_err(|e| {
        ProviderError::InvalidResponse {
            provider: provider.to_string(),
            reason: format!("Failed to parse draft JSON: {}", e),
        }
    })?;

    draft.validate().map_err(|e| ProviderError::InvalidResponse {
        provider: provider.to_string(),
        reason: format!("Draft failed shape validation: {}", e),
    })?;

    Ok(draft)
}

/// Strip a surrounding Markdown code fence, if present.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line (e.g. ```json).
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}
