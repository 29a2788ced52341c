use crate::render::view_models::RenderOutcome;

/// JSON formatter for search results
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format outcome as pretty-printed JSON
    pub fn format(outcome: &RenderOutcome) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(outcome)
    }

    /// Format outcome as compact JSON (no whitespace)
    pub fn format_compact(outcome: &RenderOutcome) -> Result<String, serde_json::Error> {
        serde_json::to_string(outcome)
    }
}
