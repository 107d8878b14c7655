use serde_json::{Map, Value};

use crate::error::StylistError;
use crate::outfit::model::{Alternative, PrimaryOutfit, Recommendation};

/// Recovers a recommendation from a model reply that may be wrapped in prose
/// or markdown fences. Only an undecodable reply is an error; missing or
/// mistyped fields fall back to defaults.
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, StylistError> {
    let object = decode_object(raw).ok_or_else(|| {
        tracing::warn!(snippet = %snippet(raw), "no JSON object in model reply");
        StylistError::parse("no JSON object found")
    })?;
    Ok(normalize(&object))
}

fn decode_object(raw: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
        return Some(map);
    }

    // First '{' to last '}'. Prose containing braces of its own can throw
    // this off; that is accepted.
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    tracing::debug!(start, end, "decoding brace-delimited slice of reply");
    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(%err, "brace-delimited slice is not valid JSON");
            None
        }
    }
}

fn normalize(object: &Map<String, Value>) -> Recommendation {
    let primary_outfit = match object.get("primary_outfit") {
        Some(Value::Object(primary)) => PrimaryOutfit {
            title: text(primary.get("title")),
            top: text(primary.get("top")),
            bottom: text(primary.get("bottom")),
            footwear: text(primary.get("footwear")),
            accessories: list(primary.get("accessories"))
                .iter()
                .filter_map(scalar_text)
                .collect(),
            reasoning: text(primary.get("reasoning")),
        },
        _ => PrimaryOutfit::default(),
    };

    let additional_suggestions = list(object.get("additional_suggestions"))
        .iter()
        .filter_map(|item| match item {
            Value::Object(alt) => Some(Alternative {
                label: text(alt.get("label")),
                outfit_summary: text(alt.get("outfit_summary")),
            }),
            _ => None,
        })
        .collect();

    Recommendation {
        primary_outfit,
        additional_suggestions,
        styling_notes: text(object.get("styling_notes")),
    }
}

fn text(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn list(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn snippet(raw: &str) -> String {
    raw.chars().take(100).collect()
}
