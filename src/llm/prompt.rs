use crate::form::StyleArchetype;

/// Renders the stylist instruction. User text is inserted verbatim.
pub fn build_prompt(occasion: &str, style: StyleArchetype, preferences: &str) -> String {
    let preferences = if preferences.trim().is_empty() {
        "None"
    } else {
        preferences
    };

    format!(
        r#"
You are an AI stylist. Follow the system rules already given for this project.

User outfit request:
- Occasion / event: "{occasion}"
- Style focus (gender): {style}
- Extra preferences: "{preferences}"

Return ONLY valid JSON matching exactly this shape:
{{
  "primary_outfit": {{
    "title": "string",
    "top": "string",
    "bottom": "string",
    "footwear": "string",
    "accessories": ["string"],
    "reasoning": "string"
  }},
  "additional_suggestions": [
    {{
      "label": "string",
      "outfit_summary": "string"
    }}
  ],
  "styling_notes": "string"
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_request_verbatim() {
        let prompt = build_prompt("Beach wedding", StyleArchetype::Female, "no heels");
        assert!(prompt.contains(r#"- Occasion / event: "Beach wedding""#));
        assert!(prompt.contains("- Style focus (gender): Female"));
        assert!(prompt.contains(r#"- Extra preferences: "no heels""#));
    }

    #[test]
    fn blank_preferences_become_none() {
        let prompt = build_prompt("Tech Job Interview", StyleArchetype::NonBinary, "   ");
        assert!(prompt.contains(r#"- Extra preferences: "None""#));
        assert!(prompt.contains("- Style focus (gender): Non-Binary"));
    }

    #[test]
    fn asks_for_canonical_keys() {
        let prompt = build_prompt("Weekend Brunch", StyleArchetype::Male, "");
        for key in [
            "\"primary_outfit\"",
            "\"accessories\": [\"string\"]",
            "\"additional_suggestions\"",
            "\"outfit_summary\"",
            "\"styling_notes\"",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            build_prompt("Gallery Opening", StyleArchetype::Male, "black"),
            build_prompt("Gallery Opening", StyleArchetype::Male, "black")
        );
    }
}
