use std::fmt::Write;

use crate::form::validator::OCCASION_MAX_LENGTH;
use crate::form::{FieldError, StyleArchetype, SUGGESTED_OCCASIONS};
use crate::outfit::Recommendation;
use crate::state::SessionController;

const MAX_ALTERNATIVES: usize = 3;
const PLACEHOLDER: &str = "—";

/// Form view: current values, inline errors, occasion counter and chips.
pub fn render_form(controller: &SessionController) -> String {
    let form = &controller.state().form;
    let errors = controller.errors();
    let mut out = String::new();

    let _ = writeln!(out, "I'm dressing for...");
    let _ = writeln!(out, "  occasion:    {}", or_placeholder(&form.occasion));
    push_error(&mut out, errors.occasion);
    let _ = writeln!(
        out,
        "               {}/{}",
        form.occasion.chars().count(),
        OCCASION_MAX_LENGTH
    );

    let choices: Vec<String> = StyleArchetype::ALL
        .iter()
        .map(|s| {
            if form.style == Some(*s) {
                format!("[{s}]")
            } else {
                s.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "  style:       {}", choices.join("  "));
    push_error(&mut out, errors.style);

    let _ = writeln!(out, "  preferences: {}", or_placeholder(&form.preferences));
    push_error(&mut out, errors.preferences);

    let _ = writeln!(out);
    let _ = writeln!(out, "Try a quick occasion:");
    for (i, text) in SUGGESTED_OCCASIONS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {text}", i + 1);
    }

    let _ = writeln!(out);
    if controller.can_submit() {
        let _ = writeln!(out, "Ready: type 'submit' to generate.");
    } else {
        let _ = writeln!(out, "Complete the form to enable 'submit'.");
    }
    out
}

fn push_error(out: &mut String, error: Option<FieldError>) {
    if let Some(err) = error {
        let _ = writeln!(out, "               ! {err}");
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

pub fn render_recommendation(rec: &Recommendation) -> String {
    let primary = &rec.primary_outfit;
    let mut out = String::new();

    let _ = writeln!(out, "Your Curated Look");
    let _ = writeln!(out, "=================");
    let title = if primary.title.trim().is_empty() {
        "Curated Look"
    } else {
        primary.title.as_str()
    };
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Top:         {}", or_placeholder(&primary.top));
    let _ = writeln!(out, "Bottom:      {}", or_placeholder(&primary.bottom));
    let _ = writeln!(out, "Footwear:    {}", or_placeholder(&primary.footwear));
    let accessories = primary.accessories.join(", ");
    let _ = writeln!(out, "Accessories: {}", or_placeholder(&accessories));
    let _ = writeln!(out);
    let _ = writeln!(out, "Why this works");
    let _ = writeln!(out, "{}", primary.reasoning);

    if !rec.additional_suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "More Options");
        for alt in rec.additional_suggestions.iter().take(MAX_ALTERNATIVES) {
            let _ = writeln!(out, "  * {}: {}", alt.label, alt.outfit_summary);
        }
    }

    if !rec.styling_notes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Styling Notes");
        let _ = writeln!(out, "{}", rec.styling_notes);
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!("Unable to style: {message}")
}
