use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::SessionError;
use crate::form::FormField;
use crate::state::{Phase, SessionController};
use crate::term::events::{self, UiEvent, HELP};
use crate::term::renderer;

pub const EXIT_OK: u8 = 0;
pub const EXIT_STYLING_FAILED: u8 = 1;
pub const EXIT_INVALID_FORM: u8 = 2;

/// Request given on the command line instead of typed interactively.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    pub occasion: String,
    pub style: Option<String>,
    pub preferences: String,
    pub json: bool,
}

/// Fills the form, submits once and prints the outcome. Returns the exit code.
pub fn run_once(controller: &mut SessionController, request: &OneShot, out: &mut impl Write) -> Result<u8> {
    let edits = [
        (FormField::Occasion, request.occasion.as_str()),
        (FormField::StyleArchetype, request.style.as_deref().unwrap_or("")),
        (FormField::Preferences, request.preferences.as_str()),
    ];
    for (field, value) in edits {
        if let Err(err) = controller.on_field_change(field, value) {
            writeln!(out, "{err}")?;
            return Ok(EXIT_INVALID_FORM);
        }
    }

    match controller.on_submit() {
        Ok(Phase::ResultShown) => {}
        Ok(Phase::Editing) => {
            let message = controller.state().last_error().unwrap_or("unknown failure");
            writeln!(out, "{}", renderer::render_error(message))?;
            return Ok(EXIT_STYLING_FAILED);
        }
        Err(SessionError::InvalidForm(_)) => {
            write!(out, "{}", renderer::render_form(controller))?;
            return Ok(EXIT_INVALID_FORM);
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(EXIT_INVALID_FORM);
        }
    }

    let Some(rec) = controller.state().last_result() else {
        return Ok(EXIT_STYLING_FAILED);
    };
    if request.json {
        writeln!(out, "{}", serde_json::to_string_pretty(rec)?)?;
    } else {
        write!(out, "{}", renderer::render_recommendation(rec))?;
    }
    Ok(EXIT_OK)
}

/// Line-driven front end: one command per line until `quit` or end of input.
pub fn run_interactive(
    controller: &mut SessionController,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "FashionMate - AI Personal Stylist")?;
    if controller.is_offline() {
        writeln!(out, "(offline mode: no GEMINI_API_KEY configured, a sample look will be shown)")?;
    }
    writeln!(out, "Curate your look for any occasion. Type 'help' for commands.")?;
    writeln!(out)?;
    write!(out, "{}", renderer::render_form(controller))?;

    let mut lines = input.lines();
    loop {
        write!(out, ">> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match events::parse_line(&line) {
            Ok(event) => event,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };
        tracing::debug!(?event, "ui event");

        if !handle_event(controller, event, out)? {
            break;
        }
    }
    writeln!(out)?;
    Ok(())
}

// Returns false when the user asked to leave.
fn handle_event(controller: &mut SessionController, event: UiEvent, out: &mut impl Write) -> Result<bool> {
    let refused = match event {
        UiEvent::Quit => return Ok(false),
        UiEvent::Help => {
            writeln!(out, "{HELP}")?;
            None
        }
        UiEvent::Show => {
            show(controller, out)?;
            None
        }
        UiEvent::FieldChange(field, value) => match controller.on_field_change(field, &value) {
            Ok(()) => {
                write!(out, "{}", renderer::render_form(controller))?;
                None
            }
            Err(err) => Some(err),
        },
        UiEvent::Suggestion(text) => match controller.on_suggestion_chosen(text) {
            Ok(()) => {
                write!(out, "{}", renderer::render_form(controller))?;
                None
            }
            Err(err) => Some(err),
        },
        UiEvent::Submit => {
            if controller.can_submit() {
                writeln!(out, "Designing...")?;
                out.flush()?;
            }
            match controller.on_submit() {
                Ok(_) => {
                    show(controller, out)?;
                    None
                }
                Err(err) => Some(err),
            }
        }
        UiEvent::Reset => match controller.on_reset() {
            Ok(()) => {
                write!(out, "{}", renderer::render_form(controller))?;
                None
            }
            Err(err) => Some(err),
        },
    };

    if let Some(err) = refused {
        writeln!(out, "{err}")?;
    }
    Ok(true)
}

fn show(controller: &SessionController, out: &mut impl Write) -> Result<()> {
    let state = controller.state();
    if let Some(rec) = state.last_result() {
        write!(out, "{}", renderer::render_recommendation(rec))?;
        writeln!(out, "\nType 'reset' for a new style.")?;
        return Ok(());
    }
    if let Some(message) = state.last_error() {
        writeln!(out, "{}", renderer::render_error(message))?;
    }
    write!(out, "{}", renderer::render_form(controller))?;
    Ok(())
}
