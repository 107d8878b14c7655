use crate::form::{FormField, SUGGESTED_OCCASIONS};

/// A user interaction read from one line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FieldChange(FormField, String),
    Suggestion(&'static str),
    Submit,
    Reset,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  occasion <text>   describe the event you are dressing for
  style <archetype> Female, Male or Non-Binary
  prefs <text>      optional refinements (empty to clear)
  suggest <n>       use quick occasion n (1-6)
  submit            generate a look
  reset             start a new style after a result
  show              print the current form or result
  quit              leave";

pub fn parse_line(line: &str) -> Result<UiEvent, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line.trim(), ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "occasion" | "o" => Ok(UiEvent::FieldChange(FormField::Occasion, rest.to_string())),
        "style" | "s" => Ok(UiEvent::FieldChange(FormField::StyleArchetype, rest.to_string())),
        "prefs" | "preferences" | "p" => {
            Ok(UiEvent::FieldChange(FormField::Preferences, rest.to_string()))
        }
        "suggest" => {
            let index: usize = rest
                .parse()
                .map_err(|_| format!("suggest needs a number between 1 and {}", SUGGESTED_OCCASIONS.len()))?;
            index
                .checked_sub(1)
                .and_then(|i| SUGGESTED_OCCASIONS.get(i).copied())
                .map(UiEvent::Suggestion)
                .ok_or_else(|| format!("no quick occasion {index}"))
        }
        "submit" | "generate" => Ok(UiEvent::Submit),
        "reset" | "new" => Ok(UiEvent::Reset),
        "show" => Ok(UiEvent::Show),
        "help" | "?" => Ok(UiEvent::Help),
        "quit" | "exit" | "q" => Ok(UiEvent::Quit),
        "" => Err("empty command; type 'help'".to_string()),
        other => Err(format!("unknown command '{other}'; type 'help'")),
    }
}
