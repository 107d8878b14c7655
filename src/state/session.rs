use crate::error::SessionError;
use crate::form::{FormErrors, FormField, FormInput};
use crate::llm::RecommendationClient;
use crate::outfit::{parse_recommendation, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    ResultShown,
}

/// What the last submission left behind. At most one of result/error exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Outcome {
    #[default]
    Nothing,
    Styled(Recommendation),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub form: FormInput,
    outcome: Outcome,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Outcome::Styled(_) => Phase::ResultShown,
            _ => Phase::Editing,
        }
    }

    pub fn last_result(&self) -> Option<&Recommendation> {
        match &self.outcome {
            Outcome::Styled(rec) => Some(rec),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Drives one user's styling session: form edits, submit and reset.
pub struct SessionController {
    state: SessionState,
    client: RecommendationClient,
}

impl SessionController {
    pub fn new(client: RecommendationClient) -> Self {
        Self {
            state: SessionState::default(),
            client,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn errors(&self) -> FormErrors {
        FormErrors::check(&self.state.form)
    }

    /// Whether the submit control should be enabled right now.
    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Editing && self.errors().is_clear()
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_offline()
    }

    pub fn on_field_change(&mut self, field: FormField, value: &str) -> Result<(), SessionError> {
        self.require_editing()?;
        self.state.form.set(field, value)
    }

    pub fn on_suggestion_chosen(&mut self, text: &str) -> Result<(), SessionError> {
        self.require_editing()?;
        self.state.form.occasion = text.to_string();
        Ok(())
    }

    /// Runs one request to completion. Transport and parse failures land in
    /// `last_error`; only illegal calls return `Err`.
    pub fn on_submit(&mut self) -> Result<Phase, SessionError> {
        self.require_editing()?;
        let errors = self.errors();
        if !errors.is_clear() {
            return Err(SessionError::InvalidForm(errors.summary()));
        }

        let outcome = self
            .client
            .fetch(&self.state.form)
            .and_then(|raw| parse_recommendation(&raw));
        self.state.outcome = match outcome {
            Ok(rec) => {
                tracing::info!(title = %rec.primary_outfit.title, "look generated");
                Outcome::Styled(rec)
            }
            Err(err) => {
                tracing::warn!(%err, "styling request failed");
                Outcome::Failed(err.to_string())
            }
        };
        Ok(self.phase())
    }

    pub fn on_reset(&mut self) -> Result<(), SessionError> {
        if self.phase() != Phase::ResultShown {
            return Err(SessionError::NothingToReset);
        }
        self.state = SessionState::default();
        tracing::debug!("session reset to an empty form");
        Ok(())
    }

    fn require_editing(&self) -> Result<(), SessionError> {
        match self.phase() {
            Phase::Editing => Ok(()),
            Phase::ResultShown => Err(SessionError::NotEditing),
        }
    }
}
