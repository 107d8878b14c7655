use thiserror::Error;

/// Failures of a single styling request. Both variants reach the user through
/// the same session error channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StylistError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Parse(String),
}

impl StylistError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<reqwest::Error> for StylistError {
    fn from(err: reqwest::Error) -> Self {
        // The URL can carry credentials; keep it out of user-visible text.
        let err = err.without_url();
        Self::Transport(format!("request to generation backend failed: {err}"))
    }
}

/// Calls the session state machine refuses. State is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("form can only be edited before a look is generated; reset first")]
    NotEditing,

    #[error("there is no result to reset")]
    NothingToReset,

    #[error("form is incomplete: {0}")]
    InvalidForm(String),

    #[error("unknown style archetype '{0}' (expected Female, Male or Non-Binary)")]
    UnknownArchetype(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read secrets file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid secrets file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
