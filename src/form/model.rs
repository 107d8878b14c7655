use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

pub const SUGGESTED_OCCASIONS: [&str; 6] = [
    "Casual Coffee Date",
    "Summer Wedding Guest",
    "Tech Job Interview",
    "Weekend Brunch",
    "Gallery Opening",
    "Cocktail Party",
];

/// The style lens a request is made through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleArchetype {
    Female,
    Male,
    #[serde(rename = "Non-Binary")]
    NonBinary,
}

impl StyleArchetype {
    pub const ALL: [StyleArchetype; 3] = [Self::Female, Self::Male, Self::NonBinary];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::NonBinary => "Non-Binary",
        }
    }
}

impl fmt::Display for StyleArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleArchetype {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "nonbinary" => Ok(Self::NonBinary),
            _ => Err(SessionError::UnknownArchetype(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Occasion,
    StyleArchetype,
    Preferences,
}

/// Values currently typed into the styling form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub occasion: String,
    pub style: Option<StyleArchetype>,
    pub preferences: String,
}

impl FormInput {
    pub fn new(
        occasion: impl Into<String>,
        style: Option<StyleArchetype>,
        preferences: impl Into<String>,
    ) -> Self {
        Self {
            occasion: occasion.into(),
            style,
            preferences: preferences.into(),
        }
    }

    /// Applies a plain text update to one field. A blank archetype unsets it.
    pub fn set(&mut self, field: FormField, value: &str) -> Result<(), SessionError> {
        match field {
            FormField::Occasion => self.occasion = value.to_string(),
            FormField::Preferences => self.preferences = value.to_string(),
            FormField::StyleArchetype => {
                self.style = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
        }
        Ok(())
    }
}
