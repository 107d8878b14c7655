use crate::error::StylistError;
use crate::form::FormInput;
use crate::llm::gemini::GeminiBackend;
use crate::llm::prompt::build_prompt;
use crate::outfit::sample_recommendation;

/// One-shot text generation. Implemented by the Gemini backend and by test
/// doubles.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, StylistError>;
}

/// Produces the raw reply text for a validated request, either from a
/// configured backend or from the built-in sample.
pub struct RecommendationClient {
    backend: Option<Box<dyn TextGenerator>>,
}

impl RecommendationClient {
    pub fn offline() -> Self {
        Self { backend: None }
    }

    pub fn with_backend(backend: impl TextGenerator + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    /// Gemini when a non-blank key is given, offline otherwise.
    pub fn from_api_key(api_key: Option<&str>) -> Self {
        match api_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => Self::with_backend(GeminiBackend::new(key)),
            None => Self::offline(),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.backend.is_none()
    }

    pub fn fetch(&self, form: &FormInput) -> Result<String, StylistError> {
        let Some(backend) = &self.backend else {
            tracing::info!("no generation backend configured, serving sample look");
            return serde_json::to_string(&sample_recommendation())
                .map_err(|e| StylistError::parse(format!("cannot encode sample look: {e}")));
        };

        let style = form
            .style
            .ok_or_else(|| StylistError::transport("style archetype is not set"))?;
        let prompt = build_prompt(&form.occasion, style, &form.preferences);
        backend.generate(&prompt)
    }
}
