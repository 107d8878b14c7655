pub mod client;
pub mod gemini;
pub mod prompt;

pub use client::{RecommendationClient, TextGenerator};
pub use gemini::GeminiBackend;
pub use prompt::build_prompt;
