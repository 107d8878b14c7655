//! FashionMate: turns an occasion, a style archetype and optional
//! preferences into a structured outfit recommendation.
//!
//! The pipeline is validate → prompt → generate → parse, driven by a
//! [`state::SessionController`]. Without a Gemini key every request is
//! answered by a fixed sample look.

pub mod config;
pub mod error;
pub mod form;
pub mod llm;
pub mod orchestrator;
pub mod outfit;
pub mod state;
pub mod term;
