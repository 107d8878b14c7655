pub mod model;
pub mod parser;

pub use model::{sample_recommendation, Alternative, PrimaryOutfit, Recommendation};
pub use parser::parse_recommendation;
