pub mod model;
pub mod validator;

pub use model::{FormField, FormInput, StyleArchetype, SUGGESTED_OCCASIONS};
pub use validator::{FieldError, FormErrors};
