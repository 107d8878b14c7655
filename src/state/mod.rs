pub mod session;

pub use session::{Phase, SessionController, SessionState};
