pub mod events;
pub mod renderer;
