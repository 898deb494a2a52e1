// Shared types
pub mod types;

// Shared macros
mod macros;

// Modular tools
pub mod batch;
pub mod fallback;
pub mod fetch;
pub mod insertions;
pub mod normalize;
pub mod sequence;
pub mod settings;
pub mod verify;
