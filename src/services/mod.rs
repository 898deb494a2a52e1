pub mod cache;
pub mod log;

pub use cache::*;
pub use log::*;
