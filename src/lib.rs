#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod services;
pub mod tools;
pub mod types;


pub use engine::{validate_page_url, Engine, HttpFetcher, PageFetcher};
pub use error::{LpError, Result};
pub use services::*;
pub use types::*;
