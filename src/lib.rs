pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod summary;

pub use error::{Error, Result};
