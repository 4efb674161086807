pub mod prompt;
mod service;

pub use prompt::{MAX_INPUT_CHARS, build_prompt, truncate_input};
pub use service::Summarizer;
