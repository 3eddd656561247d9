// profcheck library - terminal client for a remote profanity-check api

pub mod cli;
mod core;
mod error;
mod output;
pub mod tui;

pub use core::{Api, Classification, DEFAULT_BASE_URL, Detection, Language, LlmVerification};
pub use error::Error;
