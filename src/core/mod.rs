// core logic - api client and wire types

mod api;
mod types;

pub use api::{Api, DEFAULT_BASE_URL};
pub use types::{Classification, Detection, Language, LlmVerification};
