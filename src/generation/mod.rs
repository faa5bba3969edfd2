pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpGenerator;
pub use provider::{GenerationError, TextGenerator};
pub use types::{ErrorDetail, GenerateRequest, GenerateResponse};
