//! 服务层模块

pub mod extractor;
mod generation_service;
mod prompt_service;
pub mod validator;

pub use extractor::{extract, GenerationResult, ParseError};
pub use generation_service::{GenerateError, GenerationService};
pub use prompt_service::PromptService;
pub use validator::{validate, GenerationRequest, ValidationError, ValidationReason};
