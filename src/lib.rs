//! # Overload-RS
//!
//! A Rust implementation of the Overload bug-analysis backend: send a block
//! of Python code to a large-language-model and get back a normalized list
//! of structured bug reports.
//!
//! The crate covers the request intake & response normalization pipeline:
//!
//! - **Admission validation**: size, emptiness, Python syntax (tree-sitter),
//!   and a policy denylist of dangerous constructs
//! - **Rate limiting**: per-identity sliding window, atomic check-and-record
//! - **Model call**: Groq chat completions over an OpenAI-compatible API,
//!   with a key pool and a bounded timeout
//! - **Salvage parsing**: tolerant extraction of bug records from free-form
//!   model output, dropping only the records that fail validation
//!
//! HTTP routing, CORS, and liveness pinging belong to the embedding server;
//! [`ServiceError::http_status`] carries the status mapping it should apply
//! (400 for admission rejections, 429 for throttling). Upstream model
//! failures are absorbed and degrade to an empty report, never to an error.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use overload_rs::{AnalysisService, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = AnalysisService::new(Config::from_env()?)?;
//!
//!     let report = service.handle("203.0.113.7", "print('hello')").await?;
//!     for bug in &report.bugs {
//!         println!("[{:?}] {}", bug.severity, bug.description);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::utils::error::{Result, ServiceError};

// Export the analysis pipeline
pub use crate::core::analyzer::AnalysisService;
pub use crate::core::parser::parse_model_output;
pub use crate::core::rate_limiter::{RateLimitDecision, RateLimiter};
pub use crate::core::validator::{ValidationError, validate_code};

// Export provider functionality
pub use crate::core::providers::{ChatProvider, GroqConfig, GroqProvider, ProviderError};

// Export the unified type system
pub use crate::core::types::{
    AnalysisReport, AnalyzeRequest, BugReport, ChatMessage, ChatRequest, ChatResponse,
    MessageRole, Severity,
};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
