//! Domain and wire types
//!
//! Request/response shapes for the inbound analysis surface and the
//! outbound chat-completion call.

pub mod requests;
pub mod responses;

pub use requests::{AnalyzeRequest, ChatMessage, ChatRequest, MessageRole};
pub use responses::{AnalysisReport, BugReport, ChatResponse, Choice, Severity, Usage};
