//! Analysis orchestration
//!
//! Composes the admission gates (rate limiter, validator) with the model
//! call and response parsing. Only admission and throttling failures ever
//! surface as errors; a failed, slow, or incoherent model degrades to an
//! empty report.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::Config;
use crate::core::parser::parse_model_output;
use crate::core::prompt;
use crate::core::providers::{ChatProvider, GroqProvider};
use crate::core::rate_limiter::RateLimiter;
use crate::core::types::{AnalysisReport, ChatMessage, ChatRequest};
use crate::core::validator::validate_code;
use crate::utils::error::{Result, ServiceError};

/// Request intake and analysis pipeline
///
/// Owns the rate limiter and the provider handle; validation and parsing
/// are stateless. One instance serves all requests.
pub struct AnalysisService {
    config: Config,
    limiter: Arc<RateLimiter>,
    provider: Arc<dyn ChatProvider>,
}

impl AnalysisService {
    /// Create a service backed by the Groq provider from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let provider = GroqProvider::new(config.groq.clone())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Create a service with an explicit provider (used by tests).
    pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit_rpm));
        Self {
            config,
            limiter,
            provider,
        }
    }

    /// The rate limiter, for wiring the optional background sweep task.
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Full intake pipeline for one request from `identity`.
    ///
    /// Rejects early on throttling (429) and admission failures (400);
    /// everything past validation resolves to a successful report.
    pub async fn handle(&self, identity: &str, code: &str) -> Result<AnalysisReport> {
        let decision = self.limiter.check_and_record(identity);
        if !decision.allowed {
            return Err(ServiceError::RateLimited {
                limit: decision.limit,
            });
        }

        validate_code(code, self.config.max_code_size)?;

        Ok(self.analyze(code).await)
    }

    /// Run the model analysis, assuming admission has already passed.
    ///
    /// Never fails: any provider error, timeout, or unusable response is
    /// logged and mapped to an empty bug list.
    pub async fn analyze(&self, code: &str) -> AnalysisReport {
        let started = Instant::now();

        let request = ChatRequest {
            model: prompt::ANALYSIS_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt::render_user_prompt(code)),
            ],
            temperature: Some(prompt::ANALYSIS_TEMPERATURE),
            max_tokens: Some(prompt::ANALYSIS_MAX_TOKENS),
        };

        let bugs = match self.provider.chat_completion(request).await {
            Ok(response) => match response.first_content() {
                Some(content) => parse_model_output(content),
                None => {
                    warn!("{} returned no choices", self.provider.name());
                    Vec::new()
                }
            },
            Err(err) => {
                warn!("AI analysis failed: {}", err);
                Vec::new()
            }
        };

        let report = AnalysisReport {
            bugs,
            analysis_time: started.elapsed().as_secs_f64(),
        };
        debug!(
            "analysis finished: {} bugs in {:.3}s",
            report.bugs.len(),
            report.analysis_time
        );
        report
    }
}
