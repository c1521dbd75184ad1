use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::llm::client::CompletionService;
use crate::llm::prompts::{ADVICE_FOCUS, ADVICE_INSTRUCTION};
use crate::llm::types::CompletionRequest;
use crate::llm::utils::{format_profile, format_transactions};
use crate::schema::{TransactionRecord, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdviceSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// The prompt sent to the completion service for one advice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    prompt: String,
}

impl AdviceRequest {
    pub fn build(transactions: &[TransactionRecord], profile: &UserProfile) -> Self {
        let prompt = format!(
            "{}\n\nTransactions:\n{}\n\nPersonal information:\n{}\n\n{}",
            ADVICE_INSTRUCTION,
            format_transactions(transactions).trim_end(),
            format_profile(profile),
            ADVICE_FOCUS
        );
        Self { prompt }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn to_completion(&self, settings: &AdviceSettings) -> CompletionRequest {
        CompletionRequest::new(self.prompt.clone(), settings.max_tokens)
            .with_temperature(settings.temperature)
    }
}

pub struct AdviceGenerator {
    service: Arc<dyn CompletionService>,
    settings: AdviceSettings,
}

impl AdviceGenerator {
    pub fn new(service: impl CompletionService + 'static) -> Self {
        Self::from_shared(Arc::new(service))
    }

    pub fn from_shared(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            settings: AdviceSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AdviceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.settings.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.settings.temperature = temperature;
        self
    }

    pub fn settings(&self) -> &AdviceSettings {
        &self.settings
    }

    /// Ask the completion service for advice tailored to `profile`.
    ///
    /// Makes exactly one call and never retries. Only the first candidate is
    /// used; a missing or blank first candidate is an
    /// [`AdvisorError::EmptyResponse`] rather than an empty string.
    pub async fn generate(
        &self,
        transactions: &[TransactionRecord],
        profile: &UserProfile,
    ) -> Result<String> {
        let request = AdviceRequest::build(transactions, profile);
        debug!(
            "Requesting advice from {} for {} transactions (prompt {} chars)",
            self.service.name(),
            transactions.len(),
            request.prompt().len()
        );

        let response = self
            .service
            .complete(&request.to_completion(&self.settings))
            .await?;

        let candidates = response.choices.len();
        let text = response
            .primary_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                AdvisorError::EmptyResponse(if candidates == 0 {
                    "no candidates returned".to_string()
                } else {
                    "first candidate has no text".to_string()
                })
            })?;

        info!(
            "Received advice ({} chars, {} candidate(s))",
            text.len(),
            candidates
        );
        Ok(text.to_string())
    }
}
