use super::prompt::build_prompt;
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, LlmClient, OpenAiClient},
};
use tracing::{debug, info};

/// Turns permit text into a plain-language summary with one upstream call.
///
/// Holds only read-only state, so a single instance is shared by every
/// request.
pub struct Summarizer {
    llm_client: Box<dyn LlmClient>,
    credential_configured: bool,
}

impl Summarizer {
    pub fn new(llm_config: LlmConfig) -> Result<Self> {
        info!(
            "Initializing summarizer with model {} at {}",
            llm_config.model, llm_config.base_url
        );

        let credential_configured = llm_config.has_api_key();
        let llm_client = Box::new(OpenAiClient::new(llm_config)?);

        Ok(Self {
            llm_client,
            credential_configured,
        })
    }

    pub fn with_client(llm_client: Box<dyn LlmClient>, credential_configured: bool) -> Self {
        Self {
            llm_client,
            credential_configured,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credential_configured
    }

    /// Validates `text`, calls the provider and returns the trimmed summary.
    ///
    /// The credential is checked before the input so a misconfigured server
    /// fails the same way for every request.
    pub async fn summarize(&self, text: Option<&str>) -> Result<String> {
        if !self.credential_configured {
            return Err(Error::MissingApiKey);
        }

        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::invalid_input("text is missing or blank"))?;

        let prompt = build_prompt(text);
        debug!(
            "Built prompt of {} chars from {} chars of input",
            prompt.chars().count(),
            text.chars().count()
        );

        let request = ChatCompletionRequest::new(prompt);

        let response = self.llm_client.create_chat_completion(request).await?;

        response
            .first_content()
            .map(str::trim)
            .filter(|summary| !summary.is_empty())
            .map(str::to_string)
            .ok_or(Error::EmptySummary)
    }
}
