//! OpenAI Provider Client Implementation

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
    TranscriptionResponse,
};
use crate::config::OpenAIConfig;
use crate::core::audio::{extension_for, mime_for_extension};
use crate::core::providers::{
    AnalysisInput, Analyzer, ProviderError, TranscriptionInput, Transcriber,
};

const PROVIDER: &str = "openai";

/// Client for an OpenAI-compatible API, shared by every request
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl OpenAIClient {
    /// Build the client. A missing credential is allowed here and reported by
    /// [`Transcriber::is_configured`].
    pub fn new(config: &OpenAIConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::network(PROVIDER, e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key().map(str::to_string),
            api_base: config.api_base().to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base, endpoint)
    }

    fn bearer(&self) -> Result<String, ProviderError> {
        self.api_key
            .as_deref()
            .map(|key| format!("Bearer {}", key))
            .ok_or_else(|| ProviderError::authentication(PROVIDER, "API key is not set"))
    }

    /// Body text of a successful response; any other status becomes an API error
    async fn read_body(response: reqwest::Response) -> Result<String, ProviderError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        if !status.is_success() {
            return Err(ProviderError::api(PROVIDER, status.as_u16(), body));
        }

        Ok(body)
    }

    fn transcription_form(
        input: &TranscriptionInput,
        audio: Vec<u8>,
    ) -> Result<Form, ProviderError> {
        let mime = mime_for_extension(&extension_for(Some(&input.filename)));
        let file_part = Part::bytes(audio)
            .file_name(input.filename.clone())
            .mime_str(mime)
            .map_err(|e| ProviderError::network(PROVIDER, format!("Invalid MIME type: {}", e)))?;

        Ok(Form::new()
            .part("file", file_part)
            .text("model", input.model.clone())
            .text("language", input.language.clone())
            .text("response_format", "json"))
    }
}

#[async_trait]
impl Transcriber for OpenAIClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn transcribe(&self, input: &TranscriptionInput) -> Result<String, ProviderError> {
        let authorization = self.bearer()?;
        let audio = tokio::fs::read(&input.path).await?;
        debug!(
            model = %input.model,
            bytes = audio.len(),
            "Sending transcription request"
        );

        let form = Self::transcription_form(input, audio)?;
        let response = self
            .http
            .post(self.url("audio/transcriptions"))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        let body = Self::read_body(response).await?;
        let parsed: TranscriptionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::response_parsing(PROVIDER, e.to_string(), body.clone()))?;

        Ok(parsed.text)
    }
}

#[async_trait]
impl Analyzer for OpenAIClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn analyze(&self, input: &AnalysisInput) -> Result<String, ProviderError> {
        let authorization = self.bearer()?;
        let request = ChatCompletionRequest {
            model: input.model.clone(),
            messages: vec![
                ChatMessage::system(input.system_prompt.clone()),
                ChatMessage::user(input.user_content.clone()),
            ],
            response_format: input.json_object.then(ResponseFormat::json_object),
        };
        debug!(model = %input.model, "Sending analysis request");

        let response = self
            .http
            .post(self.url("chat/completions"))
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER, e))?;

        let body = Self::read_body(response).await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::response_parsing(PROVIDER, e.to_string(), body.clone()))?;

        let Some(choice) = parsed.choices.into_iter().next() else {
            return Err(ProviderError::EmptyOutput {
                provider: PROVIDER,
                raw: body,
            });
        };

        match choice.message.content {
            Some(content) => Ok(content),
            None => Err(ProviderError::EmptyOutput {
                provider: PROVIDER,
                raw: choice.message.refusal.unwrap_or_default(),
            }),
        }
    }
}
