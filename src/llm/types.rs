use serde::{Deserialize, Serialize};

/// A single-prompt request to a text-completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,

    /// Upper bound on the length of the generated response
    pub max_tokens: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: Option<String>,
}

impl CompletionChoice {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Candidate completions in the order the service ranked them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    pub fn single(text: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice::text(text)],
        }
    }

    /// Text of the first candidate, if the service returned one with content.
    pub fn primary_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.text.as_deref())
    }
}

#[cfg(feature = "openai")]
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[cfg(feature = "openai")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(feature = "openai")]
impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

#[cfg(feature = "openai")]
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[cfg(feature = "openai")]
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessage,
}

#[cfg(feature = "openai")]
impl From<ChatCompletionResponse> for CompletionResponse {
    fn from(body: ChatCompletionResponse) -> Self {
        Self {
            choices: body
                .choices
                .into_iter()
                .map(|choice| CompletionChoice {
                    text: choice.message.content,
                })
                .collect(),
        }
    }
}
