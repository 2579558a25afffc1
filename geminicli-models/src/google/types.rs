//! Gemini API wire types.
//!
//! Request/response bodies for `generateContent`, `streamGenerateContent`,
//! `countTokens` and `embedContent`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// Content
// ============================================================================

/// Content (message) in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create user content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// Create model content.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some("model".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// Create role-less content, as used for system instructions and embeddings.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of all text parts.
    pub fn joined_text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }
}

/// Content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content. `thought` marks reasoning text from thinking models.
    Text {
        /// The text.
        text: String,
        /// Whether this part is model reasoning.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    /// Inline binary data.
    InlineData {
        /// The blob data.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    /// Reference to uploaded file.
    FileData {
        /// The file reference.
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
    /// Function call from model.
    FunctionCall {
        /// The function call.
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    /// Function response to model.
    FunctionResponse {
        /// The function response.
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
    /// A part kind this crate does not model (e.g. `executableCode`),
    /// kept as raw JSON so the rest of the response still parses.
    Other(serde_json::Map<String, JsonValue>),
}

impl Part {
    /// Create text part.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text {
            text: s.into(),
            thought: None,
        }
    }

    /// Create inline data part.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// Create function response part.
    pub fn function_response(name: impl Into<String>, response: JsonValue) -> Self {
        Self::FunctionResponse {
            function_response: FunctionResponse {
                name: name.into(),
                response,
            },
        }
    }

    /// Get non-thought text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text, thought } if *thought != Some(true) => Some(text),
            _ => None,
        }
    }
}

/// Inline binary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// MIME type.
    pub mime_type: String,
    /// Base64-encoded data.
    pub data: String,
}

/// Uploaded file reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// MIME type.
    pub mime_type: String,
    /// File URI.
    pub file_uri: String,
}

/// Function call emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Arguments as JSON.
    #[serde(default)]
    pub args: JsonValue,
}

/// Function result sent back to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    /// Function name.
    pub name: String,
    /// Response payload.
    pub response: JsonValue,
}

// ============================================================================
// Request Types
// ============================================================================

/// Generate content request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Content messages.
    pub contents: Vec<Content>,
    /// System instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Tool definitions, passed through as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<JsonValue>>,
    /// Generation configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    /// Safety settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
}

impl GenerateContentRequest {
    /// Create a new request.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            ..Default::default()
        }
    }

    /// Single-turn user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(vec![Content::user(text)])
    }

    /// Add system instruction.
    #[must_use]
    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::text(instruction));
        self
    }

    /// Add generation config.
    #[must_use]
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// Generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Top-p sampling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Top-k sampling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u64>,
    /// Maximum output tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,
    /// Stop sequences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Response MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Response JSON schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<JsonValue>,
    /// Thinking configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

impl GenerationConfig {
    /// Create empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature.
    #[must_use]
    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens.
    #[must_use]
    pub fn max_tokens(mut self, max: u64) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Request JSON output.
    #[must_use]
    pub fn json_mode(mut self) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self
    }

    /// Set thinking budget.
    #[must_use]
    pub fn with_thinking(mut self, budget: u64) -> Self {
        self.thinking_config = Some(ThinkingConfig {
            thinking_budget: Some(budget),
            include_thoughts: None,
        });
        self
    }
}

/// Thinking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Token budget for thinking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u64>,
    /// Whether thoughts are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_thoughts: Option<bool>,
}

/// Safety setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Harm category.
    pub category: String,
    /// Block threshold.
    pub threshold: String,
}

/// Count tokens request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensRequest {
    /// Contents to count.
    pub contents: Vec<Content>,
}

impl CountTokensRequest {
    /// Create a new request.
    pub fn new(contents: Vec<Content>) -> Self {
        Self { contents }
    }
}

/// Embed content request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedContentRequest {
    /// Content to embed.
    pub content: Content,
    /// Task type, e.g. `RETRIEVAL_DOCUMENT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    /// Optional title for retrieval documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Truncate the embedding to this many dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dimensionality: Option<u32>,
}

impl EmbedContentRequest {
    /// Embed a single text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::text(text),
            task_type: None,
            title: None,
            output_dimensionality: None,
        }
    }

    /// Set the task type.
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Generate content response. Streaming chunks use the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version that served the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Prompt feedback (blocking).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// A response with one model candidate holding `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content::model(text)),
                finish_reason: Some("STOP".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// Text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::joined_text)
    }
}

/// Response candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Finish reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Safety ratings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_ratings: Option<Vec<SafetyRating>>,
    /// Candidate index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Safety rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRating {
    /// Harm category.
    pub category: String,
    /// Probability.
    pub probability: String,
    /// Whether blocked.
    #[serde(default)]
    pub blocked: bool,
}

/// Token usage metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt tokens.
    #[serde(default)]
    pub prompt_token_count: u64,
    /// Candidate tokens.
    #[serde(default)]
    pub candidates_token_count: u64,
    /// Total tokens.
    #[serde(default)]
    pub total_token_count: u64,
    /// Cached content tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_content_token_count: Option<u64>,
    /// Thinking tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts_token_count: Option<u64>,
}

/// Prompt feedback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    /// Safety ratings.
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

/// Count tokens response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensResponse {
    /// Total tokens.
    #[serde(default)]
    pub total_tokens: u64,
    /// Cached content tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_content_token_count: Option<u64>,
}

/// Embed content response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedContentResponse {
    /// The embedding.
    pub embedding: ContentEmbedding,
}

/// Embedding values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEmbedding {
    /// Vector values.
    #[serde(default)]
    pub values: Vec<f32>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Google API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleError {
    /// Error details.
    pub error: GoogleErrorBody,
}

/// Google API error body.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorBody {
    /// Error code.
    pub code: u32,
    /// Error message.
    pub message: String,
    /// Status string, e.g. `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_user() {
        let content = Content::user("Hello!");
        assert_eq!(content.role.as_deref(), Some("user"));
        assert_eq!(content.parts.len(), 1);
    }

    #[test]
    fn test_system_instruction_has_no_role() {
        let request = GenerateContentRequest::prompt("Hi").with_system("Be brief.");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["systemInstruction"],
            serde_json::json!({"parts": [{"text": "Be brief."}]})
        );
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_part_inline_data() {
        let part = Part::inline_data("image/png", "abc123");
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("inlineData"));
        assert!(json.contains("image/png"));
    }

    #[test]
    fn test_thought_parts_are_not_text() {
        let part: Part = serde_json::from_str(r#"{"text": "hmm", "thought": true}"#).unwrap();
        assert_eq!(part.as_text(), None);
        assert_eq!(Part::text("hi").as_text(), Some("hi"));
    }

    #[test]
    fn test_generation_config() {
        let config = GenerationConfig::new()
            .temperature(0.7)
            .max_tokens(1000)
            .json_mode();

        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.max_output_tokens, Some(1000));
        assert_eq!(
            config.response_mime_type,
            Some("application/json".to_string())
        );
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello"}, {"text": " there"}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 10,
                "candidatesTokenCount": 5,
                "totalTokenCount": 15
            }
        }"#;

        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        assert_eq!(resp.text().as_deref(), Some("Hello there"));
        assert_eq!(resp.usage_metadata.as_ref().unwrap().total_token_count, 15);
    }

    #[test]
    fn test_deserialize_function_call() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Let me search."},
                        {"functionCall": {"name": "search", "args": {"q": "rust"}}}
                    ]
                }
            }]
        }"#;

        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let parts = &resp.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[1], Part::FunctionCall { .. }));
    }

    #[test]
    fn test_unknown_parts_do_not_hide_text() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"executableCode": {"language": "PYTHON", "code": "print(1)"}},
                        {"codeExecutionResult": {"outcome": "OUTCOME_OK", "output": "1"}},
                        {"text": "done"}
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(resp.text().as_deref(), Some("done"));
        let parts = &resp.candidates[0].content.as_ref().unwrap().parts;
        match &parts[0] {
            Part::Other(fields) => assert!(fields.contains_key("executableCode")),
            other => panic!("unexpected part: {other:?}"),
        }

        let round_trip = serde_json::to_value(&parts[1]).unwrap();
        assert_eq!(round_trip["codeExecutionResult"]["output"], "1");
    }

    #[test]
    fn test_count_and_embed_shapes() {
        let count: CountTokensResponse = serde_json::from_str(r#"{"totalTokens": 42}"#).unwrap();
        assert_eq!(count.total_tokens, 42);

        let embed: EmbedContentResponse =
            serde_json::from_str(r#"{"embedding": {"values": [0.5, -1.0]}}"#).unwrap();
        assert_eq!(embed.embedding.values, vec![0.5, -1.0]);

        let req = EmbedContentRequest::text("doc").with_task_type("RETRIEVAL_DOCUMENT");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["taskType"], "RETRIEVAL_DOCUMENT");
        assert!(json.get("title").is_none());
    }
}
