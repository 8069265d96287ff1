use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::PromptError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-20241022";

/// LLM vendors the evaluation prompts are prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    OpenAi,
    Anthropic,
}

impl ModelProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "openai",
            ModelProvider::Anthropic => "anthropic",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "🤖",
            ModelProvider::Anthropic => "🧠",
        }
    }

    /// Models offered for this provider
    pub fn models(&self) -> Vec<ModelOption> {
        match self {
            ModelProvider::OpenAi => openai_models(),
            ModelProvider::Anthropic => anthropic_models(),
        }
    }
}

impl std::fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ModelProvider::OpenAi),
            "anthropic" => Ok(ModelProvider::Anthropic),
            other => Err(PromptError::UnknownProvider(other.to_string())),
        }
    }
}

/// One selectable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub label: String,
    pub value: String,
    pub description: String,
    pub emoji: String,
    pub is_available: bool,
}

/// A provider with its models and default pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub id: ModelProvider,
    pub name: String,
    pub emoji: String,
    pub models: Vec<ModelOption>,
    pub default_model: String,
}

fn model(label: &str, value: &str, description: &str, emoji: &str) -> ModelOption {
    ModelOption {
        label: label.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        emoji: emoji.to_string(),
        is_available: true,
    }
}

pub fn openai_models() -> Vec<ModelOption> {
    vec![
        model(
            "GPT-4.1",
            "gpt-4.1",
            "Successor to GPT-4 Turbo, highly capable flagship model",
            "🚀",
        ),
        model(
            "GPT-4o",
            "gpt-4o",
            "Latest multimodal model with advanced capabilities",
            "⭐",
        ),
        model(
            "GPT-4o mini",
            DEFAULT_OPENAI_MODEL,
            "Fast, cost-effective version of GPT-4o",
            "💡",
        ),
    ]
}

pub fn anthropic_models() -> Vec<ModelOption> {
    vec![
        model(
            "Claude Opus 4",
            "claude-opus-4-20250514",
            "Latest most capable model from Anthropic",
            "✨",
        ),
        model(
            "Claude Sonnet 4",
            "claude-sonnet-4-20250514",
            "Latest balanced model from Anthropic",
            "🏆",
        ),
        model(
            "Claude 3.5 Haiku",
            DEFAULT_ANTHROPIC_MODEL,
            "Latest fast and cost-effective model from Anthropic",
            "💨",
        ),
    ]
}

/// Every provider with its catalog; defaults favour the cheaper models
pub fn model_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            id: ModelProvider::OpenAi,
            name: "OpenAI".to_string(),
            emoji: ModelProvider::OpenAi.icon().to_string(),
            models: openai_models(),
            default_model: DEFAULT_OPENAI_MODEL.to_string(),
        },
        ProviderConfig {
            id: ModelProvider::Anthropic,
            name: "Anthropic Claude".to_string(),
            emoji: ModelProvider::Anthropic.icon().to_string(),
            models: anthropic_models(),
            default_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
        },
    ]
}

/// Human label for a model id, or the id itself when unknown
pub fn format_model_name(model_id: &str) -> String {
    openai_models()
        .into_iter()
        .chain(anthropic_models())
        .find(|model| model.value == model_id)
        .map(|model| model.label)
        .unwrap_or_else(|| model_id.to_string())
}

/// Look up a model within one provider's catalog
pub fn get_model_by_id(provider: ModelProvider, model_id: &str) -> Option<ModelOption> {
    provider
        .models()
        .into_iter()
        .find(|model| model.value == model_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trips_through_str() {
        assert_eq!("openai".parse::<ModelProvider>(), Ok(ModelProvider::OpenAi));
        assert_eq!("anthropic".parse::<ModelProvider>(), Ok(ModelProvider::Anthropic));
        assert_eq!(ModelProvider::OpenAi.to_string(), "openai");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert_eq!(
            "mistral".parse::<ModelProvider>(),
            Err(PromptError::UnknownProvider("mistral".to_string()))
        );
    }

    #[test]
    fn provider_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ModelProvider::OpenAi).unwrap(),
            serde_json::json!("openai")
        );
        assert_eq!(
            serde_json::to_value(ModelProvider::Anthropic).unwrap(),
            serde_json::json!("anthropic")
        );
    }

    #[test]
    fn defaults_are_in_their_catalogs() {
        for provider in model_providers() {
            assert!(provider
                .models
                .iter()
                .any(|model| model.value == provider.default_model));
            assert_eq!(provider.emoji, provider.id.icon());
        }
    }

    #[test]
    fn format_model_name_uses_label() {
        assert_eq!(format_model_name("gpt-4o-mini"), "GPT-4o mini");
        assert_eq!(format_model_name("claude-opus-4-20250514"), "Claude Opus 4");
        assert_eq!(format_model_name("llama-3"), "llama-3");
    }

    #[test]
    fn model_lookup_is_scoped_to_provider() {
        assert!(get_model_by_id(ModelProvider::OpenAi, "gpt-4.1").is_some());
        assert!(get_model_by_id(ModelProvider::Anthropic, "gpt-4.1").is_none());
        assert_eq!(
            get_model_by_id(ModelProvider::Anthropic, DEFAULT_ANTHROPIC_MODEL)
                .map(|model| model.label),
            Some("Claude 3.5 Haiku".to_string())
        );
    }
}
