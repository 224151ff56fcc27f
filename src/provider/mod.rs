//! LLM provider selection and the chat capability consumed by the router.
//!
//! Four providers are supported, each authenticating through its own
//! environment variable. Model aliases map to concrete model identifiers
//! through the fixed [`MODEL_CATALOG`].

mod error;

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(test)]
mod tests;

pub use error::ProviderError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockChat;

use async_trait::async_trait;
use genai::adapter::AdapterKind;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};
use tracing::{debug, error};

/// OpenAI-compatible endpoint used for Together-hosted models.
const TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1/";

/// The fixed set of upstream LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    TogetherAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::TogetherAi => "togetherai",
        }
    }

    /// Environment variable holding this provider's API credential.
    pub fn credential_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GEMINI_API_KEY",
            Provider::TogetherAi => "TOGETHER_API_KEY",
        }
    }

    /// Returns `true` if the credential variable is set and non-empty.
    pub fn credential_present(&self) -> bool {
        std::env::var_os(self.credential_env()).is_some_and(|v| !v.is_empty())
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry: short alias plus the provider and concrete model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    pub alias: &'static str,
    pub provider: Provider,
    pub model_id: &'static str,
}

/// The full fixed set of models evaluated per run, in evaluation order.
pub const MODEL_CATALOG: &[ModelSpec] = &[
    ModelSpec {
        alias: "gpt4omini",
        provider: Provider::OpenAi,
        model_id: "gpt-4o-mini",
    },
    ModelSpec {
        alias: "gpt35turbo",
        provider: Provider::OpenAi,
        model_id: "gpt-3.5-turbo",
    },
    ModelSpec {
        alias: "gpt5nano",
        provider: Provider::OpenAi,
        model_id: "gpt-5-nano",
    },
    ModelSpec {
        alias: "claudehaiku",
        provider: Provider::Anthropic,
        model_id: "claude-haiku-4-5-20251001",
    },
    ModelSpec {
        alias: "claudesonnet",
        provider: Provider::Anthropic,
        model_id: "claude-sonnet-4-5-20250929",
    },
    ModelSpec {
        alias: "geminiflash",
        provider: Provider::Google,
        model_id: "gemini-2.5-flash",
    },
    ModelSpec {
        alias: "geminiflashlite",
        provider: Provider::Google,
        model_id: "gemini-2.5-flash-lite",
    },
    ModelSpec {
        alias: "llama318b",
        provider: Provider::TogetherAi,
        model_id: "meta-llama/Meta-Llama-3.1-8B-Instruct-Turbo",
    },
    ModelSpec {
        alias: "llama4",
        provider: Provider::TogetherAi,
        model_id: "meta-llama/Llama-4-Maverick-17B-128E-Instruct-FP8",
    },
    ModelSpec {
        alias: "deepseekv31",
        provider: Provider::TogetherAi,
        model_id: "deepseek-ai/DeepSeek-V3.1",
    },
    ModelSpec {
        alias: "mistralai",
        provider: Provider::TogetherAi,
        model_id: "mistralai/Mixtral-8x7B-Instruct-v0.1",
    },
];

/// Looks up a catalog entry by alias.
pub fn find_model(alias: &str) -> Result<&'static ModelSpec, ProviderError> {
    MODEL_CATALOG
        .iter()
        .find(|spec| spec.alias == alias)
        .ok_or_else(|| ProviderError::UnknownAlias {
            alias: alias.to_string(),
        })
}

/// The single chat capability the router consumes: one prompt in, one
/// generated text out.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// Production [`ChatBackend`] over a [`genai::Client`].
///
/// Sampling is pinned to temperature 0 so classification labels stay
/// deterministic across repeated runs.
pub struct GenaiChat {
    client: Client,
    model: String,
    options: ChatOptions,
}

impl GenaiChat {
    /// Builds a backend for a catalog entry.
    ///
    /// OpenAI, Anthropic and Google models resolve natively from the model
    /// id; Together-hosted models are routed through the OpenAI-compatible
    /// adapter at [`TOGETHER_BASE_URL`].
    pub fn new(spec: &ModelSpec) -> Self {
        let client = match spec.provider {
            Provider::TogetherAi => together_client(),
            _ => Client::default(),
        };

        Self {
            client,
            model: spec.model_id.to_string(),
            options: ChatOptions::default().with_temperature(0.0),
        }
    }
}

impl std::fmt::Debug for GenaiChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiChat").field("model", &self.model).finish()
    }
}

#[async_trait]
impl ChatBackend for GenaiChat {
    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(user),
        ]);

        debug!(model = %self.model, user_len = user.len(), "Sending chat request");

        let response = self
            .client
            .exec_chat(&self.model, request, Some(&self.options))
            .await
            .map_err(|e| {
                error!(model = %self.model, "Provider error: {}", e);
                ProviderError::RequestFailed {
                    model: self.model.clone(),
                    reason: e.to_string(),
                }
            })?;

        let text = response
            .first_text()
            .ok_or_else(|| ProviderError::EmptyResponse {
                model: self.model.clone(),
            })?;

        Ok(text.to_string())
    }
}

/// genai has no native Together adapter; resolve every model through the
/// OpenAI-compatible endpoint with the Together credential instead.
fn together_client() -> Client {
    let resolver = ServiceTargetResolver::from_resolver_fn(
        |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
            let ServiceTarget { model, .. } = target;
            Ok(ServiceTarget {
                endpoint: Endpoint::from_static(TOGETHER_BASE_URL),
                auth: AuthData::from_env("TOGETHER_API_KEY"),
                model: ModelIden::new(AdapterKind::OpenAI, model.model_name),
            })
        },
    );

    Client::builder()
        .with_service_target_resolver(resolver)
        .build()
}
