//! Chat-completions client for profile insights.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Served whenever insight generation fails for any reason.
pub const FALLBACK_INSIGHT: &str = "AI analysis unavailable. Keep coding!";

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Insight provider configuration. An absent API key disables the
/// feature; callers still get the fallback line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// The profile facts the prompt is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDigest {
    pub total_repos: u64,
    pub total_stars: u64,
    pub top_languages: Vec<String>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Generates two-sentence profile takes via a chat-completions API.
pub struct InsightClient {
    config: InsightConfig,
    client: reqwest::Client,
}

impl InsightClient {
    pub fn new(config: InsightConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    fn build_prompt(digest: &StatsDigest) -> String {
        format!(
            "Analyze this GitHub developer: {} repos, {} stars, top languages: {}. \
             Write 2 short punchy sentences about their profile and give one career growth tip.",
            digest.total_repos,
            digest.total_stars,
            digest.top_languages.join(", "),
        )
    }

    /// Produce an insight line for the digest. Never fails; any error
    /// along the way yields [`FALLBACK_INSIGHT`].
    pub async fn generate(&self, digest: &StatsDigest) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("insight provider not configured, serving fallback");
            return FALLBACK_INSIGHT.to_string();
        };

        match self.request(api_key, digest).await {
            Ok(insight) => insight,
            Err(reason) => {
                warn!(reason, "insight generation failed");
                FALLBACK_INSIGHT.to_string()
            }
        }
    }

    async fn request(&self, api_key: &str, digest: &StatsDigest) -> Result<String, String> {
        let prompt = Self::build_prompt(digest);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a helpful technical career coach.",
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("provider returned {}", response.status()));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| e.to_string())?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| "empty choices in provider reply".to_string())
    }
}
