//! Chat-completion agent that analyzes exposures and scores hedge fit.
//!
//! Talks to an OpenAI-compatible completions endpoint. Both entry points
//! degrade to explanatory fallback text instead of failing, so the UI
//! never has to handle an agent outage.

use log::{debug, warn};
use regex::Regex;
use serde_json::{Value, json};

use super::ServiceError;
use crate::domain::types::Market;

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

const SYSTEM_PROMPT: &str = "You are a financial risk analyst expert in hedging strategies. \
                             Provide concise, actionable recommendations.";

const ANALYZE_FALLBACK: &str = "Unable to analyze exposure at this time. Please try again later.";
const SCORE_FALLBACK: &str =
	"Unable to score market fit at this time. Using default score of 0.5.";

/// Connection settings, resolved from build-time environment with public
/// endpoint defaults.
#[derive(Clone, Debug)]
pub struct AgentConfig {
	/// Completions endpoint root.
	pub base_url: String,
	/// Bearer token, when configured.
	pub api_key: Option<String>,
	/// Model identifier to request.
	pub model: String,
}

impl Default for AgentConfig {
	fn default() -> Self {
		Self {
			base_url: option_env!("NVIDIA_BASE_URL")
				.unwrap_or("https://integrate.api.nvidia.com/v1")
				.to_owned(),
			api_key: option_env!("NVIDIA_API_KEY").map(str::to_owned),
			model: option_env!("NVIDIA_MODEL")
				.unwrap_or("qwen/qwen3-next-80b-a3b-thinking")
				.to_owned(),
		}
	}
}

/// Outcome of scoring one market against an exposure.
#[derive(Clone, Debug, PartialEq)]
pub struct FitScore {
	/// Hedge-fit score in [0, 1].
	pub fit: f64,
	/// The agent's full reply, kept as the explanation.
	pub explanation: String,
}

/// Client for the hedging analysis agent.
pub struct AgentService {
	config: AgentConfig,
}

impl AgentService {
	/// Client using the environment-derived configuration.
	pub fn new() -> Self {
		Self::with_config(AgentConfig::default())
	}

	/// Client with explicit settings.
	pub fn with_config(config: AgentConfig) -> Self {
		Self { config }
	}

	/// Free-form hedging analysis of an exposure against the given
	/// markets. Falls back to a fixed notice when the agent is
	/// unreachable.
	pub async fn analyze_exposure(&self, statement: &str, markets: &[Market]) -> String {
		match self.complete(&analysis_prompt(statement, markets), 0.7, 1000).await {
			Ok(text) => text,
			Err(err) => {
				warn!("exposure analysis failed: {err}");
				ANALYZE_FALLBACK.to_owned()
			}
		}
	}

	/// How well one market hedges the exposure, with the agent's
	/// reasoning. Falls back to a neutral 0.5 when the agent is
	/// unreachable.
	pub async fn score_market_fit(&self, exposure: &str, market: &Market) -> FitScore {
		match self.complete(&score_prompt(exposure, market), 0.3, 300).await {
			Ok(content) => FitScore {
				fit: extract_fit_score(&content),
				explanation: content,
			},
			Err(err) => {
				warn!("market fit scoring failed: {err}");
				FitScore {
					fit: 0.5,
					explanation: SCORE_FALLBACK.to_owned(),
				}
			}
		}
	}

	async fn complete(
		&self,
		prompt: &str,
		temperature: f64,
		max_tokens: u32,
	) -> Result<String, ServiceError> {
		let body = chat_request(&self.config.model, prompt, temperature, max_tokens);
		let url = format!("{}/chat/completions", self.config.base_url);
		debug!("requesting chat completion from {url}");
		let response = self.send(&url, &body).await?;
		Ok(response_text(&response)?.to_owned())
	}

	#[cfg(target_arch = "wasm32")]
	async fn send(&self, url: &str, body: &Value) -> Result<Value, ServiceError> {
		use gloo_net::http::Request;

		let transport = |message: String| ServiceError::Transport {
			url: url.to_owned(),
			message,
		};
		let mut request = Request::post(url).header("Content-Type", "application/json");
		if let Some(key) = &self.config.api_key {
			request = request.header("Authorization", &format!("Bearer {key}"));
		}
		let response = request
			.json(body)
			.map_err(|e| transport(e.to_string()))?
			.send()
			.await
			.map_err(|e| transport(e.to_string()))?;
		if !response.ok() {
			return Err(transport(format!("status {}", response.status())));
		}
		response
			.json::<Value>()
			.await
			.map_err(|e| ServiceError::Malformed(e.to_string()))
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn send(&self, url: &str, _body: &Value) -> Result<Value, ServiceError> {
		Err(ServiceError::Transport {
			url: url.to_owned(),
			message: "http client only available in the browser".into(),
		})
	}
}

impl Default for AgentService {
	fn default() -> Self {
		Self::new()
	}
}

fn analysis_prompt(statement: &str, markets: &[Market]) -> String {
	let listing = markets
		.iter()
		.map(|m| format!("- {} ({}): {}", m.title, m.current_price, m.rule_text))
		.collect::<Vec<_>>()
		.join("\n");
	format!(
		"Analyze the following risk exposure and recommend hedging strategies using the \
		 available markets:\n\n\
		 Risk Statement: {statement}\n\n\
		 Available Markets:\n{listing}\n\n\
		 Please provide:\n\
		 1. An analysis of the key risks in the statement\n\
		 2. Recommendations for which markets to use for hedging\n\
		 3. Suggested weights/allocations for each market\n\
		 4. Expected coverage percentage\n\
		 5. Any residual risks that would remain"
	)
}

fn score_prompt(exposure: &str, market: &Market) -> String {
	format!(
		"Score how well this market fits as a hedge for the given exposure:\n\n\
		 Exposure: {exposure}\n\
		 Market: {}\n\
		 Description: {}\n\
		 Current Price: {}\n\n\
		 Please provide:\n\
		 1. A fit score between 0-1 (where 1 is perfect fit)\n\
		 2. A brief explanation of why this score was given",
		market.title, market.rule_text, market.current_price
	)
}

fn chat_request(model: &str, prompt: &str, temperature: f64, max_tokens: u32) -> Value {
	json!({
		"model": model,
		"messages": [
			{ "role": "system", "content": SYSTEM_PROMPT },
			{ "role": "user", "content": prompt },
		],
		"temperature": temperature,
		"max_tokens": max_tokens,
	})
}

fn response_text(response: &Value) -> Result<&str, ServiceError> {
	response["choices"][0]["message"]["content"]
		.as_str()
		.ok_or_else(|| ServiceError::Malformed("missing choices[0].message.content".into()))
}

/// Pulls the first "fit score ..." number out of the agent's reply,
/// clamped to [0, 1]. Replies without one score a neutral 0.5.
fn extract_fit_score(content: &str) -> f64 {
	let Ok(pattern) = Regex::new(r"(?i)fit score.*?(\d+(\.\d+)?)") else {
		return 0.5;
	};
	pattern
		.captures(content)
		.and_then(|caps| caps.get(1))
		.and_then(|m| m.as_str().parse::<f64>().ok())
		.map_or(0.5, |fit| fit.clamp(0.0, 1.0))
}
