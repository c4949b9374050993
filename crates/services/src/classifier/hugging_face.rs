use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Prediction, SentimentClassifier};
use crate::error::ClassifierError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub model: String,
    pub api_token: Option<String>,
}

impl ClassifierConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api-inference.huggingface.co";
    pub const DEFAULT_MODEL: &'static str = "nlptown/bert-base-multilingual-uncased-sentiment";

    /// Read `HUMEUR_HF_BASE_URL`, `HUMEUR_HF_MODEL` and `HUMEUR_HF_TOKEN`,
    /// falling back to the public multilingual star-rating model.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env::var("HUMEUR_HF_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let model = env::var("HUMEUR_HF_MODEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.model);
        let api_token = env::var("HUMEUR_HF_TOKEN")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self {
            base_url,
            model,
            api_token,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model.trim_matches('/')
        )
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
            api_token: None,
        }
    }
}

/// Text-classification client for the Hugging Face inference API.
#[derive(Clone)]
pub struct HuggingFaceClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl HuggingFaceClassifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let mut request = self
            .client
            .post(self.config.endpoint())
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ClassifierError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let parsed: InferenceResponse = serde_json::from_slice(&body)?;
        top_prediction(parsed)
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// The API answers `[[{label, score}, ...]]` for a single input, though some
/// deployments drop the outer list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Single(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

fn top_prediction(response: InferenceResponse) -> Result<Prediction, ClassifierError> {
    let candidates = match response {
        InferenceResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        InferenceResponse::Single(candidates) => candidates,
    };

    candidates
        .into_iter()
        .max_by(|left, right| left.score.total_cmp(&right.score))
        .map(|best| Prediction {
            label: best.label,
            score: best.score,
        })
        .ok_or(ClassifierError::EmptyResponse)
}
