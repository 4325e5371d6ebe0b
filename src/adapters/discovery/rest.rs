//! REST adapter for the discovery gateway port.
//!
//! Talks to the deployed discovery backend over its documented JSON API:
//!
//! - `GET  /api/discovery/profiles?userId=..` - fetch a randomised batch
//! - `POST /api/discovery/selection` - submit one trait selection
//! - `POST /api/discovery/complete` - seal the session
//!
//! Bodies are camelCase JSON; an optional API key is sent as a bearer token.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::GatewayConfig;
use crate::domain::discovery::{DiscoveryProfile, TraitQuestion, TraitSelection};
use crate::domain::foundation::{DiscoverySessionId, ProfileId, TraitId, UserId};
use crate::ports::{
    CompletionReceipt, DiscoveryGateway, GatewayError, ProfileBatch, SelectionReceipt,
};

/// REST implementation of the discovery gateway.
#[derive(Debug, Clone)]
pub struct RestDiscoveryGateway {
    config: GatewayConfig,
    traits_per_profile: usize,
    http_client: reqwest::Client,
}

impl RestDiscoveryGateway {
    /// Build a gateway from configuration.
    ///
    /// # Errors
    ///
    /// - `Unreachable` if the HTTP client cannot be constructed
    pub fn new(config: GatewayConfig, traits_per_profile: usize) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        Ok(Self {
            config,
            traits_per_profile,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key.expose_secret()),
            None => request,
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::rejected(format!("{}: {}", status, body)));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::malformed(e.to_string()))
    }
}

#[async_trait]
impl DiscoveryGateway for RestDiscoveryGateway {
    async fn fetch_profiles(&self, user_id: &UserId) -> Result<ProfileBatch, GatewayError> {
        let request = self
            .http_client
            .get(self.url("/api/discovery/profiles"))
            .query(&[("userId", user_id.as_str())]);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        let dto: FetchProfilesResponse = Self::decode(response).await?;

        let session_id = DiscoverySessionId::new(dto.session_id)
            .map_err(|e| GatewayError::malformed(e.to_string()))?;
        let profiles = dto
            .profiles
            .into_iter()
            .map(|p| p.into_domain(self.traits_per_profile))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProfileBatch {
            session_id,
            profiles,
        })
    }

    async fn submit_selection(
        &self,
        session_id: &DiscoverySessionId,
        selection: &TraitSelection,
    ) -> Result<SelectionReceipt, GatewayError> {
        let body = SubmitSelectionRequest::from_selection(session_id, selection);
        let request = self
            .http_client
            .post(self.url("/api/discovery/selection"))
            .json(&body);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        let dto: SubmitSelectionResponse = Self::decode(response).await?;
        Ok(SelectionReceipt {
            accepted: dto.success,
            selections_count: dto.selections_count,
        })
    }

    async fn complete_session(
        &self,
        session_id: &DiscoverySessionId,
        user_id: &UserId,
    ) -> Result<CompletionReceipt, GatewayError> {
        let body = CompleteSessionRequest {
            session_id: session_id.as_str().to_string(),
            user_id: user_id.as_str().to_string(),
        };
        let request = self
            .http_client
            .post(self.url("/api/discovery/complete"))
            .json(&body);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        let dto: CompleteSessionResponse = Self::decode(response).await?;
        Ok(CompletionReceipt {
            accepted: dto.success,
            message: dto.message,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FetchProfilesResponse {
    profiles: Vec<ProfileDto>,
    session_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDto {
    id: String,
    age: u8,
    #[serde(default)]
    program: Option<String>,
    trait_questions: Vec<TraitQuestionDto>,
}

impl ProfileDto {
    fn into_domain(self, expected_traits: usize) -> Result<DiscoveryProfile, GatewayError> {
        let id = ProfileId::new(self.id).map_err(|e| GatewayError::malformed(e.to_string()))?;
        let questions = self
            .trait_questions
            .into_iter()
            .map(|q| q.into_domain())
            .collect::<Result<Vec<_>, _>>()?;
        DiscoveryProfile::new(id, self.age, self.program, questions, expected_traits)
            .map_err(|e| GatewayError::malformed(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraitQuestionDto {
    trait_id: String,
    question: String,
    answer: String,
}

impl TraitQuestionDto {
    fn into_domain(self) -> Result<TraitQuestion, GatewayError> {
        let trait_id =
            TraitId::new(self.trait_id).map_err(|e| GatewayError::malformed(e.to_string()))?;
        TraitQuestion::new(trait_id, self.question, self.answer)
            .map_err(|e| GatewayError::malformed(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitSelectionRequest {
    session_id: String,
    viewer_user_id: String,
    profile_user_id: String,
    selected_trait_ids: Vec<String>,
    all_trait_ids: Vec<String>,
}

impl SubmitSelectionRequest {
    fn from_selection(session_id: &DiscoverySessionId, selection: &TraitSelection) -> Self {
        Self {
            session_id: session_id.as_str().to_string(),
            viewer_user_id: selection.viewer_id().as_str().to_string(),
            profile_user_id: selection.profile_id().as_str().to_string(),
            selected_trait_ids: selection
                .selected_trait_ids()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            all_trait_ids: selection
                .all_trait_ids()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitSelectionResponse {
    success: bool,
    selections_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteSessionRequest {
    session_id: String,
    user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteSessionResponse {
    success: bool,
    message: String,
}
