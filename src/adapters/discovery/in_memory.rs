//! In-memory discovery gateway adapter.
//!
//! Serves seeded profile batches and records submissions in memory.
//! Useful for testing and development; failure injection covers the
//! error paths of the flow.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::discovery::{DiscoveryProfile, TraitSelection};
use crate::domain::foundation::{DiscoverySessionId, UserId};
use crate::ports::{
    CompletionReceipt, DiscoveryGateway, GatewayError, ProfileBatch, SelectionReceipt,
};

/// In-memory implementation of the discovery gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscoveryGateway {
    profiles: Arc<RwLock<Vec<DiscoveryProfile>>>,
    submissions: Arc<RwLock<Vec<TraitSelection>>>,
    completions: Arc<RwLock<Vec<(DiscoverySessionId, UserId)>>>,
    sessions_served: Arc<AtomicU64>,
    fail_fetch: Arc<AtomicBool>,
    fail_submit: Arc<AtomicBool>,
    fail_complete: Arc<AtomicBool>,
}

impl InMemoryDiscoveryGateway {
    /// Creates an empty gateway; fetches fail until profiles are seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that serves the given batch.
    pub fn with_profiles(profiles: Vec<DiscoveryProfile>) -> Self {
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
            ..Self::default()
        }
    }

    /// Replaces the seeded batch at runtime.
    pub async fn seed_profiles(&self, profiles: Vec<DiscoveryProfile>) {
        *self.profiles.write().await = profiles;
    }

    /// Makes `fetch_profiles` fail until cleared.
    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    /// Makes `submit_selection` fail until cleared.
    pub fn fail_submit(&self, fail: bool) {
        self.fail_submit.store(fail, Ordering::SeqCst);
    }

    /// Makes `complete_session` fail until cleared.
    pub fn fail_complete(&self, fail: bool) {
        self.fail_complete.store(fail, Ordering::SeqCst);
    }

    /// Returns every selection submitted so far, in arrival order.
    pub async fn submissions(&self) -> Vec<TraitSelection> {
        self.submissions.read().await.clone()
    }

    /// Returns the number of selections submitted so far.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }

    /// Returns the completed (session, user) pairs.
    pub async fn completions(&self) -> Vec<(DiscoverySessionId, UserId)> {
        self.completions.read().await.clone()
    }

    /// Returns how many batches have been served.
    pub fn sessions_served(&self) -> u64 {
        self.sessions_served.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscoveryGateway for InMemoryDiscoveryGateway {
    async fn fetch_profiles(&self, user_id: &UserId) -> Result<ProfileBatch, GatewayError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(GatewayError::unreachable("injected fetch failure"));
        }

        let profiles = self.profiles.read().await.clone();
        let serial = self.sessions_served.fetch_add(1, Ordering::SeqCst) + 1;
        let session_id = DiscoverySessionId::new(format!("mem-{}-{}", user_id, serial))
            .map_err(|e| GatewayError::malformed(e.to_string()))?;

        Ok(ProfileBatch {
            session_id,
            profiles,
        })
    }

    async fn submit_selection(
        &self,
        _session_id: &DiscoverySessionId,
        selection: &TraitSelection,
    ) -> Result<SelectionReceipt, GatewayError> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(GatewayError::unreachable("injected submit failure"));
        }

        let mut submissions = self.submissions.write().await;
        submissions.push(selection.clone());
        Ok(SelectionReceipt {
            accepted: true,
            selections_count: submissions.len() as u32,
        })
    }

    async fn complete_session(
        &self,
        session_id: &DiscoverySessionId,
        user_id: &UserId,
    ) -> Result<CompletionReceipt, GatewayError> {
        if self.fail_complete.load(Ordering::SeqCst) {
            return Err(GatewayError::unreachable("injected completion failure"));
        }

        self.completions
            .write()
            .await
            .push((session_id.clone(), user_id.clone()));
        Ok(CompletionReceipt {
            accepted: true,
            message: "Discovery session completed".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::discovery::sample_profiles;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn fetch_serves_seeded_profiles() {
        let gateway = InMemoryDiscoveryGateway::new();
        gateway.seed_profiles(sample_profiles()).await;

        let batch = gateway.fetch_profiles(&user()).await.unwrap();
        assert_eq!(batch.profiles.len(), 8);
        assert_eq!(gateway.sessions_served(), 1);
    }

    #[tokio::test]
    async fn fetch_issues_distinct_session_ids() {
        let gateway = InMemoryDiscoveryGateway::new();
        gateway.seed_profiles(sample_profiles()).await;

        let first = gateway.fetch_profiles(&user()).await.unwrap();
        let second = gateway.fetch_profiles(&user()).await.unwrap();
        assert_ne!(first.session_id, second.session_id);
    }

    #[tokio::test]
    async fn injected_fetch_failure_surfaces() {
        let gateway = InMemoryDiscoveryGateway::new();
        gateway.fail_fetch(true);

        let result = gateway.fetch_profiles(&user()).await;
        assert!(matches!(result, Err(GatewayError::Unreachable(_))));

        gateway.fail_fetch(false);
        assert!(gateway.fetch_profiles(&user()).await.is_ok());
    }

    #[tokio::test]
    async fn submissions_accumulate_in_order() {
        let gateway = InMemoryDiscoveryGateway::new();
        gateway.seed_profiles(sample_profiles()).await;
        let batch = gateway.fetch_profiles(&user()).await.unwrap();

        for profile in batch.profiles.iter().take(2) {
            let picks = profile.trait_ids().into_iter().take(2).collect();
            let selection = TraitSelection::new(user(), profile, picks, 2).unwrap();
            let receipt = gateway
                .submit_selection(&batch.session_id, &selection)
                .await
                .unwrap();
            assert!(receipt.accepted);
        }

        assert_eq!(gateway.submission_count().await, 2);
        let submissions = gateway.submissions().await;
        assert_eq!(submissions[0].profile_id(), batch.profiles[0].id());
        assert_eq!(submissions[1].profile_id(), batch.profiles[1].id());
    }

    #[tokio::test]
    async fn completion_is_recorded() {
        let gateway = InMemoryDiscoveryGateway::new();
        let session_id = DiscoverySessionId::new("mem-1").unwrap();

        let receipt = gateway.complete_session(&session_id, &user()).await.unwrap();
        assert!(receipt.accepted);
        assert_eq!(gateway.completions().await.len(), 1);
    }
}
