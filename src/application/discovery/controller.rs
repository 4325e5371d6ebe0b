//! DiscoveryFlow - the controller driving one discovery session.
//!
//! Owns the in-memory `DiscoverySession` exclusively and sequences every
//! external call: identity check, batch fetch, per-profile submission, and
//! the final completion signal. All gateway calls are awaited one at a time,
//! so a single session never has two submissions in flight.
//!
//! Submission policy is block-until-acked: a selection is committed locally
//! only after the backend acknowledged it, so the local record never gets
//! ahead of the remote one. A failed call leaves the session exactly where it
//! was; `initialize` and `advance` can be retried.

use std::sync::Arc;

use crate::config::{AuthConfig, DiscoveryConfig};
use crate::domain::discovery::{
    Advance, DiscoveryError, DiscoveryPhase, DiscoveryProfile, DiscoverySession, Toggle,
    TraitSelection,
};
use crate::domain::foundation::{AuthenticatedUser, TraitId};
use crate::ports::{DiscoveryGateway, GatewayError, IdentityProvider};

/// Result of one successful `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The next profile is ready for review.
    NextProfile,
    /// The whole batch is reviewed and the session is sealed.
    SessionComplete,
}

/// Aggregate numbers shown on the completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryStats {
    pub profiles_reviewed: usize,
    pub traits_selected: usize,
}

/// Controller for the blind discovery flow.
pub struct DiscoveryFlow {
    gateway: Arc<dyn DiscoveryGateway>,
    identity: Arc<dyn IdentityProvider>,
    discovery_config: DiscoveryConfig,
    auth_config: AuthConfig,
    session: Option<DiscoverySession>,
    auth_parked: bool,
}

impl DiscoveryFlow {
    /// Create an idle flow; nothing happens until `initialize` is called.
    pub fn new(
        gateway: Arc<dyn DiscoveryGateway>,
        identity: Arc<dyn IdentityProvider>,
        discovery_config: DiscoveryConfig,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            gateway,
            identity,
            discovery_config,
            auth_config,
            session: None,
            auth_parked: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the observable phase of the flow.
    ///
    /// Before a user is resolved there is no session; the flow itself
    /// reports `CheckingAuth` (or `AuthRequired` once parked).
    pub fn phase(&self) -> DiscoveryPhase {
        match &self.session {
            Some(session) => session.phase(),
            None if self.auth_parked => DiscoveryPhase::AuthRequired,
            None => DiscoveryPhase::CheckingAuth,
        }
    }

    /// Returns the owned session, once a user has been resolved.
    pub fn session(&self) -> Option<&DiscoverySession> {
        self.session.as_ref()
    }

    /// Returns the profile currently under review.
    pub fn current_profile(&self) -> Option<&DiscoveryProfile> {
        self.session.as_ref().and_then(|s| s.current_profile())
    }

    /// Returns (reviewed, total) for the progress bar.
    pub fn progress(&self) -> (usize, usize) {
        match &self.session {
            Some(s) => (s.profiles_reviewed(), s.total_profiles()),
            None => (0, 0),
        }
    }

    /// Returns the trait ids picked on the current profile.
    pub fn picked_trait_ids(&self) -> &[TraitId] {
        self.session
            .as_ref()
            .map(|s| s.picked_trait_ids())
            .unwrap_or(&[])
    }

    /// True exactly when the current profile can be confirmed.
    pub fn selection_ready(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.selection_ready())
            .unwrap_or(false)
    }

    /// Returns the completion-screen numbers.
    pub fn stats(&self) -> DiscoveryStats {
        let reviewed = self
            .session
            .as_ref()
            .map(|s| s.profiles_reviewed())
            .unwrap_or(0);
        DiscoveryStats {
            profiles_reviewed: reviewed,
            traits_selected: reviewed * self.discovery_config.required_selections,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify the caller and load the profile batch.
    ///
    /// Without a signed-in campus user the flow parks in `AuthRequired` and
    /// issues **zero** gateway calls. A fetch failure leaves the session in
    /// `Loading`; calling `initialize` again retries the fetch.
    ///
    /// # Errors
    ///
    /// - `GatewayUnavailable` if the identity service or backend failed
    /// - `EmptyBatch` if the backend returned no profiles
    /// - `InvalidPhase` if the flow already moved past loading
    pub async fn initialize(&mut self) -> Result<DiscoveryPhase, DiscoveryError> {
        if self.session.is_none() && !self.auth_parked {
            match self.resolve_user().await? {
                Some(user) => {
                    let mut session = DiscoverySession::new(
                        user.id.clone(),
                        self.discovery_config.required_selections,
                    );
                    if user.is_campus_verified(&self.auth_config.campus_domain) {
                        session.begin_loading()?;
                        self.session = Some(session);
                    } else {
                        tracing::warn!(
                            user_id = %user.id,
                            "signed-in user is not campus-verified"
                        );
                        session.mark_auth_required()?;
                        self.session = Some(session);
                        return Ok(DiscoveryPhase::AuthRequired);
                    }
                }
                None => {
                    tracing::info!("no signed-in user, parking discovery flow");
                    self.auth_parked = true;
                    return Ok(DiscoveryPhase::AuthRequired);
                }
            }
        }

        let session = match self.session.as_mut() {
            Some(session) if session.phase() == DiscoveryPhase::Loading => session,
            Some(session) if session.phase() == DiscoveryPhase::AuthRequired => {
                return Ok(DiscoveryPhase::AuthRequired)
            }
            Some(session) => {
                return Err(DiscoveryError::invalid_phase(format!(
                    "initialize called while {}",
                    session.phase()
                )))
            }
            None => return Ok(DiscoveryPhase::AuthRequired),
        };

        let batch = session_fetch(&*self.gateway, session).await?;
        let mut profiles = batch.profiles;
        if profiles.len() > self.discovery_config.profiles_per_session {
            tracing::debug!(
                served = profiles.len(),
                cap = self.discovery_config.profiles_per_session,
                "capping oversized batch"
            );
            profiles.truncate(self.discovery_config.profiles_per_session);
        }
        session.activate(batch.session_id, profiles)?;
        tracing::info!(
            user_id = %session.user_id(),
            profiles = session.total_profiles(),
            "discovery session active"
        );
        Ok(DiscoveryPhase::Active)
    }

    /// Flip one trait on the current profile's board.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` if the session is not active
    /// - `UnknownTrait` if the trait is not on the current board
    pub fn toggle_trait(&mut self, trait_id: TraitId) -> Result<Toggle, DiscoveryError> {
        let session = self
            .session
            .as_mut()
            .ok_or(DiscoveryError::AuthRequired)?;
        session.toggle_trait(trait_id)
    }

    /// Confirm the current selection and move on.
    ///
    /// Submits the record, and only on acknowledgement commits it and moves
    /// the cursor. After the last profile the completion call runs and the
    /// session seals; if that call fails, `advance` can be retried and will
    /// only repeat the completion step.
    ///
    /// # Errors
    ///
    /// - `SelectionIncomplete` unless exactly the required count is picked
    /// - `Rejected` / `GatewayUnavailable` on backend refusal or failure
    pub async fn advance(&mut self) -> Result<AdvanceOutcome, DiscoveryError> {
        let session = self
            .session
            .as_mut()
            .ok_or(DiscoveryError::AuthRequired)?;

        // A failed completion leaves every profile reviewed but the session
        // unsealed; only the completion step remains to retry.
        if session.phase() == DiscoveryPhase::Active
            && session.total_profiles() > 0
            && session.profiles_reviewed() == session.total_profiles()
        {
            return finalize(&*self.gateway, session).await;
        }

        let selection = session.build_selection()?;
        submit(&*self.gateway, session, &selection).await?;

        match session.commit_selection(selection)? {
            Advance::NextProfile => Ok(AdvanceOutcome::NextProfile),
            Advance::BatchExhausted => finalize(&*self.gateway, session).await,
        }
    }

    async fn resolve_user(&self) -> Result<Option<AuthenticatedUser>, DiscoveryError> {
        match self.identity.current_user().await {
            Ok(user) => Ok(user),
            Err(err) if err.is_transient() => {
                tracing::warn!("identity provider unavailable: {}", err);
                Err(DiscoveryError::gateway_unavailable(err.to_string()))
            }
            Err(err) => {
                tracing::info!("identity session unusable ({}), re-auth needed", err);
                Ok(None)
            }
        }
    }
}

async fn session_fetch(
    gateway: &dyn DiscoveryGateway,
    session: &DiscoverySession,
) -> Result<crate::ports::ProfileBatch, DiscoveryError> {
    gateway
        .fetch_profiles(session.user_id())
        .await
        .map_err(|err| {
            tracing::warn!(user_id = %session.user_id(), "profile fetch failed: {}", err);
            map_gateway_error(err)
        })
}

async fn submit(
    gateway: &dyn DiscoveryGateway,
    session: &DiscoverySession,
    selection: &TraitSelection,
) -> Result<(), DiscoveryError> {
    let session_id = session
        .backend_session_id()
        .ok_or_else(|| DiscoveryError::invalid_phase("no backend session id"))?;

    let receipt = gateway
        .submit_selection(session_id, selection)
        .await
        .map_err(|err| {
            tracing::warn!(profile_id = %selection.profile_id(), "submission failed: {}", err);
            map_gateway_error(err)
        })?;

    if !receipt.accepted {
        return Err(DiscoveryError::rejected("selection was not recorded"));
    }
    tracing::debug!(
        profile_id = %selection.profile_id(),
        selections_count = receipt.selections_count,
        "selection acknowledged"
    );
    Ok(())
}

async fn finalize(
    gateway: &dyn DiscoveryGateway,
    session: &mut DiscoverySession,
) -> Result<AdvanceOutcome, DiscoveryError> {
    let session_id = session
        .backend_session_id()
        .ok_or_else(|| DiscoveryError::invalid_phase("no backend session id"))?
        .clone();

    let receipt = gateway
        .complete_session(&session_id, session.user_id())
        .await
        .map_err(|err| {
            tracing::warn!(user_id = %session.user_id(), "completion failed: {}", err);
            map_gateway_error(err)
        })?;

    if !receipt.accepted {
        return Err(DiscoveryError::rejected(receipt.message));
    }

    session.finish()?;
    tracing::info!(
        user_id = %session.user_id(),
        profiles_reviewed = session.profiles_reviewed(),
        "discovery session complete"
    );
    Ok(AdvanceOutcome::SessionComplete)
}

fn map_gateway_error(err: GatewayError) -> DiscoveryError {
    match err {
        GatewayError::Rejected(msg) => DiscoveryError::rejected(msg),
        GatewayError::Unreachable(msg) | GatewayError::MalformedResponse(msg) => {
            DiscoveryError::gateway_unavailable(msg)
        }
    }
}
