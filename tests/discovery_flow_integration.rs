//! End-to-end tests of the discovery flow through the public API,
//! using the in-memory adapters.

use std::sync::Arc;

use masquerade::adapters::auth::MockIdentityProvider;
use masquerade::adapters::discovery::{sample_profiles, InMemoryDiscoveryGateway};
use masquerade::application::discovery::{AdvanceOutcome, DiscoveryFlow};
use masquerade::config::{AuthConfig, DiscoveryConfig};
use masquerade::domain::discovery::{DiscoveryError, DiscoveryPhase, Toggle};
use masquerade::domain::foundation::TraitId;

fn build_flow(
    gateway: Arc<InMemoryDiscoveryGateway>,
    identity: Arc<MockIdentityProvider>,
) -> DiscoveryFlow {
    DiscoveryFlow::new(
        gateway,
        identity,
        DiscoveryConfig::default(),
        AuthConfig::default(),
    )
}

async fn signed_in_flow() -> (DiscoveryFlow, Arc<InMemoryDiscoveryGateway>) {
    let gateway = Arc::new(InMemoryDiscoveryGateway::with_profiles(sample_profiles()));
    let identity = Arc::new(MockIdentityProvider::signed_in("viewer-1"));
    let mut flow = build_flow(gateway.clone(), identity);
    flow.initialize().await.unwrap();
    (flow, gateway)
}

fn first_n_traits(flow: &DiscoveryFlow, n: usize) -> Vec<TraitId> {
    flow.current_profile()
        .expect("a profile is under review")
        .trait_ids()
        .into_iter()
        .take(n)
        .collect()
}

#[tokio::test]
async fn happy_path_reviews_all_eight_profiles() {
    let (mut flow, gateway) = signed_in_flow().await;
    assert_eq!(flow.phase(), DiscoveryPhase::Active);

    for round in 0..8 {
        assert_eq!(flow.progress(), (round, 8));
        for trait_id in first_n_traits(&flow, 2) {
            flow.toggle_trait(trait_id).unwrap();
        }
        let outcome = flow.advance().await.unwrap();
        if round < 7 {
            assert_eq!(outcome, AdvanceOutcome::NextProfile);
        } else {
            assert_eq!(outcome, AdvanceOutcome::SessionComplete);
        }
    }

    assert_eq!(flow.phase(), DiscoveryPhase::Complete);
    assert_eq!(flow.stats().profiles_reviewed, 8);

    // One submission per profile, in review order, then one completion.
    let submissions = gateway.submissions().await;
    assert_eq!(submissions.len(), 8);
    for (i, submission) in submissions.iter().enumerate() {
        assert_eq!(submission.profile_id().as_str(), format!("profile-{}", i + 1));
        assert_eq!(submission.selected_trait_ids().len(), 2);
        assert_eq!(submission.all_trait_ids().len(), 8);
    }
    assert_eq!(gateway.completions().await.len(), 1);

    // Session invariant: selections == profiles exactly at completion.
    let session = flow.session().unwrap();
    assert_eq!(session.selections().len(), session.profiles().len());
    assert!(session.completed_at().is_some());
}

#[tokio::test]
async fn over_selection_leaves_original_picks() {
    let (mut flow, _) = signed_in_flow().await;

    let traits = first_n_traits(&flow, 3);
    assert_eq!(flow.toggle_trait(traits[0].clone()).unwrap(), Toggle::Added);
    assert_eq!(flow.toggle_trait(traits[1].clone()).unwrap(), Toggle::Added);
    assert_eq!(
        flow.toggle_trait(traits[2].clone()).unwrap(),
        Toggle::AtCapacity
    );

    assert_eq!(flow.picked_trait_ids(), &traits[..2]);
    assert!(flow.selection_ready());
}

#[tokio::test]
async fn deselect_then_reselect_permits_advance() {
    let (mut flow, _) = signed_in_flow().await;

    let traits = first_n_traits(&flow, 3);
    let (a, b, c) = (traits[0].clone(), traits[1].clone(), traits[2].clone());

    flow.toggle_trait(a.clone()).unwrap();
    flow.toggle_trait(b.clone()).unwrap();
    assert_eq!(flow.toggle_trait(a).unwrap(), Toggle::Removed);
    assert_eq!(flow.toggle_trait(c.clone()).unwrap(), Toggle::Added);

    assert_eq!(flow.picked_trait_ids(), &[b, c]);
    assert_eq!(flow.advance().await.unwrap(), AdvanceOutcome::NextProfile);
}

#[tokio::test]
async fn advance_refused_until_exact_count() {
    let (mut flow, gateway) = signed_in_flow().await;

    // Zero selected.
    assert!(matches!(
        flow.advance().await,
        Err(DiscoveryError::SelectionIncomplete { selected: 0, required: 2 })
    ));

    // One selected.
    let traits = first_n_traits(&flow, 1);
    flow.toggle_trait(traits[0].clone()).unwrap();
    assert!(matches!(
        flow.advance().await,
        Err(DiscoveryError::SelectionIncomplete { selected: 1, required: 2 })
    ));

    // Refused advances issued no submissions.
    assert_eq!(gateway.submission_count().await, 0);
    assert_eq!(flow.progress(), (0, 8));
}

#[tokio::test]
async fn unauthenticated_entry_issues_no_calls() {
    let gateway = Arc::new(InMemoryDiscoveryGateway::with_profiles(sample_profiles()));
    let identity = Arc::new(MockIdentityProvider::signed_out());
    let mut flow = build_flow(gateway.clone(), identity);

    let phase = flow.initialize().await.unwrap();

    assert_eq!(phase, DiscoveryPhase::AuthRequired);
    assert_eq!(gateway.sessions_served(), 0);
    assert_eq!(gateway.submission_count().await, 0);
    assert!(gateway.completions().await.is_empty());
}

#[tokio::test]
async fn submission_order_is_strict_review_order() {
    let (mut flow, gateway) = signed_in_flow().await;

    for _ in 0..3 {
        for trait_id in first_n_traits(&flow, 2) {
            flow.toggle_trait(trait_id).unwrap();
        }
        flow.advance().await.unwrap();
    }

    let submissions = gateway.submissions().await;
    let ids: Vec<_> = submissions
        .iter()
        .map(|s| s.profile_id().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["profile-1", "profile-2", "profile-3"]);
}

#[tokio::test]
async fn failed_submission_never_diverges_local_from_remote() {
    let (mut flow, gateway) = signed_in_flow().await;

    for trait_id in first_n_traits(&flow, 2) {
        flow.toggle_trait(trait_id).unwrap();
    }
    gateway.fail_submit(true);
    assert!(flow.advance().await.is_err());

    // Remote has nothing; local committed nothing either.
    assert_eq!(gateway.submission_count().await, 0);
    assert_eq!(flow.session().unwrap().selections().len(), 0);

    gateway.fail_submit(false);
    flow.advance().await.unwrap();
    assert_eq!(gateway.submission_count().await, 1);
    assert_eq!(flow.session().unwrap().selections().len(), 1);
}

#[tokio::test]
async fn short_batch_still_completes() {
    let profiles = sample_profiles().into_iter().take(3).collect::<Vec<_>>();
    let gateway = Arc::new(InMemoryDiscoveryGateway::with_profiles(profiles));
    let identity = Arc::new(MockIdentityProvider::signed_in("viewer-1"));
    let mut flow = build_flow(gateway.clone(), identity);
    flow.initialize().await.unwrap();

    assert_eq!(flow.progress(), (0, 3));
    for _ in 0..3 {
        for trait_id in first_n_traits(&flow, 2) {
            flow.toggle_trait(trait_id).unwrap();
        }
        flow.advance().await.unwrap();
    }

    assert_eq!(flow.phase(), DiscoveryPhase::Complete);
    assert_eq!(flow.stats().profiles_reviewed, 3);
}
