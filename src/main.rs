//! Development runner for the discovery flow.
//!
//! Wires the in-memory adapters to the controller and walks one scripted
//! session end to end, logging every transition. Useful for eyeballing the
//! flow while the real backend is not wired up.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use masquerade::adapters::auth::MockIdentityProvider;
use masquerade::adapters::discovery::{sample_profiles, InMemoryDiscoveryGateway};
use masquerade::application::discovery::{AdvanceOutcome, DiscoveryFlow};
use masquerade::config::AppConfig;
use masquerade::domain::catalog::trait_label;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let gateway = Arc::new(InMemoryDiscoveryGateway::with_profiles(sample_profiles()));
    let identity = Arc::new(MockIdentityProvider::signed_in("demo-user"));

    let mut flow = DiscoveryFlow::new(
        gateway.clone(),
        identity,
        config.discovery.clone(),
        config.auth.clone(),
    );

    let phase = flow.initialize().await?;
    tracing::info!("discovery flow initialized, phase: {}", phase);

    loop {
        let Some(profile) = flow.current_profile() else {
            break;
        };
        let picks: Vec<_> = profile
            .trait_ids()
            .into_iter()
            .take(config.discovery.required_selections)
            .collect();
        tracing::info!(
            profile_id = %profile.id(),
            age = profile.age(),
            picks = ?picks.iter().map(|t| trait_label(t.as_str())).collect::<Vec<_>>(),
            "reviewing profile"
        );

        for trait_id in picks {
            flow.toggle_trait(trait_id)?;
        }
        match flow.advance().await? {
            AdvanceOutcome::NextProfile => continue,
            AdvanceOutcome::SessionComplete => break,
        }
    }

    let stats = flow.stats();
    tracing::info!(
        profiles_reviewed = stats.profiles_reviewed,
        traits_selected = stats.traits_selected,
        submissions = gateway.submission_count().await,
        "discovery session finished"
    );

    Ok(())
}
