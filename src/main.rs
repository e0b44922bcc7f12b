use std::sync::Arc;

use tracing::info;
use tracing::level_filters::LevelFilter;

use stablewallet_core::models::chain::NetworkMode;
use stablewallet_core::models::preferences::{ExpertiseLevel, Region, UserPreferences};
use stablewallet_core::handlers::console::ConsoleEventHandler;
use stablewallet_core::providers::identity::DemoIdentityProvider;
use stablewallet_core::providers::registry::StaticChainRegistry;
use stablewallet_core::providers::static_fetcher::StaticBalanceFetcher;
use stablewallet_core::storage::preference_store::PreferenceStore;
use stablewallet_core::store::balance_store::BalanceStore;
use stablewallet_core::utils::helper::format_usd;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let data_dir = std::env::var("STABLEWALLET_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string());
        let network = std::env::var("STABLEWALLET_NETWORK")
            .map(|s| NetworkMode::from_env_str(&s))
            .unwrap_or_default();

        info!("Initializing balance store (network: {})", network);

        let mut store = BalanceStore::new(
            Arc::new(DemoIdentityProvider::new()),
            Arc::new(StaticBalanceFetcher::new()),
            Arc::new(StaticChainRegistry::new()),
        );
        store.add_event_handler(Arc::new(ConsoleEventHandler::new()));
        store.set_network_mode(network).await?;
        let store = Arc::new(store);

        // Connect and load this user's stored preferences
        let session = store.connect().await?;
        let address = session.address.clone().unwrap_or_default();

        let prefs_store = PreferenceStore::open(&data_dir)?;
        let prefs = match prefs_store.get(&address) {
            Some(prefs) => prefs,
            None => {
                let prefs = UserPreferences::derive(ExpertiseLevel::Easy, Region::Us, &address);
                prefs_store.set(&address, prefs.clone())?;
                prefs
            }
        };
        info!(
            "Preferences: {} on {} ({:?} mode)",
            prefs.default_token, prefs.default_chain, prefs.expertise
        );

        // Preview a consolidation of two chains, then run it
        let selected = ["arbitrum", "optimism"];
        let totals = store.selection_totals(&selected).await;
        info!(
            "Selected {} chains holding {}",
            totals.chains,
            format_usd(totals.usd_value)
        );

        let applied = store.move_all_to(&selected, &prefs.default_chain).await?;
        info!("Applied {} transfers", applied.len());

        let snapshot = store.snapshot().await;
        info!("Total across chains: {}", format_usd(snapshot.total_usd));

        store.disconnect().await?;
        Ok(())
    })
}
