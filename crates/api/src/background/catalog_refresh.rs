//! Periodic re-fetch of the catalog.
//!
//! Picks up changes made to the remote store by other clients without
//! waiting for a mutation in this process. Runs on a fixed interval using
//! `tokio::time::interval_at`; the first run happens one period after start.

use std::sync::Arc;
use std::time::Duration;

use gamehub_catalog::Catalog;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Run the refresh loop until `cancel` is triggered.
///
/// Failed fetches are logged by the catalog and leave the mirror untouched;
/// the loop keeps going.
pub async fn run(catalog: Arc<Catalog>, period: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = period.as_secs(), "Catalog refresh job started");

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Catalog refresh job stopping");
                break;
            }
            _ = interval.tick() => {
                match catalog.fetch_all().await {
                    Ok(games) => tracing::debug!(count = games.len(), "Catalog refresh: synced"),
                    Err(_) => tracing::warn!("Catalog refresh: keeping previous entries"),
                }
            }
        }
    }
}
