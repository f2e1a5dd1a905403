use std::time::Duration;

use bankauth_core::SessionStore;
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::Instrument;

/// Runs `sweep_expired` on `sessions` every `every` until the handle is aborted.
///
/// Sweeps go through the store's own lock, so they serialize with open and close.
pub fn spawn_session_sweeper<S>(sessions: S, every: Duration) -> JoinHandle<()>
where
    S: SessionStore + 'static,
{
    let span = tracing::info_span!("session_sweeper", interval_secs = every.as_secs());

    tokio::spawn(
        async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let removed = sessions.sweep_expired().await;
                if removed > 0 {
                    tracing::info!(removed, "Swept expired sessions");
                }
            }
        }
        .instrument(span),
    )
}
