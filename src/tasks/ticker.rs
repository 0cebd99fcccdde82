use std::time::Duration;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::Tick;

/// Emit a [`Tick`] every `period` until cancelled.
///
/// The cancellation token is the explicit stop the original page-lifetime
/// interval never had; dropping the viewer side also ends the task.
pub async fn run(period: Duration, ticks: Sender<Tick>, cancel: CancellationToken) -> Result<()> {
    info!(period = %humantime::format_duration(period), "ticker started");
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // An interval fires immediately; swallow that so the opening frame holds
    // for a full period before the first advance.
    interval.tick().await;

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting ticker task");
                break;
            }
            _ = interval.tick() => {
                debug!("tick");
                if ticks.send(Tick).await.is_err() {
                    warn!("viewer channel closed; exiting ticker task");
                    break;
                }
            }
        }
    }
    Ok(())
}
