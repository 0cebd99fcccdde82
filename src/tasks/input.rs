use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::events::Click;

/// Bridge stdin lines to [`Click`] events, standing in for the page's click
/// dispatch: `toggle`/`t` hits the toggle control, `menu`/`m` lands inside
/// the menu container, anything else is an outside click.
pub async fn run(clicks: Sender<Click>, cancel: CancellationToken) -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting input task");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed; exiting input task");
                    break;
                };
                let click = classify(&line);
                debug!(?click, "stdin click");
                if clicks.send(click).await.is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn classify(line: &str) -> Click {
    match line.trim().to_ascii_lowercase().as_str() {
        "toggle" | "t" => Click::Toggle,
        "menu" | "m" => Click::InsideMenu,
        _ => Click::Outside,
    }
}
