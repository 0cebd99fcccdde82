use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::carousel::{Advance, Carousel};
use crate::events::{Click, Tick};
use crate::menu::Menu;
use crate::surface::Surface;

/// Own the carousel and menu state machines and drive `surface` from tick and
/// click streams until cancelled.
///
/// Either component may be absent: a disabled carousel ignores ticks, an
/// unbound menu ignores clicks. The surface is handed back on shutdown so
/// callers (notably tests) can inspect what was drawn.
pub async fn run<S>(
    mut carousel: Option<Carousel>,
    mut menu: Option<Menu>,
    mut surface: S,
    mut ticks: Receiver<Tick>,
    mut clicks: Receiver<Click>,
    cancel: CancellationToken,
) -> Result<S>
where
    S: Surface + Send,
{
    if let Some(carousel) = &carousel {
        carousel.initial_render(&mut surface);
        info!(
            slides = carousel.slide_count(),
            cursor = carousel.cursor(),
            "initial frame rendered"
        );
    }

    loop {
        select! {
            _ = cancel.cancelled() => {
                info!("cancel received; exiting viewer task");
                break;
            }

            Some(Tick) = ticks.recv() => {
                if let Some(carousel) = carousel.as_mut() {
                    match carousel.advance(&mut surface) {
                        Advance::Stepped { cursor } => debug!(cursor, "advanced"),
                        Advance::Wrapped => debug!("silent reset across the loop seam"),
                    }
                }
            }

            Some(click) = clicks.recv() => {
                if let Some(menu) = menu.as_mut() {
                    menu.dispatch(click);
                    info!(?click, visible = menu.is_visible(), "click dispatched");
                }
            }
        }
    }

    Ok(surface)
}
