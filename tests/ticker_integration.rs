use std::time::Duration;

use marquee::events::Tick;
use marquee::tasks::ticker;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ticker_emits_ticks_until_cancelled() {
    let (tick_tx, mut tick_rx) = mpsc::channel::<Tick>(8);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(ticker::run(
        Duration::from_millis(20),
        tick_tx,
        cancel.clone(),
    ));

    for _ in 0..3 {
        tokio::time::timeout(Duration::from_secs(2), tick_rx.recv())
            .await
            .expect("timeout waiting for tick")
            .expect("ticker channel closed early");
    }

    cancel.cancel();
    handle.await.expect("ticker task panicked").unwrap();

    // Drain whatever was in flight; the channel must then report closed.
    while let Ok(Some(Tick)) =
        tokio::time::timeout(Duration::from_millis(200), tick_rx.recv()).await
    {}
    assert!(tick_rx.recv().await.is_none(), "ticker should stop on cancel");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ticker_stops_when_receiver_is_dropped() {
    let (tick_tx, tick_rx) = mpsc::channel::<Tick>(1);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(ticker::run(
        Duration::from_millis(10),
        tick_tx,
        cancel.clone(),
    ));
    drop(tick_rx);

    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("ticker should exit once its peer is gone")
        .expect("ticker task panicked")
        .unwrap();
}
