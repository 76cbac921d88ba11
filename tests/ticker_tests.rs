use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rworkday::core::ticker::{DEFAULT_REFRESH, LiveTicker};

fn counter() -> (Arc<AtomicU64>, impl FnMut(u64) + Send + 'static) {
    let count = Arc::new(AtomicU64::new(0));
    let c = count.clone();
    (count, move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test(start_paused = true)]
async fn ticks_at_the_refresh_period() {
    let (count, on_tick) = counter();
    let ticker = LiveTicker::start(DEFAULT_REFRESH, on_tick);

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    ticker.cancel();
    let ticks = ticker.join().await;

    assert!((5..=6).contains(&ticks), "{ticks} ticks");
    assert_eq!(count.load(Ordering::SeqCst), ticks);
}

#[tokio::test(start_paused = true)]
async fn nothing_runs_after_cancel() {
    let (count, on_tick) = counter();
    let ticker = LiveTicker::start(Duration::from_millis(50), on_tick);

    tokio::time::sleep(Duration::from_millis(120)).await;
    ticker.cancel();
    assert!(ticker.is_cancelled());
    ticker.join().await;

    let frozen = count.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), frozen);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_ticker() {
    let (count, on_tick) = counter();
    let ticker = LiveTicker::start(Duration::from_millis(50), on_tick);
    let token = ticker.token();

    tokio::time::sleep(Duration::from_millis(60)).await;
    drop(ticker);
    assert!(token.is_cancelled());

    // let the loop observe the cancellation
    tokio::time::sleep(Duration::from_millis(10)).await;
    let frozen = count.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), frozen);
}
