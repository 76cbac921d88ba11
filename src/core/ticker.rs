//! Periodic refresh of the live elapsed-time display.
//!
//! The ticker runs on the tokio runtime and calls back at a fixed period
//! until its handle is cancelled or dropped. Nothing keeps ticking once the
//! view that started it is gone.

use std::time::Duration;

use tokio::select;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

pub const DEFAULT_REFRESH: Duration = Duration::from_millis(200);

pub struct LiveTicker;

impl LiveTicker {
    /// Spawn the tick loop. `on_tick` gets the zero-based tick number; the
    /// first call happens immediately. Must be called inside a runtime.
    pub fn start<F>(period: Duration, mut on_tick: F) -> TickerHandle
    where
        F: FnMut(u64) + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();

        let task = tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let mut ticks = 0u64;
            loop {
                select! {
                    _ = child.cancelled() => break,
                    _ = timer.tick() => {
                        trace!("tick {ticks}");
                        on_tick(ticks);
                        ticks += 1;
                    }
                }
            }

            debug!("ticker stopped after {ticks} tick(s)");
            ticks
        });

        TickerHandle {
            token,
            task: Some(task),
        }
    }
}

/// Owner of a running ticker. Dropping it stops the loop.
pub struct TickerHandle {
    token: CancellationToken,
    task: Option<JoinHandle<u64>>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token that stops the ticker when cancelled, e.g. from a signal
    /// listener.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Wait for the loop to finish and return how many ticks ran. Does not
    /// cancel by itself.
    pub async fn join(mut self) -> u64 {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Cancel `token` on Ctrl-C.
pub async fn cancel_on_ctrl_c(token: CancellationToken) {
    select! {
        _ = tokio::signal::ctrl_c() => token.cancel(),
        _ = token.cancelled() => {}
    }
}
