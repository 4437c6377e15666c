use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Countdown toward arrival, decremented once per minute while the status
/// view is open. Floors at 0 and never goes negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    eta_minutes: u32,
    time_remaining: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Dispatched,
    EnRoute,
    Arriving,
}

impl Phase {
    pub fn name(&self) -> String {
        match self {
            Self::Dispatched => "dispatched".into(),
            Self::EnRoute => "en_route".into(),
            Self::Arriving => "arriving".into(),
        }
    }
}

impl Countdown {
    pub fn new(eta_minutes: u32) -> Self {
        Self {
            eta_minutes,
            time_remaining: eta_minutes,
        }
    }

    /// Advances the countdown by one minute. Returns false once the floor is
    /// reached and the tick had no effect.
    pub fn tick(&mut self) -> bool {
        if self.time_remaining == 0 {
            return false;
        }

        self.time_remaining -= 1;
        true
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Arriving at 0, EnRoute once half the original ETA has elapsed,
    /// Dispatched before that.
    pub fn phase(&self) -> Phase {
        if self.time_remaining == 0 {
            Phase::Arriving
        } else if 2 * self.time_remaining <= self.eta_minutes {
            Phase::EnRoute
        } else {
            Phase::Dispatched
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            time_remaining: self.time_remaining,
            phase: self.phase(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub time_remaining: u32,
    pub phase: Phase,
}

/// Drives a [`Countdown`] from a background tick task. Owned by the engine
/// only while the status view is open; dropping it stops the task before any
/// further tick can run.
pub struct StatusTracker {
    state: Arc<Mutex<Countdown>>,
    close: async_channel::Sender<()>,
    handle: JoinHandle<()>,
}

impl StatusTracker {
    #[tracing::instrument]
    pub fn start(eta_minutes: u32) -> Self {
        let state = Arc::new(Mutex::new(Countdown::new(eta_minutes)));
        let (close, closed) = async_channel::bounded::<()>(1);

        let tick_state = state.clone();
        let handle = tokio::spawn(async move {
            let mut ticks = time::interval_at(time::Instant::now() + TICK_INTERVAL, TICK_INTERVAL);

            loop {
                tokio::select! {
                    biased;

                    _ = closed.recv() => break,
                    _ = ticks.tick() => {
                        if !tick_state.lock().await.tick() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            state,
            close,
            handle,
        }
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        self.state.lock().await.snapshot()
    }
}

impl Drop for StatusTracker {
    fn drop(&mut self) {
        self.close.close();
        self.handle.abort();
    }
}
