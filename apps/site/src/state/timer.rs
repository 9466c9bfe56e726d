//! # Slideshow Timer
//!
//! Advances the hero slideshow on a fixed interval.
//!
//! The timer is a tokio task that owns a clone of the [`ViewSession`]. It
//! stops when [`SlideshowTimer::cancel`] is called, when the handle is
//! dropped, or when the runtime shuts down. A manual dot jump does not
//! reset the schedule: the next automatic advance still lands on the
//! original cadence.
//!
//! ```text
//!   t=0        t=5s           t=10s          t=15s
//!   │──────────┼──────────────┼──────────────┼────── ...
//!   index 0    tick → 1       tick → 2       tick → 3
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::session::ViewSession;

/// Handle to the running slideshow task.
#[derive(Debug)]
pub struct SlideshowTimer {
    handle: JoinHandle<()>,
}

impl SlideshowTimer {
    /// Spawns the timer. The first advance happens one `period` from now.
    pub fn start(session: ViewSession, period: Duration) -> Self {
        info!(period_ms = period.as_millis() as u64, "Starting slideshow timer");

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let index = session.with_session_mut(|s| s.slideshow.tick());
                debug!(index, "Slideshow advanced");
            }
        });

        SlideshowTimer { handle }
    }

    /// Stops the timer. Later calls are no-ops.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling slideshow timer");
            self.handle.abort();
        }
    }
}

impl Drop for SlideshowTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::ViewState;
    use std::sync::Arc;
    use taproom_core::Catalog;

    const PERIOD: Duration = Duration::from_millis(5000);

    fn session(images: usize) -> ViewSession {
        let images = (0..images).map(|i| format!("hero-{}.jpg", i)).collect();
        ViewSession::new(ViewState::new(Arc::new(Catalog::default()), images).unwrap())
    }

    fn index(session: &ViewSession) -> usize {
        session.with_session(|s| s.slideshow.index())
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_on_each_period() {
        let session = session(7);
        let _timer = SlideshowTimer::start(session.clone(), PERIOD);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(index(&session), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(index(&session), 1);

        tokio::time::sleep(PERIOD * 2).await;
        assert_eq!(index(&session), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wraps_around() {
        let session = session(3);
        let _timer = SlideshowTimer::start(session.clone(), PERIOD);

        tokio::time::sleep(PERIOD * 4 + Duration::from_millis(1)).await;
        assert_eq!(index(&session), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_advancing() {
        let session = session(7);
        let timer = SlideshowTimer::start(session.clone(), PERIOD);

        tokio::time::sleep(PERIOD + Duration::from_millis(1)).await;
        assert_eq!(index(&session), 1);

        timer.cancel();
        timer.cancel();

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(index(&session), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_advancing() {
        let session = session(7);
        let timer = SlideshowTimer::start(session.clone(), PERIOD);
        drop(timer);

        tokio::time::sleep(PERIOD * 2).await;
        assert_eq!(index(&session), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_jump_keeps_cadence() {
        let session = session(7);
        let _timer = SlideshowTimer::start(session.clone(), PERIOD);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        session
            .with_session_mut(|s| s.slideshow.set_index(4))
            .unwrap();

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert_eq!(index(&session), 5);
    }
}
