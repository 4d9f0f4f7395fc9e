//! Scoped auto-advance timer
//!
//! An `AdvanceTimer` is armed for one ticket. Dropping the handle cancels it,
//! so replacing or discarding the handle is all a caller has to do when the
//! active field changes or the view goes away.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::{CancellationToken, DropGuard};

use super::AdvanceTicket;

/// Delay before a display-only field hands over to the next one.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(2000);

pub struct AdvanceTimer {
    ticket: AdvanceTicket,
    delay: Duration,
    token: CancellationToken,
    _guard: DropGuard,
}

impl AdvanceTimer {
    pub fn arm(ticket: AdvanceTicket, delay: Duration) -> Self {
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        tracing::debug!(index = ticket.index(), ?delay, "Auto-advance armed");
        Self {
            ticket,
            delay,
            token,
            _guard: guard,
        }
    }

    pub fn ticket(&self) -> AdvanceTicket {
        self.ticket
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves to the ticket once the delay elapses, or to `None` if the
    /// handle is dropped first. Owns its state, so it can be spawned.
    pub fn elapsed(&self) -> impl Future<Output = Option<AdvanceTicket>> + Send + 'static {
        let token = self.token.clone();
        let ticket = self.ticket;
        let delay = self.delay;
        async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                _ = tokio::time::sleep(delay) => Some(ticket),
            }
        }
    }
}

impl std::fmt::Debug for AdvanceTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvanceTimer")
            .field("ticket", &self.ticket)
            .field("delay", &self.delay)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::FieldSequencer;

    fn ticket() -> AdvanceTicket {
        FieldSequencer::new(2).ticket()
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_delay() {
        let timer = AdvanceTimer::arm(ticket(), AUTO_ADVANCE_DELAY);
        let fired = tokio::spawn(timer.elapsed());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!fired.is_finished());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(fired.await.unwrap(), Some(ticket()));
        drop(timer);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let timer = AdvanceTimer::arm(ticket(), AUTO_ADVANCE_DELAY);
        let fired = tokio::spawn(timer.elapsed());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drop(timer);

        assert_eq!(fired.await.unwrap(), None);
    }
}
