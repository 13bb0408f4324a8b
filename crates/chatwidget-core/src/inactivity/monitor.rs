use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use super::task::ScheduledTask;

/// Which action an armed timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Warn,
    Terminate,
}

/// Identifies one arming of the monitor.
///
/// Re-arming or cancelling bumps the generation, so tickets handed to
/// earlier timers no longer [`claim`](InactivityMonitor::claim).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: TimerKind,
    generation: u64,
}

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    task: ScheduledTask,
}

/// Holds at most one pending warn/terminate action.
#[derive(Debug)]
pub struct InactivityMonitor {
    warn_after: Duration,
    terminate_after: Duration,
    generation: u64,
    pending: Option<Pending>,
}

impl InactivityMonitor {
    pub fn new(warn_after: Duration, terminate_after: Duration) -> Self {
        Self {
            warn_after,
            terminate_after,
            generation: 0,
            pending: None,
        }
    }

    pub fn warn_after(&self) -> Duration {
        self.warn_after
    }

    pub fn terminate_after(&self) -> Duration {
        self.terminate_after
    }

    /// Cancel whatever is pending and arm a warning after `warn_after`.
    ///
    /// `on_fire` builds the future to run when the timer expires; it receives
    /// the ticket it must claim before acting.
    pub fn reset_on_activity<F, Fut>(&mut self, on_fire: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.arm(TimerKind::Warn, self.warn_after, on_fire)
    }

    /// Cancel whatever is pending and arm termination after `terminate_after`.
    pub fn schedule_termination<F, Fut>(&mut self, on_fire: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.arm(TimerKind::Terminate, self.terminate_after, on_fire)
    }

    fn arm<F, Fut>(&mut self, kind: TimerKind, delay: Duration, on_fire: F) -> Ticket
    where
        F: FnOnce(Ticket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let ticket = Ticket {
            kind,
            generation: self.generation,
        };
        let task = ScheduledTask::spawn(delay, on_fire(ticket));
        debug!(?kind, generation = ticket.generation, ?delay, "Inactivity timer armed");
        self.pending = Some(Pending { ticket, task });
        ticket
    }

    /// Drop the pending action, if any. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some(pending) => {
                pending.task.cancel();
                true
            }
            None => false,
        }
    }

    /// Called by a firing timer. Returns `true` and clears the pending slot
    /// if `ticket` is the current arming; `false` for a stale ticket.
    pub fn claim(&mut self, ticket: Ticket) -> bool {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => {
                pending.task.detach();
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Kind of the pending action, if one is armed.
    pub fn pending(&self) -> Option<TimerKind> {
        self.pending.as_ref().map(|p| p.ticket.kind)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.task.deadline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const WARN: Duration = Duration::from_secs(600);
    const TERMINATE: Duration = Duration::from_secs(120);

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    type BoxFuture = std::pin::Pin<Box<dyn Future<Output = ()> + Send>>;

    fn bump(counter: &Arc<AtomicUsize>) -> impl FnOnce(Ticket) -> BoxFuture {
        let counter = Arc::clone(counter);
        move |_ticket| -> BoxFuture {
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn warning_fires_after_threshold() {
        let fired = counter();
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        let ticket = monitor.reset_on_activity(bump(&fired));
        assert_eq!(ticket.kind, TimerKind::Warn);
        assert_eq!(monitor.pending(), Some(TimerKind::Warn));

        tokio::time::sleep(WARN - Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn double_reset_leaves_one_pending_action() {
        let fired = counter();
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        let first = monitor.reset_on_activity(bump(&fired));
        let second = monitor.reset_on_activity(bump(&fired));
        assert_ne!(first, second);
        assert_eq!(monitor.pending(), Some(TimerKind::Warn));

        tokio::time::sleep(WARN * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_postpones_the_deadline() {
        let fired = counter();
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        monitor.reset_on_activity(bump(&fired));

        tokio::time::sleep(Duration::from_secs(500)).await;
        monitor.reset_on_activity(bump(&fired));
        assert_eq!(monitor.deadline(), Some(Instant::now() + WARN));

        tokio::time::sleep(Duration::from_secs(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(401)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn termination_replaces_warning() {
        let fired = counter();
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        monitor.reset_on_activity(bump(&fired));
        let ticket = monitor.schedule_termination(bump(&fired));
        assert_eq!(ticket.kind, TimerKind::Terminate);
        assert_eq!(monitor.pending(), Some(TimerKind::Terminate));

        tokio::time::sleep(TERMINATE + Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        tokio::time::sleep(WARN).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_clears_pending() {
        let fired = counter();
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        assert!(!monitor.cancel());

        monitor.reset_on_activity(bump(&fired));
        assert!(monitor.cancel());
        assert_eq!(monitor.pending(), None);
        assert_eq!(monitor.deadline(), None);

        tokio::time::sleep(WARN * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stale_ticket_cannot_claim() {
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        let stale = monitor.reset_on_activity(|_| async {});
        let current = monitor.reset_on_activity(|_| async {});

        assert!(!monitor.claim(stale));
        assert_eq!(monitor.pending(), Some(TimerKind::Warn));

        assert!(monitor.claim(current));
        assert_eq!(monitor.pending(), None);
        assert!(!monitor.claim(current));
    }

    #[tokio::test]
    async fn cancelled_ticket_cannot_claim() {
        let mut monitor = InactivityMonitor::new(WARN, TERMINATE);
        let ticket = monitor.reset_on_activity(|_| async {});
        monitor.cancel();
        assert!(!monitor.claim(ticket));
    }
}
