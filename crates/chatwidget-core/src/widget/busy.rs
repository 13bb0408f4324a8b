use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chatwidget_common::{EventBus, WidgetEvent};

use crate::SessionError;

/// In-flight send flag of one session. A restart retires the slot and
/// installs a fresh one, so a request still pending for the old session
/// never blocks the new one.
#[derive(Debug, Default)]
pub(crate) struct SendSlot {
    busy: AtomicBool,
    retired: AtomicBool,
}

impl SendSlot {
    pub(crate) fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Detach the slot from the widget. Re-enables the send control if a
    /// request was still in flight.
    pub(crate) fn retire(&self, events: &EventBus) {
        self.retired.store(true, Ordering::Release);
        if self.is_busy() {
            events.publish(WidgetEvent::SendingChanged { busy: false });
        }
    }
}

/// Marks a send as in flight. Clears the flag when dropped, on every exit
/// path, and re-enables the send control unless the slot was retired.
pub(crate) struct BusyGuard<'a> {
    slot: Arc<SendSlot>,
    events: &'a EventBus,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the slot. Returns `Err` if already busy.
    pub(crate) fn acquire(slot: Arc<SendSlot>, events: &'a EventBus) -> Result<Self, SessionError> {
        if slot
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SessionError::Busy);
        }
        events.publish(WidgetEvent::SendingChanged { busy: true });
        Ok(Self { slot, events })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::Release);
        if !self.slot.retired.load(Ordering::Acquire) {
            self.events.publish(WidgetEvent::SendingChanged { busy: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_drop() {
        let slot = Arc::new(SendSlot::default());
        let events = EventBus::default();

        let guard = BusyGuard::acquire(slot.clone(), &events).unwrap();
        assert!(slot.is_busy());
        assert!(matches!(
            BusyGuard::acquire(slot.clone(), &events),
            Err(SessionError::Busy)
        ));

        drop(guard);
        assert!(!slot.is_busy());
        assert!(BusyGuard::acquire(slot, &events).is_ok());
    }

    #[test]
    fn publishes_sending_changes() {
        let slot = Arc::new(SendSlot::default());
        let events = EventBus::default();
        let mut rx = events.subscribe();

        drop(BusyGuard::acquire(slot, &events).unwrap());

        assert!(matches!(
            rx.try_recv().unwrap(),
            WidgetEvent::SendingChanged { busy: true }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            WidgetEvent::SendingChanged { busy: false }
        ));
    }

    #[test]
    fn retired_slot_releases_quietly() {
        let slot = Arc::new(SendSlot::default());
        let events = EventBus::default();
        let mut rx = events.subscribe();

        let guard = BusyGuard::acquire(slot.clone(), &events).unwrap();
        slot.retire(&events);
        drop(guard);

        assert!(matches!(
            rx.try_recv().unwrap(),
            WidgetEvent::SendingChanged { busy: true }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            WidgetEvent::SendingChanged { busy: false }
        ));
        assert!(rx.try_recv().is_err());
        assert!(!slot.is_busy());
    }

    #[test]
    fn retiring_idle_slot_publishes_nothing() {
        let slot = SendSlot::default();
        let events = EventBus::default();
        let mut rx = events.subscribe();

        slot.retire(&events);
        assert!(rx.try_recv().is_err());
    }
}
