use std::time::{Duration, Instant};

/// Identity of one scheduled firing. A new `schedule` call always hands out
/// a fresh handle, so a superseded handle never matches the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
pub struct PendingTimer<E> {
    pub handle: TimerHandle,
    pub deadline: Instant,
    pub event: E,
}

/// Trailing-edge debounce over a single timer slot.
///
/// Bursts of `schedule` calls closer together than the quiet window
/// collapse into one firing that carries the most recent event.
#[derive(Debug)]
pub struct ChangeScheduler<E> {
    quiet_window: Duration,
    pending: Option<PendingTimer<E>>,
    next_handle: u64,
}

impl<E> ChangeScheduler<E> {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    /// Replace whatever is pending with `event`, due one quiet window
    /// after `now`.
    pub fn schedule(&mut self, event: E, now: Instant) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending = Some(PendingTimer {
            handle,
            deadline: now + self.quiet_window,
            event,
        });
        handle
    }

    /// Take the pending event if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<E> {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |timer| timer.deadline <= now);

        if due {
            self.pending.take().map(|timer| timer.event)
        } else {
            None
        }
    }

    /// The event that will fire next, if any.
    pub fn pending_event(&self) -> Option<&E> {
        self.pending.as_ref().map(|t| &t.event)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|t| t.deadline)
    }

    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|t| t.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
