/// A cancellable recurring timer driven by a host-supplied millisecond clock.
///
/// The timer holds no callbacks and spawns nothing: the owner samples it with `poll(now_ms)`
/// and performs the fired work itself. Scheduling replaces any previous schedule, so there is
/// never more than one live period per timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval_ms: u64,
    scheduled: bool,
    // `None` while scheduled means "anchor at the next poll".
    due_ms: Option<u64>,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Clock value at which the next period fires, if known.
    pub fn due_ms(&self) -> Option<u64> {
        if self.scheduled { self.due_ms } else { None }
    }

    /// Cancels any existing schedule and starts a new one.
    ///
    /// The first period ends `interval_ms` after `anchor_ms`. Without an anchor the period
    /// starts at the next `poll`. An interval of zero is treated as one millisecond.
    pub fn schedule(&mut self, interval_ms: u64, anchor_ms: Option<u64>) {
        let interval_ms = interval_ms.max(1);
        self.interval_ms = interval_ms;
        self.scheduled = true;
        self.due_ms = anchor_ms.map(|a| a.saturating_add(interval_ms));
    }

    pub fn cancel(&mut self) {
        self.scheduled = false;
        self.due_ms = None;
    }

    /// Restarts the current period at `now_ms` without changing the interval.
    pub fn reanchor(&mut self, now_ms: u64) {
        if self.scheduled {
            self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
        }
    }

    /// Returns how many periods elapsed up to `now_ms` and moves the schedule past them.
    ///
    /// Missed periods are reported together, so a late poll catches up deterministically.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        if !self.scheduled {
            return 0;
        }
        let Some(due) = self.due_ms else {
            self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
            return 0;
        };
        if now_ms < due {
            return 0;
        }
        let fired = (now_ms - due) / self.interval_ms + 1;
        self.due_ms = Some(due.saturating_add(fired.saturating_mul(self.interval_ms)));
        fired
    }
}
