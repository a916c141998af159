//! One-shot timers driven by explicit time deltas.
//!
//! The host advances the scheduler from its render loop with
//! `tick(dt_ms)` and applies whatever actions came due. Timers are
//! cancellable only wholesale (`clear`), matching the UI contract:
//! individual timers are never retracted, but component teardown must
//! drop every pending one. Dropping the owning session does exactly
//! that, so no action can fire after disposal.

/// Deferred UI action produced by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Collapse the terminal shell (post-navigation auto-collapse).
    Collapse,
    /// Focus the input field (after the expand animation settles).
    FocusInput,
}

#[derive(Debug)]
struct Pending {
    action: TimerAction,
    remaining_ms: u32,
}

/// A set of pending one-shot timers.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once after `delay_ms`.
    pub fn schedule(&mut self, action: TimerAction, delay_ms: u32) {
        self.pending.push(Pending {
            action,
            remaining_ms: delay_ms,
        });
    }

    /// Advance time by `dt_ms` and return the actions that came due,
    /// in scheduling order.
    pub fn tick(&mut self, dt_ms: u32) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            if p.remaining_ms <= dt_ms {
                due.push(p.action);
                false
            } else {
                p.remaining_ms -= dt_ms;
                true
            }
        });
        due
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
