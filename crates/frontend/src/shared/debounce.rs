//! Trailing-edge debounce for input handlers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Tracks which scheduled run is still allowed to fire.
///
/// Every `arm` invalidates all earlier tickets.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Delays a task until no new task was scheduled for `wait_ms`.
///
/// Holds at most one pending timer. Dropping the timer (on reschedule or
/// when the owning component unmounts) clears it.
#[derive(Clone, Copy)]
pub struct Debouncer {
    wait_ms: u32,
    gate: StoredValue<DebounceGate>,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            gate: StoredValue::new(DebounceGate::default()),
            pending: StoredValue::new_local(None),
        }
    }

    /// Replaces any pending task with `task`
    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        let run = self.guard(task);
        let timeout = Timeout::new(self.wait_ms, run);

        // the previous timer is dropped here, which clears it
        self.pending.set_value(Some(timeout));
    }

    /// Wraps `task` so it only runs if nothing was scheduled after it
    fn guard(&self, task: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
        let gate = self.gate;
        let ticket = gate.try_update_value(|g| g.arm()).unwrap_or_default();

        move || {
            let current = gate
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if current {
                task();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_last_ticket_wins() {
        let mut gate = DebounceGate::default();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_only_last_scheduled_task_runs() {
        let debouncer = Debouncer::new(300);
        let applied = Rc::new(RefCell::new(Vec::new()));

        let tasks: Vec<_> = ["s", "sa", "sal"]
            .into_iter()
            .map(|keywords| {
                let applied = applied.clone();
                debouncer.guard(move || applied.borrow_mut().push(keywords))
            })
            .collect();

        // timers fire in scheduling order
        for task in tasks {
            task();
        }

        assert_eq!(*applied.borrow(), vec!["sal"]);
    }

    #[test]
    fn test_task_scheduled_after_a_run_still_runs() {
        let debouncer = Debouncer::new(300);
        let applied = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let applied = applied.clone();
            debouncer.guard(move || applied.borrow_mut().push("a"))
        };
        first();
        let second = {
            let applied = applied.clone();
            debouncer.guard(move || applied.borrow_mut().push("ab"))
        };
        second();

        assert_eq!(*applied.borrow(), vec!["a", "ab"]);
    }
}
