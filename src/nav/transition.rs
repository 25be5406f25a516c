use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config;

/// Stages of one page switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ExitingOld,
    EnteringNew,
    Settled,
}

/// Stage offsets for a switch, measured from its start.
///
/// The exit must complete before the new page is activated, and the scroll
/// reconcile runs after activation, so the offsets are strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Press-down micro-animation on the old links is cleared.
    pub press_reset_ms: u32,
    /// Old sections lose their active marker and the target activates.
    pub exit_ms: u32,
    /// The target section fades/translates in.
    pub enter_ms: u32,
    /// The scroll-state updater reconciles the navbar with offset 0.
    pub reconcile_ms: u32,
    /// Scale pulse on the newly active link is cleared.
    pub pulse_reset_ms: u32,
}

impl Schedule {
    pub fn standard() -> Self {
        Self {
            press_reset_ms: config::LINK_PRESS_RESET_MS,
            exit_ms: config::PAGE_EXIT_MS,
            enter_ms: config::PAGE_EXIT_MS + config::PAGE_ENTER_DELAY_MS,
            reconcile_ms: config::PAGE_EXIT_MS + config::SCROLL_RECONCILE_MS,
            pulse_reset_ms: config::PAGE_EXIT_MS + config::LINK_PULSE_RESET_MS,
        }
    }

    /// Phase the sequencer is in at `elapsed_ms` after the switch started.
    /// The pulse reset past `reconcile_ms` is cosmetic; the switch counts as
    /// settled once the scroll state has been reconciled.
    #[cfg(test)]
    pub fn phase_at(&self, elapsed_ms: u32) -> Phase {
        if elapsed_ms < self.exit_ms {
            Phase::ExitingOld
        } else if elapsed_ms < self.reconcile_ms {
            Phase::EnteringNew
        } else {
            Phase::Settled
        }
    }
}

/// An in-flight switch.
///
/// Owns every pending stage timer; dropping the transition cancels them all,
/// which is how a newer switch supersedes an older one instead of racing its
/// leftover timers.
pub struct Transition {
    target: String,
    phase: Rc<Cell<Phase>>,
    timers: Vec<Timeout>,
}

impl Transition {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            phase: Rc::new(Cell::new(Phase::ExitingOld)),
            timers: Vec::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Shared phase cell for stage callbacks to advance.
    pub fn phase_cell(&self) -> Rc<Cell<Phase>> {
        Rc::clone(&self.phase)
    }

    /// Schedules a stage; the timeout dies with the transition.
    pub fn stage<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.timers.push(Timeout::new(delay_ms, callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_schedule_orders_its_stages() {
        let schedule = Schedule::standard();
        assert!(schedule.press_reset_ms < schedule.exit_ms);
        assert!(schedule.exit_ms < schedule.enter_ms);
        assert!(schedule.enter_ms < schedule.reconcile_ms);
        assert!(schedule.reconcile_ms < schedule.pulse_reset_ms);
    }

    #[test]
    fn phase_tracks_elapsed_time() {
        let schedule = Schedule::standard();
        assert_eq!(schedule.phase_at(0), Phase::ExitingOld);
        assert_eq!(schedule.phase_at(schedule.exit_ms - 1), Phase::ExitingOld);
        assert_eq!(schedule.phase_at(schedule.exit_ms), Phase::EnteringNew);
        assert_eq!(
            schedule.phase_at(schedule.reconcile_ms - 1),
            Phase::EnteringNew
        );
        assert_eq!(schedule.phase_at(schedule.reconcile_ms), Phase::Settled);
        assert_eq!(schedule.phase_at(10_000), Phase::Settled);
    }

    #[test]
    fn exit_precedes_entry_by_the_enter_delay() {
        let schedule = Schedule::standard();
        assert_eq!(
            schedule.enter_ms - schedule.exit_ms,
            crate::config::PAGE_ENTER_DELAY_MS
        );
    }
}
