// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transition controller tests
//!
//! Timing of the leave animation, idempotent edges, cancellation and the
//! generation guard against stale timers.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::scheduler::{ManualScheduler, TimerHandle, TimerScheduler};
use crate::core::transition::TransitionController;
use crate::core::types::TransitionState;

const D: Duration = Duration::from_millis(150);

/// Helper: Creates a controller on virtual time
fn controller() -> (Rc<ManualScheduler>, TransitionController) {
    let scheduler = Rc::new(ManualScheduler::new());
    let transition = TransitionController::new(scheduler.clone(), D);
    (scheduler, transition)
}

#[test]
fn test_starts_hidden() {
    let (_scheduler, transition) = controller();
    assert_eq!(transition.state(), TransitionState::Hidden);
    assert!(!transition.is_mounted());
}

#[test]
fn test_show_is_immediate() {
    let (scheduler, transition) = controller();

    assert!(transition.request_show());
    assert_eq!(transition.state(), TransitionState::Visible);
    assert_eq!(scheduler.pending_count(), 0, "Showing should not schedule a timer");
}

#[test]
fn test_hide_leaves_then_hides_after_duration() {
    let (scheduler, transition) = controller();
    transition.request_show();

    assert!(transition.request_hide());
    assert_eq!(transition.state(), TransitionState::Leaving);
    assert!(transition.is_mounted(), "Content stays mounted while leaving");

    scheduler.advance(D - Duration::from_millis(1));
    assert_eq!(transition.state(), TransitionState::Leaving);

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(transition.state(), TransitionState::Hidden);
    assert!(!transition.has_pending_timer());
}

#[test]
fn test_hide_is_noop_when_hidden_or_leaving() {
    let (scheduler, transition) = controller();

    assert!(!transition.request_hide());
    assert_eq!(transition.state(), TransitionState::Hidden);

    transition.request_show();
    transition.request_hide();
    let generation = transition.generation();

    assert!(!transition.request_hide());
    assert_eq!(transition.generation(), generation);
    assert_eq!(scheduler.pending_count(), 1, "A second hide must not restart the timer");
}

#[test]
fn test_show_is_noop_when_visible() {
    let (_scheduler, transition) = controller();
    transition.request_show();
    assert!(!transition.request_show());
    assert_eq!(transition.state(), TransitionState::Visible);
}

#[test]
fn test_show_during_leave_cancels_timer() {
    let (scheduler, transition) = controller();
    transition.request_show();
    transition.request_hide();

    scheduler.advance(Duration::from_millis(100));
    assert!(transition.request_show());
    assert_eq!(transition.state(), TransitionState::Visible);
    assert_eq!(scheduler.pending_count(), 0);

    scheduler.advance(Duration::from_secs(1));
    assert_eq!(
        transition.state(),
        TransitionState::Visible,
        "Cancelled timer must never hide the overlay"
    );
}

#[test]
fn test_new_leave_cycle_is_not_cut_short_by_old_timer() {
    let (scheduler, transition) = controller();
    transition.request_show();

    transition.request_hide(); // timer A due at 150
    scheduler.advance(Duration::from_millis(100));
    transition.request_show(); // A cancelled
    transition.request_hide(); // timer B due at 250

    scheduler.advance(Duration::from_millis(60)); // t = 160
    assert_eq!(transition.state(), TransitionState::Leaving);

    scheduler.advance(Duration::from_millis(90)); // t = 250
    assert_eq!(transition.state(), TransitionState::Hidden);
}

/// Scheduler that ignores cancellation, so the generation guard is the
/// only thing standing between a stale timer and the state machine
#[derive(Default)]
struct LeakyScheduler {
    inner: ManualScheduler,
    cancelled: RefCell<Vec<TimerHandle>>,
}

impl TimerScheduler for LeakyScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        self.inner.schedule(delay, callback)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.cancelled.borrow_mut().push(handle);
    }
}

#[test]
fn test_generation_guard_neutralises_uncancelled_timer() {
    let scheduler = Rc::new(LeakyScheduler::default());
    let transition = TransitionController::new(scheduler.clone(), D);

    transition.request_show();
    transition.request_hide();
    let first_generation = transition.generation();

    scheduler.inner.advance(Duration::from_millis(50));
    transition.request_show();
    assert!(transition.generation() > first_generation);
    assert_eq!(scheduler.cancelled.borrow().len(), 1, "Cancellation is still requested");

    // The stale timer runs anyway
    scheduler.inner.advance(Duration::from_millis(200));
    assert_eq!(transition.state(), TransitionState::Visible);
}

#[test]
fn test_observers_see_every_committed_state() {
    let (scheduler, transition) = controller();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    transition.connect_state_changed(move |state| log.borrow_mut().push(state));

    transition.request_show();
    transition.request_hide();
    scheduler.advance(D);

    assert_eq!(
        *seen.borrow(),
        vec![
            TransitionState::Visible,
            TransitionState::Leaving,
            TransitionState::Hidden
        ]
    );
}

#[test]
fn test_dropping_controller_cancels_pending_timer() {
    let (scheduler, transition) = controller();
    transition.request_show();
    transition.request_hide();
    assert_eq!(scheduler.pending_count(), 1);

    drop(transition);
    assert_eq!(scheduler.pending_count(), 0);
}
