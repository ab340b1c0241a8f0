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

//! Show/hide transition state machine
//!
//! ```text
//! Hidden ──show──▶ Visible ──hide──▶ Leaving ──timer(D)──▶ Hidden
//!                     ▲                 │
//!                     └──────show───────┘  (timer cancelled)
//! ```
//!
//! Showing is immediate; only the leave is animated. Content stays mounted
//! for the whole leave and is released only when the timer completes.
//!
//! # Stale timers
//!
//! Every leave start and every cancellation bumps a generation counter.
//! The timer callback carries the generation it was scheduled under and
//! does nothing unless that generation is still current, so a cancelled
//! timer can never hide a later cycle even if the scheduler runs it anyway.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::core::scheduler::{TimerHandle, TimerScheduler};
use crate::core::types::TransitionState;

/// Default leave duration
pub const DEFAULT_LEAVE_DURATION: Duration = Duration::from_millis(150);

/// Observer notified after each committed state change
pub type StateObserver = Rc<dyn Fn(TransitionState)>;

#[derive(Default)]
struct Machine {
    state: TransitionState,
    generation: u64,
    pending: Option<TimerHandle>,
}

#[derive(Default)]
struct Shared {
    machine: RefCell<Machine>,
    observers: RefCell<Vec<StateObserver>>,
}

impl Shared {
    fn notify(&self, state: TransitionState) {
        let observers: Vec<StateObserver> = self.observers.borrow().clone();
        for observer in observers {
            observer(state);
        }
    }

    fn finish_leave(&self, generation: u64) {
        {
            let mut machine = self.machine.borrow_mut();
            if machine.generation != generation || machine.state != TransitionState::Leaving {
                tracing::trace!(generation, current = machine.generation, "ignoring stale leave timer");
                return;
            }
            machine.state = TransitionState::Hidden;
            machine.pending = None;
        }
        self.notify(TransitionState::Hidden);
    }
}

/// Visibility state machine for one overlay
pub struct TransitionController {
    shared: Rc<Shared>,
    scheduler: Rc<dyn TimerScheduler>,
    leave_duration: Duration,
}

impl TransitionController {
    /// Creates a controller in `Hidden`
    ///
    /// `leave_duration` is fixed for the controller's lifetime.
    pub fn new(scheduler: Rc<dyn TimerScheduler>, leave_duration: Duration) -> Self {
        Self {
            shared: Rc::new(Shared::default()),
            scheduler,
            leave_duration,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.shared.machine.borrow().state
    }

    pub fn is_mounted(&self) -> bool {
        self.state().is_mounted()
    }

    pub fn is_shown(&self) -> bool {
        self.state().is_shown()
    }

    pub fn leave_duration(&self) -> Duration {
        self.leave_duration
    }

    /// Current generation (bumped on every leave start and cancellation)
    pub fn generation(&self) -> u64 {
        self.shared.machine.borrow().generation
    }

    /// Whether a leave timer is outstanding
    pub fn has_pending_timer(&self) -> bool {
        self.shared.machine.borrow().pending.is_some()
    }

    /// Registers an observer for committed state changes
    ///
    /// Observers run with no internal borrow held and may call back into
    /// the controller.
    pub fn connect_state_changed<F>(&self, observer: F)
    where
        F: Fn(TransitionState) + 'static,
    {
        self.shared.observers.borrow_mut().push(Rc::new(observer));
    }

    /// `Hidden → Visible` or `Leaving → Visible` (cancelling the leave)
    ///
    /// Returns `false` when already shown.
    pub fn request_show(&self) -> bool {
        let cancelled = {
            let mut machine = self.shared.machine.borrow_mut();
            let cancelled = match machine.state {
                TransitionState::Visible | TransitionState::Entering => return false,
                TransitionState::Hidden => None,
                TransitionState::Leaving => {
                    machine.generation += 1;
                    machine.pending.take()
                }
            };
            machine.state = TransitionState::Visible;
            cancelled
        };

        if let Some(handle) = cancelled {
            tracing::debug!(?handle, "leave cancelled by show");
            self.scheduler.cancel(handle);
        }

        self.shared.notify(TransitionState::Visible);
        true
    }

    /// `Visible → Leaving`, scheduling `Leaving → Hidden` after the leave
    /// duration
    ///
    /// Returns `false` when already hidden or leaving.
    pub fn request_hide(&self) -> bool {
        let generation = {
            let mut machine = self.shared.machine.borrow_mut();
            if !machine.state.is_shown() {
                return false;
            }
            machine.state = TransitionState::Leaving;
            machine.generation += 1;
            machine.generation
        };

        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let handle = self.scheduler.schedule(
            self.leave_duration,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.finish_leave(generation);
                }
            }),
        );

        {
            let mut machine = self.shared.machine.borrow_mut();
            if machine.generation == generation && machine.state == TransitionState::Leaving {
                machine.pending = Some(handle);
            }
        }

        self.shared.notify(TransitionState::Leaving);
        true
    }
}

impl Drop for TransitionController {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.machine.borrow_mut().pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl std::fmt::Debug for TransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("state", &self.state())
            .field("generation", &self.generation())
            .field("leave_duration", &self.leave_duration)
            .finish()
    }
}
