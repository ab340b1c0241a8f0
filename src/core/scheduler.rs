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

//! Timer scheduling
//!
//! The leave transition is the only delayed work in the header, and it
//! reaches the clock through [`TimerScheduler`]. The GTK front end backs it
//! with the GLib main loop; [`ManualScheduler`] runs on virtual time so
//! tests and the `simulate` command are deterministic.

use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Handle of a scheduled callback
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Single-threaded source of one-shot timers
pub trait TimerScheduler {
    /// Runs `callback` once after `delay`
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;

    /// Cancels a pending callback. Unknown or already-fired handles are
    /// ignored.
    fn cancel(&self, handle: TimerHandle);
}

struct PendingTimer {
    handle: TimerHandle,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Virtual-time scheduler
///
/// Time only moves when [`ManualScheduler::advance`] is called. Timers
/// fire in due order; ties fire in scheduling order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_handle: Cell<u64>,
    pending: RefCell<Vec<PendingTimer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of timers waiting to fire
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Moves time forward by `by`, firing every timer that comes due
    ///
    /// Callbacks may schedule or cancel timers; a timer scheduled by a
    /// callback fires in the same call if it is due before the target time.
    /// Returns the number of callbacks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now.get() + by;
        let mut fired = 0;

        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due);
            (timer.callback)();
            fired += 1;
        }

        self.now.set(target);
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<PendingTimer> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;
        Some(pending.remove(index))
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);

        self.pending.borrow_mut().push(PendingTimer {
            handle,
            due: self.now.get() + delay,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.pending.borrow_mut().retain(|t| t.handle != handle);
    }
}
