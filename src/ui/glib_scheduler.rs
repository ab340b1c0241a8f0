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

//! GLib-backed timers
//!
//! Runs the leave-transition timers on the GTK main loop.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use glib::SourceId;

use crate::core::{TimerHandle, TimerScheduler};

/// [`TimerScheduler`] on top of `glib::timeout_add_local_once`
///
/// Must be used from the thread that owns the default main context.
#[derive(Default)]
pub struct GlibScheduler {
    next_handle: Cell<u64>,
    /// Sources that have not fired yet. A fired source removes its own
    /// entry, so only live sources are ever passed to `SourceId::remove`.
    sources: Rc<RefCell<HashMap<u64, SourceId>>>,
}

impl GlibScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.sources.borrow().len()
    }
}

impl TimerScheduler for GlibScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let raw = self.next_handle.get();
        self.next_handle.set(raw + 1);

        let sources = self.sources.clone();
        let source = glib::timeout_add_local_once(delay, move || {
            sources.borrow_mut().remove(&raw);
            callback();
        });
        self.sources.borrow_mut().insert(raw, source);

        TimerHandle::new(raw)
    }

    fn cancel(&self, handle: TimerHandle) {
        let source = self.sources.borrow_mut().remove(&handle.raw());
        if let Some(source) = source {
            source.remove();
        }
    }
}

impl std::fmt::Debug for GlibScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlibScheduler")
            .field("pending", &self.pending_count())
            .finish()
    }
}
