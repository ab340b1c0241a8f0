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

//! Dismissible overlay controller
//!
//! Binds an [`OverlayState`], a [`TransitionController`] and an
//! outside-click registration into one menu unit.
//!
//! # Lifecycle
//!
//! ```text
//! trigger()/open()   ──▶ Open   ──▶ request_show() ──▶ register outside-click
//! trigger()/close()  ──▶ Closed ──▶ request_hide()
//! outside click      ──▶ Closed ──▶ request_hide()
//! transition Hidden  ──▶ release outside-click registration
//! ```
//!
//! The registration lives exactly as long as the content is mounted, so a
//! re-open during the leave animation keeps the same registration.
//!
//! The controller does not know about widgets. The view observes it via
//! [`OverlayController::connect_changed`] and mounts, styles or removes
//! the menu body accordingly.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::detector::{OutsideClickDetector, Subscription};
use crate::core::menu::{ActionError, MenuContent};
use crate::core::overlay_state::OverlayState;
use crate::core::region::AnchorRegion;
use crate::core::scheduler::TimerScheduler;
use crate::core::transition::{TransitionController, DEFAULT_LEAVE_DURATION};
use crate::core::types::{OpenState, OverlayId, PointerEvent, TransitionState};

/// Construction options shared by every overlay of a header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Duration of the leave animation
    pub leave_duration: Duration,
    /// Close the overlay before running an activated item's action
    pub close_on_activate: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            leave_duration: DEFAULT_LEAVE_DURATION,
            close_on_activate: true,
        }
    }
}

/// State handed to change observers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OverlaySnapshot {
    pub open: OpenState,
    pub visibility: TransitionState,
}

impl OverlaySnapshot {
    pub fn is_open_for_render(&self) -> bool {
        self.visibility.is_mounted()
    }

    pub fn is_visible_for_animation_class(&self) -> bool {
        self.visibility.is_shown()
    }
}

type ChangeObserver = Rc<dyn Fn(&OverlaySnapshot)>;

struct OverlayInner<E: 'static> {
    id: OverlayId,
    state: RefCell<OverlayState>,
    transition: TransitionController,
    detector: OutsideClickDetector<E>,
    anchor: Rc<dyn AnchorRegion<E>>,
    subscription: RefCell<Option<Subscription<E>>>,
    content: RefCell<MenuContent>,
    close_on_activate: bool,
    observers: RefCell<Vec<ChangeObserver>>,
}

impl<E: 'static> OverlayInner<E> {
    fn snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot {
            open: self.state.borrow().state(),
            visibility: self.transition.state(),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let observers: Vec<ChangeObserver> = self.observers.borrow().clone();
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn after_opened(self: &Rc<Self>) {
        tracing::debug!(overlay = %self.id, "opened");
        if !self.transition.request_show() {
            self.notify();
        }
        self.ensure_registration();
    }

    fn after_closed(&self) {
        tracing::debug!(overlay = %self.id, "closed");
        if !self.transition.request_hide() {
            self.notify();
        }
    }

    fn ensure_registration(self: &Rc<Self>) {
        if self.subscription.borrow().is_some() {
            return;
        }

        let weak = Rc::downgrade(self);
        let subscription = self.detector.register(self.id.clone(), self.anchor.clone(), move || {
            if let Some(inner) = weak.upgrade() {
                inner.handle_outside();
            }
        });
        *self.subscription.borrow_mut() = Some(subscription);
    }

    fn handle_outside(&self) {
        let changed = self.state.borrow_mut().on_outside_signal();
        if changed {
            tracing::debug!(overlay = %self.id, "dismissed by outside interaction");
            self.after_closed();
        }
    }

    fn on_visibility_changed(&self, visibility: TransitionState) {
        if visibility == TransitionState::Hidden {
            // Taken out first: dropping the subscription borrows the detector
            let released = self.subscription.borrow_mut().take();
            drop(released);
        }
        self.notify();
    }
}

/// One dismissible menu: open state, leave transition and outside-click
/// registration
///
/// Cloning yields another handle to the same overlay.
pub struct OverlayController<E: 'static = PointerEvent> {
    inner: Rc<OverlayInner<E>>,
}

impl<E: 'static> Clone for OverlayController<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: 'static> OverlayController<E> {
    /// Creates a closed, hidden overlay
    ///
    /// No outside-click registration is made until the overlay opens.
    ///
    /// # Arguments
    ///
    /// * `id` - Identity used for registration and logging
    /// * `anchor` - Live region of the trigger and mounted content
    /// * `detector` - Shared outside-click detector
    /// * `scheduler` - Timer source for the leave transition
    /// * `options` - Leave duration and activation behaviour
    pub fn new(
        id: OverlayId,
        anchor: Rc<dyn AnchorRegion<E>>,
        detector: OutsideClickDetector<E>,
        scheduler: Rc<dyn TimerScheduler>,
        options: OverlayOptions,
    ) -> Self {
        let inner = Rc::new(OverlayInner {
            id,
            state: RefCell::new(OverlayState::new()),
            transition: TransitionController::new(scheduler, options.leave_duration),
            detector,
            anchor,
            subscription: RefCell::new(None),
            content: RefCell::new(MenuContent::default()),
            close_on_activate: options.close_on_activate,
            observers: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&inner);
        inner.transition.connect_state_changed(move |visibility| {
            if let Some(inner) = weak.upgrade() {
                inner.on_visibility_changed(visibility);
            }
        });

        Self { inner }
    }

    pub fn id(&self) -> &OverlayId {
        &self.inner.id
    }

    /// Toggles the overlay (trigger click)
    pub fn trigger(&self) {
        let opened = {
            let mut state = self.inner.state.borrow_mut();
            state.toggle();
            state.is_open()
        };

        if opened {
            self.inner.after_opened();
        } else {
            self.inner.after_closed();
        }
    }

    /// Opens the overlay; no-op when already open
    pub fn open(&self) {
        if self.inner.state.borrow_mut().open() {
            self.inner.after_opened();
        }
    }

    /// Closes the overlay; no-op when already closed
    pub fn close(&self) {
        if self.inner.state.borrow_mut().close() {
            self.inner.after_closed();
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().is_open()
    }

    pub fn open_state(&self) -> OpenState {
        self.inner.state.borrow().state()
    }

    pub fn visibility(&self) -> TransitionState {
        self.inner.transition.state()
    }

    pub fn snapshot(&self) -> OverlaySnapshot {
        self.inner.snapshot()
    }

    /// Whether the menu body should be in the widget tree
    pub fn is_open_for_render(&self) -> bool {
        self.visibility().is_mounted()
    }

    /// Whether the menu body should carry its shown styling rather than the
    /// leave styling
    pub fn is_visible_for_animation_class(&self) -> bool {
        self.visibility().is_shown()
    }

    /// Value for the trigger's expanded state
    pub fn aria_expanded(&self) -> bool {
        self.is_open()
    }

    /// Whether an outside-click registration is active
    pub fn is_listening(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    pub fn transition(&self) -> &TransitionController {
        &self.inner.transition
    }

    pub fn anchor(&self) -> Rc<dyn AnchorRegion<E>> {
        self.inner.anchor.clone()
    }

    pub fn set_content(&self, content: MenuContent) {
        *self.inner.content.borrow_mut() = content;
    }

    pub fn content(&self) -> MenuContent {
        self.inner.content.borrow().clone()
    }

    /// Activates the item at `index`
    ///
    /// When configured to close on activation, the close is committed
    /// before the action runs, so a failing action cannot keep the menu
    /// open.
    pub fn activate_item(&self, index: usize) -> Result<(), ActionError> {
        let item = self
            .inner
            .content
            .borrow()
            .get(index)
            .cloned()
            .ok_or_else(|| ActionError::NoSuchItem {
                overlay: self.inner.id.clone(),
                index,
            })?;

        tracing::debug!(overlay = %self.inner.id, item = %item.label, "item activated");
        if self.inner.close_on_activate {
            self.close();
        }
        item.activate()
    }

    /// Registers an observer called after every open-state or visibility
    /// change
    pub fn connect_changed<F>(&self, observer: F)
    where
        F: Fn(&OverlaySnapshot) + 'static,
    {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }
}

impl<E: 'static> std::fmt::Debug for OverlayController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayController")
            .field("id", &self.inner.id)
            .field("open", &self.open_state())
            .field("visibility", &self.visibility())
            .field("listening", &self.is_listening())
            .finish()
    }
}
