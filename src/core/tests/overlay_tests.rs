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

//! Overlay controller tests
//!
//! Open/close paths, outside-click dismissal, registration lifetime,
//! independence of two overlays and isolated item activation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::core::detector::OutsideClickDetector;
use crate::core::menu::{ActionError, MenuContent, MenuItem};
use crate::core::overlay::{OverlayController, OverlayOptions};
use crate::core::region::RectRegion;
use crate::core::scheduler::ManualScheduler;
use crate::core::types::{OpenState, OverlayId, PointerEvent, Rect, TransitionState};

const D: Duration = Duration::from_millis(150);

struct Fixture {
    scheduler: Rc<ManualScheduler>,
    detector: OutsideClickDetector,
}

impl Fixture {
    fn new() -> Self {
        Self {
            scheduler: Rc::new(ManualScheduler::new()),
            detector: OutsideClickDetector::new(),
        }
    }

    fn overlay(&self, name: &str, rect: Rect) -> OverlayController {
        OverlayController::new(
            OverlayId::new(name),
            Rc::new(RectRegion::new(rect)),
            self.detector.clone(),
            self.scheduler.clone(),
            OverlayOptions {
                leave_duration: D,
                close_on_activate: true,
            },
        )
    }
}

fn outside() -> PointerEvent {
    PointerEvent::down(500.0, 500.0)
}

#[test]
fn test_starts_closed_hidden_and_unregistered() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    assert_eq!(overlay.open_state(), OpenState::Closed);
    assert_eq!(overlay.visibility(), TransitionState::Hidden);
    assert!(!overlay.is_listening());
    assert_eq!(fx.detector.registration_count(), 0);
}

#[test]
fn test_trigger_opens_and_registers() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    overlay.trigger();
    assert!(overlay.is_open());
    assert!(overlay.aria_expanded());
    assert_eq!(overlay.visibility(), TransitionState::Visible);
    assert!(overlay.is_open_for_render());
    assert!(overlay.is_visible_for_animation_class());
    assert!(overlay.is_listening());
}

#[test]
fn test_double_trigger_returns_to_closed() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    overlay.trigger();
    overlay.trigger();
    assert_eq!(overlay.open_state(), OpenState::Closed);
    assert_eq!(overlay.visibility(), TransitionState::Leaving);
    assert!(overlay.is_open_for_render());
    assert!(!overlay.is_visible_for_animation_class());

    fx.scheduler.advance(D);
    assert_eq!(overlay.visibility(), TransitionState::Hidden);
    assert!(!overlay.is_open_for_render());
}

#[test]
fn test_outside_click_while_closed_changes_nothing() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    fx.detector.dispatch(&outside());
    assert_eq!(overlay.open_state(), OpenState::Closed);
    assert_eq!(overlay.visibility(), TransitionState::Hidden);
}

#[test]
fn test_outside_click_closes_exactly_once() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    let changes = Rc::new(Cell::new(0));
    let counter = changes.clone();
    overlay.connect_changed(move |_| counter.set(counter.get() + 1));

    overlay.trigger();
    let after_open = changes.get();

    assert_eq!(fx.detector.dispatch(&outside()), 1);
    assert_eq!(overlay.open_state(), OpenState::Closed);
    assert_eq!(overlay.visibility(), TransitionState::Leaving);
    assert_eq!(changes.get(), after_open + 1);

    // Still registered while leaving, but a second outside click is a no-op
    fx.detector.dispatch(&outside());
    assert_eq!(changes.get(), after_open + 1);
    assert_eq!(overlay.visibility(), TransitionState::Leaving);
}

#[test]
fn test_click_on_anchor_never_dismisses() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    let inside = PointerEvent::down(20.0, 20.0);

    fx.detector.dispatch(&inside);
    assert!(!overlay.is_open());

    overlay.trigger();
    assert_eq!(fx.detector.dispatch(&inside), 0);
    assert!(overlay.is_open());
}

#[test]
fn test_registration_released_when_hidden() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    overlay.trigger();
    fx.detector.dispatch(&outside());
    assert!(overlay.is_listening(), "Registration lives while content is mounted");

    fx.scheduler.advance(D);
    assert!(!overlay.is_listening());
    assert_eq!(fx.detector.registration_count(), 0);
}

#[test]
fn test_reopen_during_leave_keeps_registration() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    overlay.trigger();
    overlay.trigger();
    fx.scheduler.advance(D / 2);
    overlay.trigger();

    assert_eq!(overlay.visibility(), TransitionState::Visible);
    assert_eq!(fx.detector.registration_count(), 1);

    fx.scheduler.advance(D * 4);
    assert_eq!(overlay.visibility(), TransitionState::Visible);
    assert!(overlay.is_listening());
}

#[test]
fn test_open_and_close_are_idempotent() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));

    overlay.open();
    overlay.open();
    assert!(overlay.is_open());
    assert_eq!(fx.detector.registration_count(), 1);

    overlay.close();
    let generation = overlay.transition().generation();
    overlay.close();
    assert_eq!(overlay.transition().generation(), generation);
    assert_eq!(fx.scheduler.pending_count(), 1);
}

#[test]
fn test_overlays_are_independent() {
    let fx = Fixture::new();
    let a = fx.overlay("a", Rect::new(0.0, 0.0, 40.0, 40.0));
    let b = fx.overlay("b", Rect::new(100.0, 0.0, 40.0, 40.0));

    a.trigger();
    assert_eq!(b.open_state(), OpenState::Closed);
    assert_eq!(b.visibility(), TransitionState::Hidden);

    b.trigger();
    assert!(a.is_open());
    assert_eq!(a.visibility(), TransitionState::Visible);

    // Click on a's anchor is outside b only
    fx.detector.dispatch(&PointerEvent::down(10.0, 10.0));
    assert!(a.is_open());
    assert!(!b.is_open());
}

#[test]
fn test_observers_receive_snapshots() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    overlay.connect_changed(move |snapshot| log.borrow_mut().push((snapshot.open, snapshot.visibility)));

    overlay.trigger();
    overlay.trigger();
    fx.scheduler.advance(D);

    assert_eq!(
        *seen.borrow(),
        vec![
            (OpenState::Open, TransitionState::Visible),
            (OpenState::Closed, TransitionState::Leaving),
            (OpenState::Closed, TransitionState::Hidden),
        ]
    );
}

#[test]
fn test_activate_item_runs_action_and_closes() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    overlay.set_content(MenuContent::new(vec![
        MenuItem::new("Messages").with_badge(13),
        MenuItem::new("Alerts").with_action(move || {
            counter.set(counter.get() + 1);
            Ok(())
        }),
    ]));

    overlay.trigger();
    overlay.activate_item(1).unwrap();
    assert_eq!(hits.get(), 1);
    assert!(!overlay.is_open());
    assert_eq!(overlay.visibility(), TransitionState::Leaving);
}

#[test]
fn test_failing_action_does_not_disturb_committed_close() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    overlay.set_content(MenuContent::new(vec![
        MenuItem::new("Log out").with_action(|| anyhow::bail!("no session")),
        MenuItem::new("Crash").with_action(|| panic!("handler bug")),
    ]));

    overlay.trigger();
    let result = overlay.activate_item(0);
    assert!(matches!(result, Err(ActionError::Failed { .. })));
    assert_eq!(overlay.open_state(), OpenState::Closed);
    assert_eq!(overlay.visibility(), TransitionState::Leaving);

    overlay.trigger();
    let result = overlay.activate_item(1);
    assert!(matches!(result, Err(ActionError::Panicked { .. })));
    assert_eq!(overlay.open_state(), OpenState::Closed);

    fx.scheduler.advance(D);
    assert_eq!(overlay.visibility(), TransitionState::Hidden);
    assert_eq!(fx.detector.registration_count(), 0);
}

#[test]
fn test_activate_missing_item() {
    let fx = Fixture::new();
    let overlay = fx.overlay("menu", Rect::new(0.0, 0.0, 40.0, 40.0));
    overlay.trigger();

    let result = overlay.activate_item(7);
    assert!(matches!(result, Err(ActionError::NoSuchItem { index: 7, .. })));
    assert!(overlay.is_open(), "Invalid activation leaves the menu alone");
}

#[test]
fn test_keep_open_on_activate() {
    let fx = Fixture::new();
    let overlay: OverlayController = OverlayController::new(
        OverlayId::new("menu"),
        Rc::new(RectRegion::new(Rect::new(0.0, 0.0, 40.0, 40.0))),
        fx.detector.clone(),
        fx.scheduler.clone(),
        OverlayOptions {
            leave_duration: D,
            close_on_activate: false,
        },
    );
    overlay.set_content(MenuContent::new(vec![MenuItem::new("Settings")]));

    overlay.trigger();
    overlay.activate_item(0).unwrap();
    assert!(overlay.is_open());
}
