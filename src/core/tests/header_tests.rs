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

//! Header composition tests
//!
//! End-to-end scenarios with both menus on one detector, plus the theme
//! and sidebar pass-throughs.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::header::{Header, HeaderDeps, SidebarState, ThemeProvider, ThemeState};
use crate::core::overlay::OverlayOptions;
use crate::core::region::RectRegion;
use crate::core::scheduler::ManualScheduler;
use crate::core::types::{OpenState, PointerEvent, Rect, Theme, ThemeIcon, TransitionState};

const D: Duration = Duration::from_millis(150);

struct Fixture {
    header: Header,
    scheduler: Rc<ManualScheduler>,
    theme: Rc<ThemeState>,
    sidebar: Rc<SidebarState>,
}

/// Helper: Header with notifications at x=600 and profile at x=650
fn fixture() -> Fixture {
    let scheduler = Rc::new(ManualScheduler::new());
    let theme = Rc::new(ThemeState::new(Theme::Light));
    let sidebar = Rc::new(SidebarState::default());

    let header: Header = Header::new(
        HeaderDeps {
            theme: theme.clone(),
            sidebar: sidebar.clone(),
            scheduler: scheduler.clone(),
            notifications_anchor: Rc::new(RectRegion::new(Rect::new(600.0, 10.0, 32.0, 32.0))),
            profile_anchor: Rc::new(RectRegion::new(Rect::new(650.0, 10.0, 32.0, 32.0))),
        },
        OverlayOptions {
            leave_duration: D,
            close_on_activate: true,
        },
    );

    Fixture {
        header,
        scheduler,
        theme,
        sidebar,
    }
}

fn state_of(header: &Header, name: &str) -> (OpenState, TransitionState) {
    let overlay = header.overlay(name).unwrap();
    (overlay.open_state(), overlay.visibility())
}

#[test]
fn test_both_menus_start_closed() {
    let fx = fixture();
    for overlay in fx.header.overlays() {
        assert_eq!(overlay.open_state(), OpenState::Closed);
        assert_eq!(overlay.visibility(), TransitionState::Hidden);
    }
    assert_eq!(fx.header.detector().registration_count(), 0);
}

#[test]
fn test_outside_click_dismisses_notifications_only() {
    let fx = fixture();
    let closed_hidden = (OpenState::Closed, TransitionState::Hidden);

    fx.header.notifications().trigger();
    assert_eq!(
        state_of(&fx.header, "notifications"),
        (OpenState::Open, TransitionState::Visible)
    );
    assert_eq!(state_of(&fx.header, "profile"), closed_hidden);

    fx.header.dispatch_pointer(&PointerEvent::down(100.0, 300.0));
    assert_eq!(
        state_of(&fx.header, "notifications"),
        (OpenState::Closed, TransitionState::Leaving)
    );
    assert_eq!(state_of(&fx.header, "profile"), closed_hidden);

    fx.scheduler.advance(D);
    assert_eq!(state_of(&fx.header, "notifications"), closed_hidden);
    assert_eq!(state_of(&fx.header, "profile"), closed_hidden);
    assert_eq!(fx.header.detector().registration_count(), 0);
}

#[test]
fn test_rapid_reopen_keeps_profile_mounted() {
    let fx = fixture();
    let profile = fx.header.profile().clone();
    let mounted = Rc::new(RefCell::new(Vec::new()));
    let log = mounted.clone();
    profile.connect_changed(move |snapshot| log.borrow_mut().push(snapshot.is_open_for_render()));

    profile.trigger();
    fx.scheduler.advance(D / 2 - Duration::from_millis(1));
    profile.trigger();
    profile.trigger();

    assert_eq!(profile.open_state(), OpenState::Open);
    assert_eq!(profile.visibility(), TransitionState::Visible);

    fx.scheduler.advance(D * 2);
    assert_eq!(profile.visibility(), TransitionState::Visible);
    assert!(
        mounted.borrow().iter().all(|m| *m),
        "Content must never be unmounted across the sequence"
    );
}

#[test]
fn test_menus_can_be_open_together() {
    let fx = fixture();

    fx.header.notifications().trigger();
    // Clicking the profile trigger is outside the notifications anchor.
    // The root dispatch runs before the trigger handler.
    fx.header.dispatch_pointer(&PointerEvent::down(660.0, 20.0));
    fx.header.profile().trigger();

    assert!(!fx.header.notifications().is_open());
    assert!(fx.header.profile().is_open());

    // Opening directly, without a pointer in between, keeps both open
    fx.header.notifications().open();
    assert!(fx.header.notifications().is_open());
    assert!(fx.header.profile().is_open());
}

#[test]
fn test_trigger_click_does_not_self_dismiss() {
    let fx = fixture();
    let on_trigger = PointerEvent::click(610.0, 20.0);

    fx.header.dispatch_pointer(&on_trigger);
    fx.header.notifications().trigger();
    fx.header.dispatch_pointer(&on_trigger);

    assert!(fx.header.notifications().is_open());
}

#[test]
fn test_theme_pass_through() {
    let fx = fixture();
    assert_eq!(fx.header.theme(), Theme::Light);
    assert_eq!(fx.header.theme_icon(), ThemeIcon::Moon);

    fx.header.toggle_theme();
    assert_eq!(fx.theme.theme(), Theme::Dark);
    assert_eq!(fx.header.theme_icon(), ThemeIcon::Sun);
}

#[test]
fn test_sidebar_pass_through() {
    let fx = fixture();
    assert!(!fx.sidebar.is_open());
    fx.header.toggle_sidebar();
    assert!(fx.sidebar.is_open());
    fx.header.toggle_sidebar();
    assert!(!fx.sidebar.is_open());
}

#[test]
fn test_search_query_is_held() {
    let fx = fixture();
    assert_eq!(fx.header.search_query(), "");
    fx.header.set_search_query("projects");
    assert_eq!(fx.header.search_query(), "projects");
}

#[test]
fn test_unknown_overlay_name() {
    let fx = fixture();
    assert!(fx.header.overlay("settings").is_none());
}
