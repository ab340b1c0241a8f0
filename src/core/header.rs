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

//! Header composition
//!
//! Two independent overlays (notifications, profile) sharing one
//! outside-click detector, plus pass-through access to the theme and
//! sidebar collaborators. Both menus may be open at the same time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::detector::OutsideClickDetector;
use crate::core::overlay::{OverlayController, OverlayOptions};
use crate::core::region::AnchorRegion;
use crate::core::scheduler::TimerScheduler;
use crate::core::types::{OverlayId, PointerEvent, Theme, ThemeIcon};

/// Name of the notifications overlay
pub const NOTIFICATIONS: &str = "notifications";
/// Name of the profile overlay
pub const PROFILE: &str = "profile";

/// Theme collaborator
pub trait ThemeProvider {
    fn theme(&self) -> Theme;
    fn toggle_theme(&self);
}

/// Sidebar collaborator
pub trait SidebarToggle {
    fn toggle_sidebar(&self);
}

/// In-memory theme holder
#[derive(Debug, Default)]
pub struct ThemeState {
    theme: Cell<Theme>,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Cell::new(theme),
        }
    }
}

impl ThemeProvider for ThemeState {
    fn theme(&self) -> Theme {
        self.theme.get()
    }

    fn toggle_theme(&self) {
        self.theme.set(self.theme.get().toggled());
    }
}

/// In-memory sidebar holder
#[derive(Debug, Default)]
pub struct SidebarState {
    open: Cell<bool>,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl SidebarToggle for SidebarState {
    fn toggle_sidebar(&self) {
        self.open.set(!self.open.get());
    }
}

/// Everything the header needs from its surroundings
pub struct HeaderDeps<E: 'static = PointerEvent> {
    pub theme: Rc<dyn ThemeProvider>,
    pub sidebar: Rc<dyn SidebarToggle>,
    pub scheduler: Rc<dyn TimerScheduler>,
    pub notifications_anchor: Rc<dyn AnchorRegion<E>>,
    pub profile_anchor: Rc<dyn AnchorRegion<E>>,
}

/// The dashboard header
pub struct Header<E: 'static = PointerEvent> {
    notifications: OverlayController<E>,
    profile: OverlayController<E>,
    detector: OutsideClickDetector<E>,
    theme: Rc<dyn ThemeProvider>,
    sidebar: Rc<dyn SidebarToggle>,
    search_query: RefCell<String>,
}

impl<E: 'static> Header<E> {
    /// Composes the header from its collaborators
    pub fn new(deps: HeaderDeps<E>, options: OverlayOptions) -> Self {
        let detector = OutsideClickDetector::new();

        let notifications = OverlayController::new(
            OverlayId::new(NOTIFICATIONS),
            deps.notifications_anchor,
            detector.clone(),
            deps.scheduler.clone(),
            options,
        );
        let profile = OverlayController::new(
            OverlayId::new(PROFILE),
            deps.profile_anchor,
            detector.clone(),
            deps.scheduler,
            options,
        );

        tracing::debug!(
            leave_ms = options.leave_duration.as_millis() as u64,
            "header composed"
        );

        Self {
            notifications,
            profile,
            detector,
            theme: deps.theme,
            sidebar: deps.sidebar,
            search_query: RefCell::new(String::new()),
        }
    }

    pub fn notifications(&self) -> &OverlayController<E> {
        &self.notifications
    }

    pub fn profile(&self) -> &OverlayController<E> {
        &self.profile
    }

    /// Looks up an overlay by name
    pub fn overlay(&self, name: &str) -> Option<&OverlayController<E>> {
        match name {
            NOTIFICATIONS => Some(&self.notifications),
            PROFILE => Some(&self.profile),
            _ => None,
        }
    }

    pub fn overlays(&self) -> [&OverlayController<E>; 2] {
        [&self.notifications, &self.profile]
    }

    pub fn detector(&self) -> &OutsideClickDetector<E> {
        &self.detector
    }

    /// Forwards a root-level pointer interaction to the shared detector
    ///
    /// Returns the number of overlays that were signalled.
    pub fn dispatch_pointer(&self, event: &E) -> usize {
        self.detector.dispatch(event)
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn theme_icon(&self) -> ThemeIcon {
        self.theme().icon()
    }

    pub fn toggle_theme(&self) {
        self.theme.toggle_theme();
        tracing::debug!(theme = %self.theme(), "theme toggled");
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar.toggle_sidebar();
        tracing::debug!("sidebar toggled");
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        *self.search_query.borrow_mut() = query.into();
    }

    pub fn search_query(&self) -> String {
        self.search_query.borrow().clone()
    }
}
