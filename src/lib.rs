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

//! Dashboard header
//!
//! A dashboard header with two dismissible dropdown menus (notifications and
//! profile), a theme toggle and a sidebar toggle, rendered with GTK4.
//!
//! # Features
//!
//! - **Outside-click dismissal:** One shared detector closes any open menu
//!   when the pointer goes down outside its trigger and dropdown
//! - **Leave transitions:** A closed menu stays mounted for its leave
//!   animation, and reopening mid-animation cancels the pending unmount
//! - **Isolated actions:** A failing menu action is logged and never takes
//!   the header down
//! - **Headless core:** Everything except the widgets runs without a display
//!
//! # Architecture
//!
//! - **`core`:** State machines (detector, open state, transition, controller, header)
//! - **`config`:** JSON configuration with defaults
//! - **`logging`:** `tracing` subscriber setup
//! - **`ui`:** GTK4 front end
//!
//! # Examples
//!
//! ## Driving the header without a display
//!
//! ```
//! use dashboard_header::core::{
//!     Header, HeaderDeps, ManualScheduler, OverlayOptions, PointerEvent, Rect, RectRegion,
//!     SidebarState, ThemeState,
//! };
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let header: Header = Header::new(
//!     HeaderDeps {
//!         theme: Rc::new(ThemeState::default()),
//!         sidebar: Rc::new(SidebarState::default()),
//!         scheduler: scheduler.clone(),
//!         notifications_anchor: Rc::new(RectRegion::new(Rect::new(800.0, 0.0, 40.0, 40.0))),
//!         profile_anchor: Rc::new(RectRegion::new(Rect::new(850.0, 0.0, 40.0, 40.0))),
//!     },
//!     OverlayOptions::default(),
//! );
//!
//! header.notifications().trigger();
//! assert!(header.notifications().is_open());
//!
//! header.dispatch_pointer(&PointerEvent::down(10.0, 300.0));
//! assert!(!header.notifications().is_open());
//! assert!(header.notifications().is_open_for_render());
//!
//! scheduler.advance(Duration::from_millis(150));
//! assert!(!header.notifications().is_open_for_render());
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use dashboard_header::config::HeaderConfig;
//! use dashboard_header::ui::App;
//!
//! let app = App::new(HeaderConfig::default());
//! app.run(); // Blocks until window closes
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Header, OverlayController, OverlayId, PointerEvent, Theme, TransitionState};
