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

//! src/core/mod.rs
//!
//! Core overlay lifecycle logic
//!
//! This module contains the headless state machines behind the header:
//! - Type definitions for overlays, transitions, themes and pointer events
//! - Outside-click detection over live anchor regions
//! - Per-overlay open/closed state and leave transition
//! - The overlay controller and the header composition
//!
//! Nothing here depends on GTK. Everything is driven through traits
//! (`AnchorRegion`, `TimerScheduler`, `ThemeProvider`, `SidebarToggle`) so it
//! can be tested without a display server.

pub mod detector;
pub mod header;
pub mod menu;
pub mod overlay;
pub mod overlay_state;
pub mod region;
pub mod scheduler;
pub mod transition;
pub mod types;

pub use detector::{OutsideClickDetector, Subscription, SubscriptionId};
pub use header::{Header, HeaderDeps, SidebarState, SidebarToggle, ThemeProvider, ThemeState};
pub use menu::{ActionError, MenuAction, MenuContent, MenuItem};
pub use overlay::{OverlayController, OverlayOptions, OverlaySnapshot};
pub use overlay_state::OverlayState;
pub use region::{AnchorRegion, RectRegion, RegionHit};
pub use scheduler::{ManualScheduler, TimerHandle, TimerScheduler};
pub use transition::{TransitionController, DEFAULT_LEAVE_DURATION};
pub use types::*;

#[cfg(test)]
mod tests;
