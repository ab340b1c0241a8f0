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

//! Widget-backed anchor regions
//!
//! An overlay's anchor is its trigger button plus, while mounted, its
//! dropdown. Membership is decided by widget ancestry at event time, so
//! layout changes after registration are picked up for free.

use std::cell::RefCell;

use gtk4::prelude::*;

use crate::core::{AnchorRegion, Point, RegionHit};

/// Pointer interaction picked at the window root
#[derive(Clone, Debug)]
pub struct WidgetPointer {
    /// Deepest widget under the pointer, if any
    pub target: Option<gtk4::Widget>,
    /// Position in window coordinates
    pub position: Point,
}

impl WidgetPointer {
    pub fn new(target: Option<gtk4::Widget>, position: Point) -> Self {
        Self { target, position }
    }
}

/// Set of widgets that count as "inside" an overlay
///
/// Widgets are held weakly. Once none of them is alive and attached to a
/// window, the region reports [`RegionHit::Detached`].
#[derive(Default)]
pub struct WidgetRegion {
    widgets: RefCell<Vec<glib::WeakRef<gtk4::Widget>>>,
}

impl WidgetRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `widget` (and therefore its descendants) to the region
    pub fn attach(&self, widget: &impl IsA<gtk4::Widget>) {
        let widget = widget.upcast_ref::<gtk4::Widget>();
        let mut widgets = self.widgets.borrow_mut();
        widgets.retain(|w| w.upgrade().is_some());
        if !widgets.iter().any(|w| w.upgrade().as_ref() == Some(widget)) {
            widgets.push(widget.downgrade());
        }
    }

    /// Removes `widget` from the region
    pub fn detach(&self, widget: &impl IsA<gtk4::Widget>) {
        let widget = widget.upcast_ref::<gtk4::Widget>();
        self.widgets
            .borrow_mut()
            .retain(|w| w.upgrade().is_some_and(|w| &w != widget));
    }

    /// Number of live widgets in the region
    pub fn len(&self) -> usize {
        self.live_widgets().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn live_widgets(&self) -> Vec<gtk4::Widget> {
        self.widgets
            .borrow()
            .iter()
            .filter_map(|w| w.upgrade())
            .collect()
    }
}

impl AnchorRegion<WidgetPointer> for WidgetRegion {
    fn hit_test(&self, event: &WidgetPointer) -> RegionHit {
        let rooted: Vec<gtk4::Widget> = self
            .live_widgets()
            .into_iter()
            .filter(|w| w.root().is_some())
            .collect();

        if rooted.is_empty() {
            return RegionHit::Detached;
        }

        let Some(target) = event.target.as_ref() else {
            return RegionHit::Outside;
        };

        if rooted.iter().any(|w| target == w || target.is_ancestor(w)) {
            RegionHit::Inside
        } else {
            RegionHit::Outside
        }
    }
}

impl std::fmt::Debug for WidgetRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegion")
            .field("widgets", &self.len())
            .finish()
    }
}
