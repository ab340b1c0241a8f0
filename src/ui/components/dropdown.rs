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

//! Dropdown menu component
//!
//! Renders a [`MenuContent`] as a floating panel below its trigger.
//!
//! # Layout
//!
//! ```text
//!               ┌──────────────────────┐
//!               │ Messages          13 │
//!               │ Sales              2 │
//!               │ Alerts               │
//!               └──────────────────────┘
//! ```
//!
//! The panel is mounted into the window's `gtk4::Overlay` only while its
//! overlay is rendered. During the leave animation it carries the
//! `leaving` CSS class, which fades it out.

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Image, Label, ListBox, ListBoxRow, Orientation, SelectionMode};

use crate::core::{MenuContent, MenuItem};

/// CSS class applied while the leave animation runs
pub const LEAVING_CLASS: &str = "leaving";

/// Floating menu panel
#[derive(Clone, Debug)]
pub struct Dropdown {
    /// Root widget, added to and removed from the window overlay
    widget: GtkBox,
    /// One activatable row per menu item
    list_box: ListBox,
}

impl Dropdown {
    /// Creates the panel for `content`
    ///
    /// `name` becomes an extra CSS class so each menu can be styled apart.
    pub fn new(name: &str, content: &MenuContent) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .halign(Align::End)
            .valign(Align::Start)
            .width_request(220)
            .build();
        widget.add_css_class("dropdown");
        widget.add_css_class(name);

        let list_box = ListBox::builder()
            .selection_mode(SelectionMode::None)
            .activate_on_single_click(true)
            .build();

        for item in content.items() {
            list_box.append(&Self::build_row(item));
        }

        widget.append(&list_box);

        Self { widget, list_box }
    }

    fn build_row(item: &MenuItem) -> ListBoxRow {
        let row_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(8)
            .margin_start(12)
            .margin_end(12)
            .margin_top(6)
            .margin_bottom(6)
            .build();

        if let Some(icon) = &item.icon {
            row_box.append(&Image::from_icon_name(icon));
        }

        let label = Label::builder()
            .label(item.label.as_str())
            .xalign(0.0)
            .hexpand(true)
            .build();
        row_box.append(&label);

        if let Some(badge) = item.badge {
            let badge_label = Label::new(Some(&badge.to_string()));
            badge_label.add_css_class("badge");
            row_box.append(&badge_label);
        }

        let row = ListBoxRow::builder().child(&row_box).build();
        if let Some(href) = &item.href {
            row.set_tooltip_text(Some(href));
        }
        row
    }

    /// Calls `callback` with the index of every activated row
    pub fn connect_activate<F>(&self, callback: F)
    where
        F: Fn(usize) + 'static,
    {
        self.list_box.connect_row_activated(move |_list_box, row| {
            if let Ok(index) = usize::try_from(row.index()) {
                callback(index);
            }
        });
    }

    /// Switches between shown and leaving styling
    pub fn set_leaving(&self, leaving: bool) {
        if leaving {
            self.widget.add_css_class(LEAVING_CLASS);
        } else {
            self.widget.remove_css_class(LEAVING_CLASS);
        }
    }

    /// Whether the panel is currently in a widget tree
    pub fn is_mounted(&self) -> bool {
        self.widget.parent().is_some()
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
