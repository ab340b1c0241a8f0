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

//! Layout builder
//!
//! Creates the window structure around the header.

use gtk4::{
    prelude::*, Box as GtkBox, Label, Orientation, Overlay, Revealer, RevealerTransitionType,
    Separator,
};

/// Main window layout
pub struct MainLayout {
    /// Window child; dropdowns are mounted as overlay children of it
    pub root: Overlay,
    /// Vertical column the header row is prepended to
    pub column: GtkBox,
    /// Sidebar revealer toggled by the hamburger button
    pub sidebar: Revealer,
}

/// Builds the main application layout
///
/// Creates a `gtk4::Overlay` whose main child is a vertical box with:
/// - Room for the header row at the top
/// - A horizontal box with the sidebar and the page body
pub fn build_main_layout() -> MainLayout {
    let column = GtkBox::new(Orientation::Vertical, 0);

    let body = GtkBox::new(Orientation::Horizontal, 0);
    body.set_vexpand(true);

    let nav = GtkBox::builder()
        .orientation(Orientation::Vertical)
        .spacing(6)
        .margin_start(12)
        .margin_end(12)
        .margin_top(12)
        .width_request(200)
        .build();
    nav.add_css_class("sidebar");
    for entry in ["Dashboard", "Forms", "Cards", "Charts", "Tables"] {
        nav.append(&Label::builder().label(entry).xalign(0.0).build());
    }

    let sidebar = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideRight)
        .transition_duration(200)
        .reveal_child(false)
        .child(&nav)
        .build();
    body.append(&sidebar);

    let page = Label::builder().label("Dashboard").hexpand(true).build();
    page.add_css_class("title-1");
    body.append(&page);

    column.append(&Separator::new(Orientation::Horizontal));
    column.append(&body);

    let root = Overlay::new();
    root.set_child(Some(&column));

    MainLayout {
        root,
        column,
        sidebar,
    }
}
