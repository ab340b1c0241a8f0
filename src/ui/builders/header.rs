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

//! Header bar builder
//!
//! Creates the dashboard header row:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ ☰  [ Search for projects        ]          ☾   🔔   👤     │
//! └────────────────────────────────────────────────────────────┘
//! ```

use gtk4::{prelude::*, Align, Box as GtkBox, Button, Orientation};

use crate::core::ThemeIcon;
use crate::ui::components::SearchBar;

/// Height of the header row in pixels; dropdowns are placed below it
pub const HEADER_HEIGHT: i32 = 56;

/// Widgets of the header row that handlers are wired to
pub struct HeaderWidgets {
    /// Root widget (horizontal box)
    pub widget: GtkBox,
    pub sidebar_button: Button,
    pub search_bar: SearchBar,
    pub theme_button: Button,
    pub notifications_button: Button,
    pub profile_button: Button,
}

fn icon_button(icon_name: &str, tooltip: &str) -> Button {
    let button = Button::builder()
        .icon_name(icon_name)
        .tooltip_text(tooltip)
        .valign(Align::Center)
        .build();
    button.add_css_class("flat");
    button.add_css_class("header-button");
    button
}

/// Builds the header row
///
/// # Arguments
///
/// * `search_placeholder` - Placeholder of the search entry
/// * `theme_icon` - Icon for the theme button at startup
pub fn build_header_bar(search_placeholder: &str, theme_icon: ThemeIcon) -> HeaderWidgets {
    let widget = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .spacing(8)
        .height_request(HEADER_HEIGHT)
        .margin_start(12)
        .margin_end(12)
        .build();
    widget.add_css_class("dashboard-header");

    let sidebar_button = icon_button("open-menu-symbolic", "Toggle sidebar");
    widget.append(&sidebar_button);

    let search_bar = SearchBar::new(search_placeholder);
    search_bar.widget().set_valign(Align::Center);
    widget.append(search_bar.widget());

    let theme_button = icon_button(theme_icon.icon_name(), "Toggle theme");
    widget.append(&theme_button);

    let notifications_button = icon_button("preferences-system-notifications-symbolic", "Notifications");
    widget.append(&notifications_button);

    let profile_button = icon_button("avatar-default-symbolic", "Profile");
    widget.append(&profile_button);

    for trigger in [&notifications_button, &profile_button] {
        trigger.update_state(&[gtk4::accessible::State::Expanded(Some(false))]);
    }

    HeaderWidgets {
        widget,
        sidebar_button,
        search_bar,
        theme_button,
        notifications_button,
        profile_button,
    }
}
