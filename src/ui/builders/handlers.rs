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

//! Event handler wiring
//!
//! Connects the header widgets, the dropdowns and the window-level pointer
//! gesture to the [`Controller`].

use gtk4::{
    accessible::State, prelude::*, AlertDialog, ApplicationWindow, Button, GestureClick, Overlay,
    PickFlags, PropagationPhase,
};
use std::rc::Rc;

use crate::core::{
    header::{NOTIFICATIONS, PROFILE},
    Point,
};
use crate::ui::builders::header::{HeaderWidgets, HEADER_HEIGHT};
use crate::ui::components::Dropdown;
use crate::ui::region::WidgetPointer;
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
///
/// Sets up:
/// - Sidebar, theme and search handlers
/// - Both dropdowns (trigger, mount/unmount, leave styling, activation)
/// - Alert dialogs for items configured with an alert
/// - The capture-phase pointer gesture feeding outside-click detection
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    root: &Overlay,
    controller: Rc<Controller>,
    widgets: &HeaderWidgets,
) {
    let controller_for_sidebar = controller.clone();
    widgets.sidebar_button.connect_clicked(move |_| {
        controller_for_sidebar.header().toggle_sidebar();
    });

    let controller_for_theme = controller.clone();
    widgets.theme_button.connect_clicked(move |button| {
        let header = controller_for_theme.header();
        header.toggle_theme();
        button.set_icon_name(header.theme_icon().icon_name());
    });

    let controller_for_search = controller.clone();
    widgets.search_bar.connect_query_changed(move |query| {
        controller_for_search.search(query);
    });

    wire_dropdown(root, &controller, NOTIFICATIONS, &widgets.notifications_button, 56);
    wire_dropdown(root, &controller, PROFILE, &widgets.profile_button, 12);

    let window_for_alerts = window.downgrade();
    controller.connect_alert(move |message| {
        let Some(window) = window_for_alerts.upgrade() else {
            return;
        };
        let dialog = AlertDialog::builder()
            .modal(true)
            .message(message)
            .buttons(vec!["OK"])
            .build();
        dialog.show(Some(&window));
    });

    // Capture phase runs before any child sees the press
    let gesture = GestureClick::new();
    gesture.set_button(0);
    gesture.set_propagation_phase(PropagationPhase::Capture);

    let window_for_pick = window.downgrade();
    let controller_for_pointer = controller.clone();
    gesture.connect_pressed(move |_gesture, _n_press, x, y| {
        let Some(window) = window_for_pick.upgrade() else {
            return;
        };
        let target = window.pick(x, y, PickFlags::DEFAULT);
        controller_for_pointer.dispatch_pointer(&WidgetPointer::new(target, Point::new(x, y)));
    });
    window.add_controller(gesture);
}

/// Connects one menu: its trigger, its dropdown and the view updates
fn wire_dropdown(
    root: &Overlay,
    controller: &Rc<Controller>,
    name: &'static str,
    trigger: &Button,
    margin_end: i32,
) {
    let (Some(overlay), Some(region)) = (controller.overlay(name), controller.region(name)) else {
        tracing::warn!(menu = name, "no such menu, dropdown not wired");
        return;
    };

    region.attach(trigger);

    let dropdown = Dropdown::new(name, &overlay.content());
    dropdown.widget().set_margin_top(HEADER_HEIGHT);
    dropdown.widget().set_margin_end(margin_end);

    let controller_for_trigger = controller.clone();
    trigger.connect_clicked(move |_| {
        controller_for_trigger.toggle_menu(name);
    });

    let controller_for_rows = controller.clone();
    dropdown.connect_activate(move |index| {
        // Failures are logged by the controller
        let _ = controller_for_rows.activate_item(name, index);
    });

    let root = root.clone();
    let region = region.clone();
    let trigger = trigger.clone();
    overlay.connect_changed(move |snapshot| {
        let mounted = snapshot.is_open_for_render();
        if mounted && !dropdown.is_mounted() {
            root.add_overlay(dropdown.widget());
            region.attach(dropdown.widget());
        } else if !mounted && dropdown.is_mounted() {
            region.detach(dropdown.widget());
            root.remove_overlay(dropdown.widget());
        }

        dropdown.set_leaving(mounted && !snapshot.is_visible_for_animation_class());

        let expanded = snapshot.open.is_open();
        trigger.update_state(&[State::Expanded(Some(expanded))]);
        if expanded {
            trigger.add_css_class("active");
        } else {
            trigger.remove_css_class("active");
        }
    });
}
