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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It builds the Controller once GTK is initialised,
//! since the theme and sidebar collaborators are GTK objects.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Builds main layout (overlay root, sidebar)
//!   ├─ Creates Controller (header model, anchor regions)
//!   ├─ Builds header row
//!   └─ Wires handlers to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::config::HeaderConfig;
use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::glib_scheduler::GlibScheduler;
use crate::ui::theme::{GtkSidebar, GtkTheme};
use crate::ui::Controller;

/// GTK4 Application showing the dashboard header
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Configuration handed to the Controller on activation
    config: Rc<HeaderConfig>,
}

impl App {
    /// Creates a new App from a loaded configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dashboard_header::config::HeaderConfig;
    /// use dashboard_header::ui::App;
    ///
    /// let app = App::new(HeaderConfig::default());
    /// ```
    pub fn new(config: HeaderConfig) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.dashboard-header")
            .build();

        Self {
            app,
            config: Rc::new(config),
        }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop. The function blocks until the
    /// application exits.
    pub fn run(self) {
        let config = self.config.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, &config);
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    ///
    /// The dropdown fade is stretched to the configured leave duration so
    /// the unmount lands when the fade ends.
    fn load_css(leave_duration_ms: u64) {
        let Some(display) = gdk::Display::default() else {
            tracing::warn!("no display, custom CSS not loaded");
            return;
        };

        let css = format!(
            "{}\n.dropdown {{ transition-duration: {}ms; }}\n",
            include_str!("style.css"),
            leave_duration_ms
        );
        let provider = CssProvider::new();
        provider.load_from_string(&css);

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, config: &HeaderConfig) {
        Self::load_css(config.leave_duration_ms);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Dashboard")
            .default_width(1000)
            .default_height(700)
            .build();

        let layout = build_main_layout();

        let controller = Rc::new(Controller::new(
            config.clone(),
            Rc::new(GlibScheduler::new()),
            Rc::new(GtkTheme::new(config.theme)),
            Rc::new(GtkSidebar::new(layout.sidebar.clone())),
        ));

        let header = build_header_bar(
            &config.search_placeholder,
            controller.header().theme_icon(),
        );
        layout.column.prepend(&header.widget);

        wire_up_handlers(&window, &layout.root, controller, &header);

        window.set_child(Some(&layout.root));
        window.present();

        tracing::info!(
            leave_ms = config.leave_duration_ms,
            theme = %config.theme,
            "dashboard header started"
        );
    }
}
