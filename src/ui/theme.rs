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

//! GTK-backed theme and sidebar collaborators

use std::cell::Cell;

use gtk4::Revealer;

use crate::core::{SidebarToggle, Theme, ThemeProvider};

/// Theme provider that drives `gtk-application-prefer-dark-theme`
#[derive(Debug)]
pub struct GtkTheme {
    theme: Cell<Theme>,
}

impl GtkTheme {
    /// Creates the provider and applies `theme` right away
    pub fn new(theme: Theme) -> Self {
        let provider = Self {
            theme: Cell::new(theme),
        };
        provider.apply();
        provider
    }

    fn apply(&self) {
        match gtk4::Settings::default() {
            Some(settings) => {
                settings.set_gtk_application_prefer_dark_theme(self.theme.get() == Theme::Dark)
            }
            None => tracing::warn!("no GTK settings available, theme not applied"),
        }
    }
}

impl ThemeProvider for GtkTheme {
    fn theme(&self) -> Theme {
        self.theme.get()
    }

    fn toggle_theme(&self) {
        self.theme.set(self.theme.get().toggled());
        self.apply();
    }
}

/// Sidebar shown and hidden through a [`Revealer`]
#[derive(Debug)]
pub struct GtkSidebar {
    revealer: Revealer,
}

impl GtkSidebar {
    pub fn new(revealer: Revealer) -> Self {
        Self { revealer }
    }

    pub fn widget(&self) -> &Revealer {
        &self.revealer
    }
}

impl SidebarToggle for GtkSidebar {
    fn toggle_sidebar(&self) {
        self.revealer.set_reveal_child(!self.revealer.reveals_child());
    }
}
