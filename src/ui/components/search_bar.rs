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

//! Search bar component
//!
//! Search entry in the middle of the header.

use gtk4::{prelude::*, SearchEntry};

/// Header search entry
pub struct SearchBar {
    /// Root widget (search entry)
    widget: SearchEntry,
}

impl SearchBar {
    /// Creates a search entry with the given placeholder
    ///
    /// Returns just the widget - parent is responsible for wiring
    /// up what a query does.
    ///
    /// # Example
    /// ```no_run
    /// use dashboard_header::ui::components::SearchBar;
    /// use gtk4::prelude::*;
    ///
    /// let search_bar = SearchBar::new("Search for projects");
    ///
    /// search_bar.connect_query_changed(|query| {
    ///     println!("query: {}", query);
    /// });
    /// ```
    pub fn new(placeholder: &str) -> Self {
        let widget = SearchEntry::builder()
            .placeholder_text(placeholder)
            .hexpand(true)
            .build();
        widget.add_css_class("header-search");

        Self { widget }
    }

    /// Calls `callback` with the current text whenever the query changes
    pub fn connect_query_changed<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.widget.connect_search_changed(move |entry| {
            callback(entry.text().as_str());
        });
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &SearchEntry {
        &self.widget
    }
}
