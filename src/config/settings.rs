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

//! Configuration values and their defaults
//!
//! The defaults reproduce the stock dashboard header: a 150 ms leave
//! animation, a light theme, three notification entries and three profile
//! entries.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::Duration;

use crate::config::ConfigError;
use crate::core::{MenuContent, MenuItem, OverlayOptions, Theme};

/// Callback used for items configured with an `alert` message
pub type AlertSink = Rc<dyn Fn(&str)>;

/// One menu entry as written in the configuration file
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MenuItemConfig {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Message raised through the alert sink when the item is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl MenuItemConfig {
    fn link(label: &str) -> Self {
        Self {
            label: label.to_string(),
            badge: None,
            href: Some("#".to_string()),
            icon: None,
            alert: None,
        }
    }

    fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    fn with_alert(mut self, message: &str) -> Self {
        self.href = None;
        self.alert = Some(message.to_string());
        self
    }

    /// Builds the runtime menu item, wiring `alert` to `on_alert`
    pub fn to_menu_item(&self, on_alert: &AlertSink) -> MenuItem {
        let mut item = MenuItem::new(self.label.clone());
        if let Some(badge) = self.badge {
            item = item.with_badge(badge);
        }
        if let Some(href) = &self.href {
            item = item.with_href(href.clone());
        }
        if let Some(icon) = &self.icon {
            item = item.with_icon(icon.clone());
        }
        if let Some(message) = &self.alert {
            let message = message.clone();
            let sink = on_alert.clone();
            item = item.with_action(move || {
                sink(&message);
                Ok(())
            });
        }
        item
    }
}

/// Complete header configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Duration of the menus' leave animation in milliseconds
    pub leave_duration_ms: u64,
    /// Close a menu before running the activated item's action
    pub close_on_activate: bool,
    /// Theme at startup
    pub theme: Theme,
    /// Placeholder of the search entry
    pub search_placeholder: String,
    /// Items of the notifications menu
    pub notifications: Vec<MenuItemConfig>,
    /// Items of the profile menu
    pub profile: Vec<MenuItemConfig>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            leave_duration_ms: 150,
            close_on_activate: true,
            theme: Theme::Light,
            search_placeholder: "Search for projects".to_string(),
            notifications: vec![
                MenuItemConfig::link("Messages").with_badge(13),
                MenuItemConfig::link("Sales").with_badge(2),
                MenuItemConfig::link("Alerts").with_alert("Alerts!"),
            ],
            profile: vec![
                MenuItemConfig::link("Profile").with_icon("avatar-default-symbolic"),
                MenuItemConfig::link("Settings").with_icon("emblem-system-symbolic"),
                MenuItemConfig::link("Log out")
                    .with_icon("system-log-out-symbolic")
                    .with_alert("Log out!"),
            ],
        }
    }
}

impl HeaderConfig {
    /// Upper bound for the leave animation
    pub const MAX_LEAVE_DURATION_MS: u64 = 10_000;

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leave_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "leave_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.leave_duration_ms > Self::MAX_LEAVE_DURATION_MS {
            return Err(ConfigError::Invalid(format!(
                "leave_duration_ms must be at most {}",
                Self::MAX_LEAVE_DURATION_MS
            )));
        }
        if let Some(item) = self
            .notifications
            .iter()
            .chain(self.profile.iter())
            .find(|item| item.label.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!("menu item with empty label: {:?}", item)));
        }
        Ok(())
    }

    pub fn leave_duration(&self) -> Duration {
        Duration::from_millis(self.leave_duration_ms)
    }

    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            leave_duration: self.leave_duration(),
            close_on_activate: self.close_on_activate,
        }
    }

    pub fn notifications_content(&self, on_alert: &AlertSink) -> MenuContent {
        self.notifications.iter().map(|i| i.to_menu_item(on_alert)).collect()
    }

    pub fn profile_content(&self, on_alert: &AlertSink) -> MenuContent {
        self.profile.iter().map(|i| i.to_menu_item(on_alert)).collect()
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
