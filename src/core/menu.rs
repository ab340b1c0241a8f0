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

//! Menu content
//!
//! The items shown inside an overlay. The overlay lifecycle never looks
//! inside them; it only hands an item's action to [`MenuItem::activate`],
//! which isolates the call so a failing handler cannot disturb state that
//! was already committed.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use thiserror::Error;

use crate::core::types::OverlayId;

/// Activation handler supplied by the caller
pub type MenuAction = Rc<dyn Fn() -> anyhow::Result<()>>;

/// Errors reported when activating a menu item
#[derive(Debug, Error)]
pub enum ActionError {
    /// No item at this position
    #[error("No menu item {index} in {overlay}")]
    NoSuchItem { overlay: OverlayId, index: usize },
    /// The handler returned an error
    #[error("Action '{label}' failed: {message}")]
    Failed { label: String, message: String },
    /// The handler panicked
    #[error("Action '{label}' panicked: {message}")]
    Panicked { label: String, message: String },
}

/// One actionable entry in a menu
#[derive(Clone)]
pub struct MenuItem {
    /// Text shown to the user
    pub label: String,
    /// Optional counter shown next to the label
    pub badge: Option<u32>,
    /// Link target for items that navigate instead of acting
    pub href: Option<String>,
    /// Symbolic icon name
    pub icon: Option<String>,
    action: Option<MenuAction>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: None,
            href: None,
            icon: None,
            action: None,
        }
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
    {
        self.action = Some(Rc::new(action));
        self
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Runs the item's action, isolating errors and panics
    ///
    /// Items without an action succeed trivially. Failures are logged
    /// and returned; they never propagate as a panic.
    pub fn activate(&self) -> Result<(), ActionError> {
        let Some(action) = &self.action else {
            return Ok(());
        };

        match catch_unwind(AssertUnwindSafe(|| action())) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                tracing::error!(label = %self.label, error = %e, "menu action failed");
                Err(ActionError::Failed {
                    label: self.label.clone(),
                    message: e.to_string(),
                })
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(label = %self.label, %message, "menu action panicked");
                Err(ActionError::Panicked {
                    label: self.label.clone(),
                    message,
                })
            }
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("badge", &self.badge)
            .field("href", &self.href)
            .field("icon", &self.icon)
            .field("has_action", &self.has_action())
            .finish()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(badge) = self.badge {
            write!(f, " ({})", badge)?;
        }
        Ok(())
    }
}

/// Ordered list of menu items
#[derive(Clone, Debug, Default)]
pub struct MenuContent {
    items: Vec<MenuItem>,
}

impl MenuContent {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }
}

impl FromIterator<MenuItem> for MenuContent {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
