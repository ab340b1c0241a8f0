//! MVC Controller - Mediates between Model (Header) and View (GTK4 widgets)
//!
//! # Responsibilities
//!
//! - Compose the [`Header`] with widget-backed anchor regions
//! - Fill both menus from the configuration
//! - Route pointer events, menu activations and alerts
//!
//! # Architecture
//!
//! The Controller holds the headless model and the anchor regions but
//! never builds widgets. The view attaches its trigger and dropdown widgets
//! to the regions and observes the overlays for changes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AlertSink, HeaderConfig};
use crate::core::{
    header::{NOTIFICATIONS, PROFILE},
    ActionError, Header, HeaderDeps, OverlayController, SidebarToggle, ThemeProvider,
    TimerScheduler,
};
use crate::ui::region::{WidgetPointer, WidgetRegion};

/// MVC Controller coordinating the header model and its view
pub struct Controller {
    /// Configuration the header was built from
    config: HeaderConfig,
    /// Headless header model
    header: Header<WidgetPointer>,
    /// Widgets counting as inside the notifications menu
    notifications_region: Rc<WidgetRegion>,
    /// Widgets counting as inside the profile menu
    profile_region: Rc<WidgetRegion>,
    /// Receiver for item alerts, installed by the view
    alert_handler: Rc<RefCell<Option<AlertSink>>>,
}

impl Controller {
    /// Creates a Controller with both menus closed
    ///
    /// # Arguments
    ///
    /// * `config` - Validated header configuration
    /// * `scheduler` - Timer source for the leave transitions
    /// * `theme` - Theme collaborator
    /// * `sidebar` - Sidebar collaborator
    pub fn new(
        config: HeaderConfig,
        scheduler: Rc<dyn TimerScheduler>,
        theme: Rc<dyn ThemeProvider>,
        sidebar: Rc<dyn SidebarToggle>,
    ) -> Self {
        let notifications_region = Rc::new(WidgetRegion::new());
        let profile_region = Rc::new(WidgetRegion::new());

        let header = Header::new(
            HeaderDeps {
                theme,
                sidebar,
                scheduler,
                notifications_anchor: notifications_region.clone(),
                profile_anchor: profile_region.clone(),
            },
            config.overlay_options(),
        );

        let alert_handler: Rc<RefCell<Option<AlertSink>>> = Rc::new(RefCell::new(None));
        let handler = alert_handler.clone();
        let alerts: AlertSink = Rc::new(move |message: &str| {
            let current = handler.borrow().clone();
            match current {
                Some(show) => show(message),
                None => tracing::info!(alert = message, "alert raised with no handler installed"),
            }
        });

        header.notifications().set_content(config.notifications_content(&alerts));
        header.profile().set_content(config.profile_content(&alerts));

        Self {
            config,
            header,
            notifications_region,
            profile_region,
            alert_handler,
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn header(&self) -> &Header<WidgetPointer> {
        &self.header
    }

    /// Returns the overlay with the given name
    pub fn overlay(&self, name: &str) -> Option<&OverlayController<WidgetPointer>> {
        self.header.overlay(name)
    }

    /// Returns the anchor region of the named overlay
    pub fn region(&self, name: &str) -> Option<&Rc<WidgetRegion>> {
        match name {
            NOTIFICATIONS => Some(&self.notifications_region),
            PROFILE => Some(&self.profile_region),
            _ => None,
        }
    }

    /// Installs the receiver for item alerts, replacing any previous one
    pub fn connect_alert<F>(&self, handler: F)
    where
        F: Fn(&str) + 'static,
    {
        *self.alert_handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Forwards a window-level pointer press to the outside-click detector
    pub fn dispatch_pointer(&self, event: &WidgetPointer) -> usize {
        self.header.dispatch_pointer(event)
    }

    /// Trigger click on the named menu
    ///
    /// Returns `false` for an unknown menu.
    pub fn toggle_menu(&self, name: &str) -> bool {
        match self.header.overlay(name) {
            Some(overlay) => {
                overlay.trigger();
                true
            }
            None => {
                tracing::warn!(menu = name, "toggle requested for unknown menu");
                false
            }
        }
    }

    /// Activates an item of the named menu
    ///
    /// Failures are logged here and returned for the view to report.
    pub fn activate_item(&self, name: &str, index: usize) -> Result<(), ActionError> {
        let Some(overlay) = self.header.overlay(name) else {
            tracing::warn!(menu = name, "activation requested for unknown menu");
            return Err(ActionError::NoSuchItem {
                overlay: name.into(),
                index,
            });
        };

        overlay.activate_item(index).inspect_err(|e| {
            tracing::error!(menu = name, index, error = %e, "menu item failed");
        })
    }

    /// Records the search query typed into the header
    pub fn search(&self, query: &str) {
        tracing::debug!(query, "search changed");
        self.header.set_search_query(query);
    }
}
