//! UI module tests
//!
//! Headless tests: nothing here initialises GTK or needs a display.
//!
//! - Controller tests (menus, outside clicks, alerts, activation)
//! - GLib scheduler tests (timers on a private main context)
