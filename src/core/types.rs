//! src/core/types.rs
//!
//! Core type definitions for the overlay lifecycle
//!
//! This module defines the fundamental types used throughout the application:
//! - `OverlayId`: Identity of a dismissible menu (notifications, profile, ...)
//! - `OpenState`: Logical open/closed state of an overlay
//! - `TransitionState`: Visibility state driving mount/unmount timing
//! - `Theme` / `ThemeIcon`: The theme collaborator's vocabulary
//! - `Point` / `Rect` / `PointerEvent`: Headless pointer geometry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an overlay
///
/// Cheap to clone and compare; used as the registration key in the
/// outside-click detector and in log output.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct OverlayId(String);

impl OverlayId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Logical open/closed state of an overlay
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        self == OpenState::Open
    }
}

impl fmt::Display for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenState::Closed => write!(f, "closed"),
            OpenState::Open => write!(f, "open"),
        }
    }
}

/// Visibility state of an overlay's content
///
/// Content is mounted in every state except `Hidden`. `Entering` belongs
/// to the vocabulary so callers can style it, but showing is immediate and
/// the transition controller never produces it.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TransitionState {
    #[default]
    Hidden,
    Entering,
    Visible,
    Leaving,
}

impl TransitionState {
    /// Whether the content should be in the widget tree
    pub fn is_mounted(self) -> bool {
        self != TransitionState::Hidden
    }

    /// Whether the content should carry its "shown" styling (as opposed
    /// to the leave styling or nothing at all)
    pub fn is_shown(self) -> bool {
        matches!(self, TransitionState::Entering | TransitionState::Visible)
    }
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionState::Hidden => write!(f, "hidden"),
            TransitionState::Entering => write!(f, "entering"),
            TransitionState::Visible => write!(f, "visible"),
            TransitionState::Leaving => write!(f, "leaving"),
        }
    }
}

/// Colour scheme exposed by the theme collaborator
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the theme button: a moon invites switching to dark,
    /// a sun invites switching back to light.
    pub fn icon(self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Icon used by the theme toggle button
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    /// Symbolic icon name from the freedesktop icon theme
    pub fn icon_name(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "weather-clear-night-symbolic",
            ThemeIcon::Sun => "weather-clear-symbolic",
        }
    }
}

/// A point in root (window) coordinates
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in root coordinates
///
/// Edges are half-open: a point on the right or bottom edge is outside.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Kind of root-level pointer interaction
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PointerKind {
    #[default]
    Down,
    Click,
}

/// Headless pointer interaction observed at the root
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            kind: PointerKind::Down,
        }
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            kind: PointerKind::Click,
        }
    }
}
