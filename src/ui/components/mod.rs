//! UI Components
//!
//! Reusable GTK4 widgets for the dashboard header.
//!
//! # Components
//!
//! - `dropdown.rs` - Floating menu panel with leave styling
//! - `search_bar.rs` - Header search entry

mod dropdown;
mod search_bar;

pub use dropdown::{Dropdown, LEAVING_CLASS};
pub use search_bar::SearchBar;
