//! Reusable UI components
//!
//! - `keybindings` - View-aware key registry shared by input, nav bar, and help
//! - `nav_bar` - Bottom hint line
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
