//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod actions;
pub mod background;
pub mod diagnostics;
pub mod footer;
pub mod loading;
pub mod profile_card;
pub mod sidebar;
pub mod widgets;
