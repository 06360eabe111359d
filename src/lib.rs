//! pitch-deck: present a fixed business-plan slide deck in the terminal.

pub mod config;
pub mod content;
pub mod deck;
pub mod report;
pub mod tui;
pub mod types;
