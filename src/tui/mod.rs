//! TUI module for the interactive presenter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions over the navigator
//! - `view`: Pure rendering and mouse hit-testing
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
pub use state::App;
