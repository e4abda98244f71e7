//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: app name, loaded country, spinner and status
//! - `KeyHints`: the keys that currently do something
//! - `ToastStack`: transient notifications
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it
//! each frame together with the props it renders:
//! - `CountryPickerState` / `CountryPicker`
//! - `SearchBox` (owns its buffer, implements `EventHandler`)
//! - `TeamBrowserState` / `TeamBrowser`
//! - `RosterViewState` / `RosterView`
//!
//! Components receive view models from `tui::view_model`, never `App`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── text.rs            (truncation, padding, centered rects)
//! ├── title_bar.rs
//! ├── key_hints.rs
//! ├── country_picker.rs
//! ├── search_box.rs
//! ├── team_browser.rs    (grid cards / list rows)
//! ├── roster_view.rs     (squad overlay)
//! └── toast.rs
//! ```

pub mod text;

mod country_picker;
mod key_hints;
mod roster_view;
mod search_box;
mod team_browser;
mod title_bar;
mod toast;

pub use country_picker::{CountryPicker, CountryPickerEvent, CountryPickerState};
pub use key_hints::KeyHints;
pub use roster_view::{RosterContent, RosterView, RosterViewState};
pub use search_box::{SearchBox, SearchEvent};
pub use team_browser::{EmptyReason, TeamBrowser, TeamBrowserEvent, TeamBrowserState};
pub use title_bar::TitleBar;
pub use toast::ToastStack;
