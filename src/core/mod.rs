//! # Core Application Logic
//!
//! This module contains Pitchside's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    API     │
//!          │  Adapter   │                │  (fetches  │
//!          │ (ratatui)  │                │  via tokio)│
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`selection`]: Teams, filter, display mode, open roster
//! - [`action`]: The `Action` enum and `update()`
//! - [`filter`]: Free-text team matching
//! - [`request`]: Request tokens and loading flags
//! - [`notify`]: Toast queue
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod filter;
pub mod notify;
pub mod request;
pub mod selection;
pub mod state;
