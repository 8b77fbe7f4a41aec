//! # Core Application Logic
//!
//! This module contains Quill's view-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No timers.     │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────▼─────────────┐
//!                    │  runtime::EffectRunner  │
//!                    │  (timers, service calls)│
//!                    └───────────┬─────────────┘
//!                                │ Action
//!                    ┌───────────▼─────────────┐
//!                    │    TUI adapter          │
//!                    │    (ratatui)            │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all view state
//! - [`action`]: The `Action` enum, the `Effect` enum and `update()`
//! - [`writing`]: Writing Assistant state machine
//! - [`translation`]: Translation state machine
//! - [`language`]: Languages and the configurable language lists
//! - [`route`]: Routes, tabs and mountable views
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod language;
pub mod route;
pub mod state;
pub mod translation;
pub mod writing;
