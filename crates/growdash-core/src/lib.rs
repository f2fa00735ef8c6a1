//! growdash-core — shared library for the growdash seller dashboard.
//!
//! Provides:
//! - `catalog` — fixed structural data: seller roster, recommendation list
//! - `model` — seller entities, joins, derived views, integrity errors
//! - `generate` — deterministic sampling of seller metrics from a seed
//! - `provider` — generate-once dataset provider
//! - `fixtures` — hand-authored datasets for the Goal/Recruitment/Onboarding/Win tabs
//! - `fmt` — shared formatting helpers (money, percent, growth)
//! - `view` — UI-agnostic table view models
//!
//! With `tui` feature (default):
//! - `tui` — TUI rendering (ratatui/crossterm), state, input, widgets

pub mod catalog;
pub mod fixtures;
pub mod fmt;
pub mod generate;
pub mod model;
pub mod provider;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;
