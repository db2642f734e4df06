//! Tally - Terminal-based personal finance ledger
//!
//! This library provides the core functionality for the tally ledger
//! application. It tracks income and expense entries in a single JSON
//! file, expands recurring templates into dated occurrences, and turns
//! the result into monthly, yearly, and per-category reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, months, schedules)
//! - `ledger`: The in-memory entry store
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Pure report computation
//! - `display`: Plain-text rendering of entries and reports
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
