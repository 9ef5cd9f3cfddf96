//! # stars-viewer
//!
//! A small web viewer over a snapshot of starred GitHub repositories. The
//! snapshot is a JSON file loaded once at startup; every request runs an
//! in-memory query against it and renders HTML.
//!
//! ## Architecture
//!
//! ```text
//!        stars.json ──load once──▶ RepoStore (records + language index)
//!                                          │ Arc, read-only
//!                                          ▼
//!   GET /search?q&lang&sort ──▶ ┌────────────────────────┐
//!                               │ 1. language filter     │
//!                               │    (exact match)       │
//!                               │ 2. fuzzy match         │
//!                               │    (only if q != "")   │
//!                               │ 3. sort by key         │
//!                               │    (only if q == "")   │
//!                               └───────────┬────────────┘
//!                                           ▼
//!                                SearchResult ──▶ Templates ──▶ HTML
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Command-line flags with environment fallbacks
//! - [`models`] - `Repository`, `SortKey`, request params and `SearchResult`
//! - [`store`] - Data file loading and the derived language index
//! - [`search::fuzzy`] - Subsequence matcher with position-aware scoring
//! - [`search::query`] - The filter → match → sort pipeline
//! - [`render`] - Embedded templates and presentation filters
//! - [`api`] - Axum handlers and the router
//! - [`state`] - Immutable shared state handed to every handler
//! - [`errors`] - Startup and per-request error types

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod search;
pub mod state;
pub mod store;
