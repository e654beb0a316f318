// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the
//! archive. Each spec focuses on a single page and encodes *where the ground
//! truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** for remote pages (currently only the contest
//!   archive listing).
//! - **Tolerant extraction** using `core::html` helpers (case-insensitive
//!   tag blocks, tag stripping, whitespace/entity normalization) and minimal
//!   hand-rolled scanning where it improves resilience.
//! - **Light shaping** of results into small record structs.
//!
//! ## What does **not** live here
//! - **Rated-slug filtering, table loading, JSON output** — that is the
//!   aggregator's job (`src/aggregate.rs`).
//! - **Networking policy** — specs call `core::net::http_get` and inherit
//!   its one-shot, no-retry behavior.
//!
//! ## Conventions & invariants
//! - **Case-insensitive** tag detection; avoid brittle full-document regexes.
//! - Prefer **local scanning within known blocks** (`<tbody>…</tbody>`,
//!   `<tr>…</tr>`).
//! - Rows that don't carry the expected cells are **skipped with a log
//!   line**, never fatal — the archive page mixes header and decorative rows
//!   into its tables.
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured markup; see
//!   `tests/archive_parse.rs`.
pub mod contests;
