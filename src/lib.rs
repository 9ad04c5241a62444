//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student registry library**: the single source
//! of truth for student records, the mutation operations applied to it, and
//! the deterministic derivation chain (filter → paginate → select) every
//! view renders from. The CLI in `main.rs` is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs, validate.rs)        │
//! │  - Parses arguments, validates forms, renders output        │
//! │  - The ONLY place that knows about stdout/stderr/prompts    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns ephemeral view state (term, page, page size)        │
//! │  - Applies the page-clamping discipline uniformly           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, selection.rs, query.rs, stats.rs)          │
//! │  - StudentStore: records + selection, sole mutable owner    │
//! │  - query: pure filter/paginate over a snapshot              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Export Adapters (export/)                                  │
//! │  - Pure consumers of an owned snapshot, no store access     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key invariants
//!
//! - Exactly one record per id; ids are store-assigned, monotonically
//!   increasing, never reused or mutated.
//! - The selection set is always a subset of the ids in the store; every
//!   delete evicts, bulk delete clears the whole set.
//! - The visible page is always a contiguous slice of the filtered
//!   collection in insertion order.
//! - Views are recomputed on read. The store caches no page state; after
//!   any mutation clients re-derive through [`api::RosterApi::current_page`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`store`]: The owning record collection and selection set
//! - [`query`]: Pure filter and pagination functions
//! - [`selection`]: The selected-id set and its consistency rules
//! - [`stats`]: Dashboard aggregates
//! - [`export`]: CSV and paginated-report artifacts from snapshots
//! - [`model`]: Core data types (`Student`, `StudentFields`) and seeds
//! - [`error`]: Error types

pub mod api;
pub mod error;
pub mod export;
pub mod model;
pub mod query;
pub mod selection;
pub mod stats;
pub mod store;

pub use error::{Result, RosterError};
