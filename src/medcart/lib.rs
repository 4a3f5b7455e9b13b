//! # Medcart Architecture
//!
//! Medcart is a **UI-agnostic catalog and quote-request library**: the CLI in
//! `main.rs` is just one client of it. The layering follows from that:
//!
//! ```text
//! CLI Layer (main.rs + args.rs)
//!   - parses arguments, prints, owns the terminal and exit codes
//!           │
//!           ▼
//! API Layer (api.rs)
//!   - thin facade, dispatches to commands, returns Result<CmdResult>
//!           │
//!           ▼
//! Command Layer (commands/*.rs)
//!   - the behavior: search filtering, cart mutation, quote submission
//!           │
//!           ▼
//! Storage Layer (store/)
//!   - CartStore trait; FileCartStore (production), InMemoryCartStore (tests)
//! ```
//!
//! From `api.rs` inward nothing writes to stdout, calls `process::exit`, or
//! assumes a terminal. The only asynchronous operation in the crate is the
//! outbound e-mail relay call in [`relay`]; everything else is synchronous.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`catalog`]: the read-only medicine catalog and its bundled data set
//! - [`cart`]: cart state and its mirror-every-mutation persistence
//! - [`store`]: cart storage abstraction and implementations
//! - [`quote`]: contact form validation and cart summary rendering
//! - [`relay`]: the transactional e-mail relay client
//! - [`session`]: the explicit browse/cart/submit state machine and timing
//! - [`model`]: core data types (`Medicine`, `CartLine`, `UserType`)
//! - [`slug`]: Turkish-aware slugs for detail-view addressing
//! - [`npp`]: Named Patient Program ingredient list
//! - [`config`]: relay identifiers and timeouts
//! - [`error`]: error types

pub mod api;
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod npp;
pub mod quote;
pub mod relay;
pub mod session;
pub mod slug;
pub mod store;
