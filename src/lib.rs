//! Lode - Exhaustive search for efficient mining dig patterns.
//!
//! Enumerates every digging pattern a player could carve out within a
//! resource budget, evaluates each one against randomly generated but
//! reproducible ore samples, and keeps the Pareto frontier over two
//! metrics: efficiency (ore found per block removed) and thoroughness
//! (ore found per ore available).
//!
//! # Architecture
//!
//! - `schema`: run configuration and validation
//! - `geometry`: dimensions, indexing, wrapping and dig reach
//! - `blocks`: block kinds and mutable world samples
//! - `ore`: reproducible vein generation
//! - `search`: breadth-first pattern enumeration
//! - `stats`: evaluation, dominance and the retained frontier
//! - `pipeline`: the producer / worker-pool / merger run loop
//!
//! # Example
//!
//! ```rust,no_run
//! use lode::schema::RunConfig;
//!
//! let mut config = RunConfig::default();
//! config.search.max_dug_blocks = 10;
//! config.evaluation.random_seed = Some(42);
//!
//! let outcome = lode::pipeline::run(&config).expect("valid config");
//! for kept in outcome.store.iter() {
//!     println!("{}", kept.stats);
//! }
//! ```

pub mod blocks;
pub mod geometry;
pub mod ore;
pub mod pipeline;
pub mod schema;
pub mod search;
pub mod stats;

// Re-export commonly used types
pub use pipeline::{run, RunOutcome};
pub use schema::RunConfig;
pub use stats::{PatternStore, Statistics};
