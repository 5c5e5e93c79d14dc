//! Coordination-free 64-bit Snowflake identifiers.
//!
//! Each ID packs a millisecond timestamp (relative to a configurable epoch), a
//! caller-assigned machine ID and a per-millisecond sequence into one
//! non-negative `i64`. IDs from a single [`SnowflakeGenerator`] are unique and
//! never decrease in issue order; generators with distinct machine IDs never
//! collide.
//!
//! ```
//! use flakeid::{SnowflakeGenerator, SystemClock, TWITTER_EPOCH};
//!
//! let generator = SnowflakeGenerator::new(42, TWITTER_EPOCH, SystemClock)?;
//! let id = generator.generate()?;
//!
//! let parts = generator.decode(id);
//! assert_eq!(parts.machine_id, 42);
//! # Ok::<(), flakeid::Error>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` spans and events from the generator.
//! - `serde`: derive `Serialize`/`Deserialize` for [`GeneratorConfig`] and
//!   [`IdComponents`].
//! - `parking-lot`: guard generator state with `parking_lot::Mutex` instead
//!   of `std::sync::Mutex`. Locks no longer poison.
//! - `cache-padded`: pad the guarded state to a cache line.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod generator;
mod layout;
mod time;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::layout::*;
pub use crate::time::*;
