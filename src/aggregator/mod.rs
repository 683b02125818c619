//! Index-driven aggregation of per-user export files.

pub mod builder;
pub mod classify;

pub use builder::{Aggregation, UserIndex, aggregate_users, load_index};
pub use classify::{FileKind, classify};
