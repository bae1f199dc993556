//! Run orchestration.

pub mod bootstrap;

pub use bootstrap::{Bootstrap, Prepared};
