//! Client-side domain state for the job tracker.

pub mod config;
pub mod error;
pub mod store;

pub use config::*;
pub use error::*;
pub use store::*;
