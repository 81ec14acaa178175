pub mod commands;
pub mod engine;
pub mod ids;
pub mod metrics;
pub mod model;
pub mod state;
pub mod time;
pub mod types;
pub mod validate;

pub use commands::*;
pub use engine::*;
pub use ids::*;
pub use model::*;
pub use state::*;
pub use time::*;
pub use types::*;
pub use validate::*;
