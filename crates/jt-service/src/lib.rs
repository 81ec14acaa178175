pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
