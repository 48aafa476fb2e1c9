pub mod create;
pub mod initialize;

pub use create::*;
pub use initialize::*;
